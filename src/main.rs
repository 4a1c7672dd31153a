mod output;
mod scenes;

use std::io::{self, Write};

use clap::Parser;
use tracing::Level;

use crate::output::Format;
use crate::scenes::SceneName;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid shape: {0}")]
    Shape(#[from] canvas::ShapeError),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shapes", about = "Render textured shapes as bordered ASCII art")]
struct Cli {
    /// Demo scene to render.
    #[arg(long, value_enum, env = "SHAPES_SCENE", default_value = "all")]
    scene: SceneName,

    /// Output format.
    #[arg(long, value_enum, env = "SHAPES_FORMAT", default_value = "text")]
    format: Format,

    /// Log registration and render events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let scenes = cli.scene.build().inspect_err(|e| {
        tracing::error!(error = %e, code = e.error_code(), "scene construction failed");
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, (name, scene)) in scenes.iter().enumerate() {
        tracing::info!(scene = *name, drawings = scene.len(), "rendering scene");
        let canvas = scene.render();
        output::write_scene(&mut out, cli.format, name, &canvas, index == 0)?;
    }
    out.flush()?;
    Ok(())
}
