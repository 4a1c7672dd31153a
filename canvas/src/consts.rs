//! Shared constants for the canvas crate.

// ── Pixels ──────────────────────────────────────────────────────

/// Character a freshly allocated scene canvas is filled with.
pub const BACKGROUND: char = ' ';

/// Character a shape paints when it has no texture, or its texture has no
/// sample at the point.
pub const DEFAULT_FILL: char = '.';

// ── Membership ──────────────────────────────────────────────────

/// Slack added to a circle's radius so that discrete grid cells on the rim
/// are counted as inside.
pub const CIRCLE_TOLERANCE: f64 = 0.2;

// ── Framing ─────────────────────────────────────────────────────

/// Border unit used for the frame around printed canvases.
pub const BORDER: &str = "~ ";

/// Separator written after every content cell.
pub const CELL_SEPARATOR: char = ' ';
