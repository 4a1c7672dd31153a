//! Hygiene — enforces coding standards at test time
//!
//! Scans the production sources of the canvas crate (everything under `src/`
//! except `*_test.rs`) for constructs that can crash or silently drop errors.
//! Rendering and sampling never fail and shape validation reports through
//! `ShapeError`, so every budget is zero.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget, why)` for each banned construct.
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the process"),
    ("unreachable!(", 0, "crashes the process"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "discards an error"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    collect(Path::new("src"), &mut out);
    out
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rust && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn hits(sources: &[(PathBuf, String)], pattern: &str) -> Vec<(String, usize)> {
    sources
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let sources = production_sources();
    assert!(sources.iter().any(|(p, _)| p.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn banned_constructs_within_budget() {
    let sources = production_sources();
    let mut failures = Vec::new();
    for &(pattern, budget, why) in RULES {
        let found = hits(&sources, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let files = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{files}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}
