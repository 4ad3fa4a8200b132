//! Runtime configuration
//!
//! Everything is read from the environment; there is no config file.

use std::path::PathBuf;

/// Environment variable overriding the exercise catalog location
pub const EXERCISES_PATH_ENV: &str = "FITPLAN_EXERCISES_PATH";

/// Catalog file name under the project's `data/` directory
const DEFAULT_CATALOG_FILE: &str = "exercises.json";

/// Project root, found by walking up from the executable out of
/// `target/release` or `target/debug`
pub fn project_root() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }
    path
}

/// Exercise catalog path from `FITPLAN_EXERCISES_PATH`, else `<project root>/data/exercises.json`
pub fn exercises_path() -> PathBuf {
    std::env::var(EXERCISES_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| project_root().join("data").join(DEFAULT_CATALOG_FILE))
}
