//! `.gitignore` generation

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};

pub const IGNORE_FILE: &str = ".gitignore";

/// Patterns every generated `.gitignore` starts with, in order
pub const BASE_PATTERNS: [&str; 9] = [
    "*.pyc",
    "__pycache__",
    ".DS_Store",
    "*env",
    "build",
    "_static",
    "_templates",
    "dist",
    "*.egg-info",
];

/// Write `path/.gitignore` with the base patterns followed by `extra`
///
/// Lines are joined with `\n` and no trailing newline is added. An extra
/// pattern containing a line break is rejected before anything is written.
pub fn write_ignore_file<S: AsRef<str>>(path: &Path, extra: &[S]) -> Result<PathBuf> {
    if let Some(bad) = extra
        .iter()
        .map(AsRef::as_ref)
        .find(|pattern| pattern.contains(['\n', '\r']))
    {
        return Err(ScaffoldError::InvalidPattern(bad.to_string()));
    }

    let contents = BASE_PATTERNS
        .iter()
        .copied()
        .chain(extra.iter().map(AsRef::as_ref))
        .collect::<Vec<_>>()
        .join("\n");

    let target = path.join(IGNORE_FILE);
    fs::write(&target, contents)?;
    Ok(target)
}
