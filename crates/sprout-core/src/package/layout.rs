//! Directories and metadata files of a package

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Version every new package starts at
pub const INITIAL_VERSION: &str = "0.1.0";

/// Metadata/marker file inside importable directories
pub const INIT_FILE: &str = "__init__.py";

pub const TESTS_DIR: &str = "tests";

/// Create `location/package`
///
/// Missing parents of `location` are created; the project root itself must
/// not exist yet, so a second run fails with `AlreadyExists`.
pub fn make_project_root(location: &Path, package: &str) -> Result<PathBuf> {
    fs::create_dir_all(location)?;
    let root = location.join(package);
    fs::create_dir(&root)?;
    Ok(root)
}

/// Create the importable `path/name` directory and its `__init__.py`
///
/// The file holds `version = "0.1.0"` on its own line, then
/// `author = "<author>"` without a trailing newline when an author is given.
pub fn create_sub_package(path: &Path, name: &str, author: Option<&str>) -> Result<PathBuf> {
    let dir = path.join(name);
    fs::create_dir(&dir)?;

    let mut contents = format!("version = \"{}\"\n", INITIAL_VERSION);
    if let Some(author) = author.filter(|a| !a.is_empty()) {
        contents.push_str(&format!("author = \"{}\"", author));
    }
    fs::write(dir.join(INIT_FILE), contents)?;

    Ok(dir)
}

/// Create `path/tests` with an empty `__init__.py`
pub fn create_test_directory(path: &Path) -> Result<PathBuf> {
    let dir = path.join(TESTS_DIR);
    fs::create_dir(&dir)?;
    fs::write(dir.join(INIT_FILE), "")?;
    Ok(dir)
}
