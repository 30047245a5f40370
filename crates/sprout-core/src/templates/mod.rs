//! Static file contents written into a new package
//!
//! This module provides:
//! - The bundled license templates and their rendering
//! - `.gitignore` generation

pub mod ignore;
pub mod license;

pub use ignore::{write_ignore_file, BASE_PATTERNS, IGNORE_FILE};
pub use license::{create_license_file, License, LICENSE_FILE};
