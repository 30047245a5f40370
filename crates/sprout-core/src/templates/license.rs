//! Bundled license templates

use crate::error::{Result, ScaffoldError};
use chrono::Datelike;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const MIT_TEMPLATE: &str = include_str!("../../templates/licenses/mit.txt");
const APACHE_TEMPLATE: &str = include_str!("../../templates/licenses/apache.txt");
const GNU_TEMPLATE: &str = include_str!("../../templates/licenses/gnu.txt");

const YEAR_SLOT: &str = "{year}";
const AUTHOR_SLOT: &str = "{author}";

/// File name of the rendered license
pub const LICENSE_FILE: &str = "LICENSE";

/// License templates sprout can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum License {
    Mit,
    Apache,
    Gnu,
}

impl License {
    pub const ALL: [License; 3] = [License::Mit, License::Apache, License::Gnu];

    /// Identifier accepted by [`License::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            License::Mit => "mit",
            License::Apache => "apache",
            License::Gnu => "gnu",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            License::Mit => "MIT License",
            License::Apache => "Apache License 2.0",
            License::Gnu => "GNU General Public License v3",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            License::Mit => MIT_TEMPLATE,
            License::Apache => APACHE_TEMPLATE,
            License::Gnu => GNU_TEMPLATE,
        }
    }

    /// Fill the template's slots, year first and then author
    pub fn render(&self, year: i32, author: &str) -> String {
        self.template()
            .replacen(YEAR_SLOT, &year.to_string(), 1)
            .replacen(AUTHOR_SLOT, author, 1)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for License {
    type Err = ScaffoldError;

    /// Exact, case-sensitive match on the license identifier
    fn from_str(s: &str) -> Result<Self> {
        License::ALL
            .into_iter()
            .find(|license| license.name() == s)
            .ok_or_else(|| ScaffoldError::UnknownLicense(s.to_string()))
    }
}

/// Write `path/LICENSE` from the named template for the current year
///
/// Unknown names fail before anything is written.
pub fn create_license_file(path: &Path, license: &str, author: &str) -> Result<PathBuf> {
    let license: License = license.parse()?;
    let contents = license.render(chrono::Local::now().year(), author);

    let target = path.join(LICENSE_FILE);
    fs::write(&target, contents)?;
    Ok(target)
}
