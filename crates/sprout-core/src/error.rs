//! Error type shared by every scaffolding operation

use std::path::{Component, Path};
use thiserror::Error;

/// Errors raised while scaffolding a package
///
/// Filesystem failures pass through untouched: the `Io` variant is
/// transparent, so its `kind()` and message are the platform's own.
/// Failures of external tools (git, virtualenv) are never errors; see
/// [`crate::runtime::ToolOutcome`].
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A required text parameter was empty, not text, or not usable as a path component
    #[error("{name} must be {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// An extra ignore pattern would not fit on a single line
    #[error("ignore pattern {0:?} spans more than one line")]
    InvalidPattern(String),

    /// The license name is not one of the bundled templates
    #[error("'{0}' isn't a license sprout knows about")]
    UnknownLicense(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Borrow `value` as UTF-8 text, or fail with [`ScaffoldError::InvalidArgument`]
pub(crate) fn require_text<'a>(
    name: &'static str,
    value: &'a Path,
) -> Result<&'a str> {
    value.to_str().ok_or_else(|| ScaffoldError::InvalidArgument {
        name,
        reason: format!("valid UTF-8 text, not '{}'", value.display()),
    })
}

/// Check that `value` names exactly one directory, with no separators or `.`/`..`
pub(crate) fn require_dir_name(name: &'static str, value: &str) -> Result<()> {
    let invalid = |reason: &str| ScaffoldError::InvalidArgument {
        name,
        reason: format!("{}, not '{}'", reason, value),
    };

    if value.is_empty() {
        return Err(invalid("non-empty text"));
    }

    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(component)), None)
            if component == value && !value.contains(['/', '\\']) =>
        {
            Ok(())
        }
        _ => Err(invalid("a single directory name")),
    }
}
