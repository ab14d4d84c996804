use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::domain::version::is_strict_semver;
use crate::error::{NextTagError, Result};

/// Output format of the rendered version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    SemVer,
    MajorMinor,
    #[default]
    Auto,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::SemVer => "semver",
            Format::MajorMinor => "majorminor",
            Format::Auto => "auto",
        }
    }

    /// Resolves `auto` against the prefix-free input.
    ///
    /// Empty input and strict semantic versions resolve to `semver`, anything
    /// else to `majorminor`. Explicit formats are returned unchanged.
    pub fn resolve(self, stripped: &str) -> Format {
        match self {
            Format::Auto if stripped.is_empty() || is_strict_semver(stripped) => Format::SemVer,
            Format::Auto => Format::MajorMinor,
            explicit => explicit,
        }
    }

    /// Renders a version. `auto` renders like `semver`.
    pub fn render(self, version: &Version) -> String {
        match self {
            Format::MajorMinor => format!("{}.{}", version.major, version.minor),
            Format::SemVer | Format::Auto => version.to_string(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = NextTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "semver" => Ok(Format::SemVer),
            "majorminor" => Ok(Format::MajorMinor),
            "auto" => Ok(Format::Auto),
            other => Err(NextTagError::InvalidFormat(other.to_string())),
        }
    }
}

/// Renders a version for a format name.
///
/// Unrecognised names fall back to the full semantic version; this never fails.
pub fn render(version: &Version, format: &str) -> String {
    match format.parse::<Format>() {
        Ok(Format::MajorMinor) => Format::MajorMinor.render(version),
        _ => Format::SemVer.render(version),
    }
}
