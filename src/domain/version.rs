use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version};
use serde::{Deserialize, Serialize};

use crate::domain::format::Format;
use crate::error::{NextTagError, Result};

/// `MAJOR[.MINOR[.PATCH]][-PRE][+BUILD]`, anchored at both ends.
static LENIENT_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?",
        r"(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
        r"(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    ))
    .expect("lenient version pattern is a valid regex")
});

/// Version used when there is no previous tag.
pub fn initial_version() -> Version {
    Version::new(0, 0, 0)
}

/// Parses a version leniently.
///
/// Accepts `1`, `1.2` and `1.2.3`, each optionally followed by pre-release
/// and build metadata. Missing components default to zero and leading zeros
/// in the numeric core are tolerated. Pre-release identifiers must still obey
/// semantic versioning rules (no leading zeros in numeric identifiers).
///
/// # Example
/// ```
/// use next_tag::domain::version::parse_lenient;
///
/// assert_eq!(parse_lenient("1.2").unwrap().to_string(), "1.2.0");
/// assert!(parse_lenient("v1.2.3").is_err());
/// ```
pub fn parse_lenient(input: &str) -> Result<Version> {
    let captures = LENIENT_VERSION
        .captures(input)
        .ok_or_else(|| NextTagError::parse(input))?;

    let component = |index: usize| -> Result<u64> {
        match captures.get(index) {
            Some(m) => m
                .as_str()
                .parse::<u64>()
                .map_err(|_| NextTagError::parse(input)),
            None => Ok(0),
        }
    };

    let pre = match captures.get(4) {
        Some(m) => Prerelease::new(m.as_str()).map_err(|_| NextTagError::parse(input))?,
        None => Prerelease::EMPTY,
    };
    let build = match captures.get(5) {
        Some(m) => BuildMetadata::new(m.as_str()).map_err(|_| NextTagError::parse(input))?,
        None => BuildMetadata::EMPTY,
    };

    Ok(Version {
        major: component(1)?,
        minor: component(2)?,
        patch: component(3)?,
        pre,
        build,
    })
}

/// Checks whether the input is exactly `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
///
/// Unlike [`parse_lenient`], two-component versions and leading zeros are
/// rejected.
pub fn is_strict_semver(input: &str) -> bool {
    Version::parse(input).is_ok()
}

/// The rule selecting which version component to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
    #[default]
    Patch,
    Minor,
    Major,
    None,
}

impl Bump {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bump::Patch => "patch",
            Bump::Minor => "minor",
            Bump::Major => "major",
            Bump::None => "none",
        }
    }

    /// A major.minor scheme has no patch component, so `patch` becomes `minor`.
    pub fn normalize_for(self, format: Format) -> Bump {
        match (format, self) {
            (Format::MajorMinor, Bump::Patch) => Bump::Minor,
            (_, bump) => bump,
        }
    }

    /// Applies the bump to a version.
    ///
    /// Incrementing a component resets every lower component to zero and
    /// drops pre-release and build metadata:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    /// - **None**: unchanged
    pub fn apply(self, version: &Version) -> Result<Version> {
        let overflow = || NextTagError::Overflow(version.to_string());

        let bumped = match self {
            Bump::None => return Ok(version.clone()),
            Bump::Patch => Version::new(
                version.major,
                version.minor,
                version.patch.checked_add(1).ok_or_else(overflow)?,
            ),
            Bump::Minor => Version::new(
                version.major,
                version.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            Bump::Major => Version::new(version.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
        };

        Ok(bumped)
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bump {
    type Err = NextTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patch" => Ok(Bump::Patch),
            "minor" => Ok(Bump::Minor),
            "major" => Ok(Bump::Major),
            "none" => Ok(Bump::None),
            other => Err(NextTagError::invalid_bump(other)),
        }
    }
}

/// Computes the next version from a prefix-free version string and a bump directive.
///
/// An empty version is the first release and always yields `0.0.0`, whatever
/// the bump. The version is parsed before the bump is validated, so a
/// malformed version wins over a malformed bump.
///
/// # Example
/// ```
/// use next_tag::domain::version::next;
///
/// assert_eq!(next("1.2.3", "minor").unwrap().to_string(), "1.3.0");
/// assert_eq!(next("", "major").unwrap().to_string(), "0.0.0");
/// ```
pub fn next(version: &str, bump: &str) -> Result<Version> {
    if version.is_empty() {
        return Ok(initial_version());
    }

    let current = parse_lenient(version)?;
    bump.parse::<Bump>()?.apply(&current)
}

/// Typed counterpart of [`next`].
pub fn next_version(version: &str, bump: Bump) -> Result<Version> {
    if version.is_empty() {
        return Ok(initial_version());
    }

    bump.apply(&parse_lenient(version)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_full() {
        let v = parse_lenient("1.2.3-alpha.1+build.5").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert_eq!(v.pre.as_str(), "alpha.1");
        assert_eq!(v.build.as_str(), "build.5");
    }

    #[test]
    fn test_parse_lenient_fills_missing_components() {
        assert_eq!(parse_lenient("1.2").unwrap(), Version::new(1, 2, 0));
        assert_eq!(parse_lenient("7").unwrap(), Version::new(7, 0, 0));
        assert_eq!(parse_lenient("1-rc1").unwrap().pre.as_str(), "rc1");
    }

    #[test]
    fn test_parse_lenient_tolerates_leading_zeros_in_core() {
        assert_eq!(parse_lenient("01.02.03").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_lenient_rejects_garbage() {
        for input in ["", "v1.2.3", "1.2.3.4", "1.", "1.2-", "1.2+", "1.2-01", "abc", "1xyu"] {
            assert!(
                matches!(parse_lenient(input), Err(NextTagError::Parse(ref s)) if s == input),
                "expected parse error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_lenient_rejects_overflowing_component() {
        assert!(parse_lenient("18446744073709551616.0.0").is_err());
    }

    #[test]
    fn test_is_strict_semver() {
        assert!(is_strict_semver("1.2.3"));
        assert!(is_strict_semver("1.2.3-beta+build.123"));
        assert!(!is_strict_semver("1.2"));
        assert!(!is_strict_semver("1.2-beta"));
        assert!(!is_strict_semver("01.2.3"));
        assert!(!is_strict_semver("v1.2.3"));
        assert!(!is_strict_semver(""));
    }

    #[test]
    fn test_bump_from_str() {
        assert_eq!("patch".parse::<Bump>().unwrap(), Bump::Patch);
        assert_eq!("none".parse::<Bump>().unwrap(), Bump::None);
        assert!(matches!(
            "Patch".parse::<Bump>(),
            Err(NextTagError::InvalidBump(ref b)) if b == "Patch"
        ));
    }

    #[test]
    fn test_bump_apply_clears_metadata() {
        let v = parse_lenient("1.2.3-alpha+build.1").unwrap();
        assert_eq!(Bump::Patch.apply(&v).unwrap().to_string(), "1.2.4");
        assert_eq!(Bump::Minor.apply(&v).unwrap().to_string(), "1.3.0");
        assert_eq!(Bump::Major.apply(&v).unwrap().to_string(), "2.0.0");
        assert_eq!(Bump::None.apply(&v).unwrap().to_string(), "1.2.3-alpha+build.1");
    }

    #[test]
    fn test_bump_apply_overflow() {
        let v = Version::new(1, 2, u64::MAX);
        assert!(matches!(Bump::Patch.apply(&v), Err(NextTagError::Overflow(_))));
        assert_eq!(Bump::Minor.apply(&v).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_normalize_for_majorminor() {
        assert_eq!(Bump::Patch.normalize_for(Format::MajorMinor), Bump::Minor);
        assert_eq!(Bump::Major.normalize_for(Format::MajorMinor), Bump::Major);
        assert_eq!(Bump::None.normalize_for(Format::MajorMinor), Bump::None);
        assert_eq!(Bump::Patch.normalize_for(Format::SemVer), Bump::Patch);
    }

    #[test]
    fn test_next_table() {
        assert_eq!(next("1.2.3", "patch").unwrap(), Version::new(1, 2, 4));
        assert_eq!(next("1.2.3", "minor").unwrap(), Version::new(1, 3, 0));
        assert_eq!(next("1.2.3", "major").unwrap(), Version::new(2, 0, 0));
        assert_eq!(next("1.2.3", "none").unwrap(), Version::new(1, 2, 3));
        assert_eq!(next("0.0", "patch").unwrap(), Version::new(0, 0, 1));
    }

    #[test]
    fn test_next_empty_ignores_bump() {
        for bump in ["patch", "minor", "major", "none", "bogus"] {
            assert_eq!(next("", bump).unwrap(), Version::new(0, 0, 0));
        }
        assert_eq!(next_version("", Bump::Major).unwrap(), Version::new(0, 0, 0));
    }

    #[test]
    fn test_next_errors() {
        assert!(matches!(next("invalid", "patch"), Err(NextTagError::Parse(_))));
        assert!(matches!(next("1.2.3", "bogus"), Err(NextTagError::InvalidBump(_))));
        // version is validated first
        assert!(matches!(next("invalid", "bogus"), Err(NextTagError::Parse(_))));
    }
}
