//! Domain logic - pure version arithmetic independent of git operations

pub mod format;
pub mod tag;
pub mod version;

pub use format::{render, Format};
pub use tag::{extract_prefix, strip_prefix, Tag};
pub use version::{is_strict_semver, next, next_version, parse_lenient, Bump};
