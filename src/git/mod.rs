//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the few git operations
//! next-tag needs: reading the existing tags, tagging HEAD and pushing the
//! result.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations.
//!
//! ```rust
//! # use next_tag::git::{latest_version_tag, Repository};
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let scan = latest_version_tag(repo)?;
//! println!("current tag: {}", scan.latest.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{parse_lenient, strip_prefix};
use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// Implementations map underlying errors (like `git2::Error`) to the
/// appropriate [crate::error::NextTagError] variants.
pub trait Repository {
    /// Get all tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get the OID of the commit HEAD points to
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the HEAD commit
    /// * `Err` - If HEAD is unborn or detached from any commit
    fn head_oid(&self) -> Result<Oid>;

    /// Create a lightweight tag at given OID
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, OID doesn't exist, or Git error occurs
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;

    /// Push tags to remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin", "upstream")
    /// * `tag_names` - Slice of tag names to push
    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()>;
}

/// Outcome of scanning the repository tags for the current version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagScan {
    /// Tag carrying the highest version, if any
    pub latest: Option<String>,
    /// Tags whose version part could not be parsed
    pub skipped: Vec<String>,
}

/// Finds the tag with the highest version.
///
/// Each tag is split with [`strip_prefix`] and compared by its parsed
/// version, so `v1.10.0` ranks above `v1.9.0`. Equal versions keep the
/// tag name that sorts last, which makes the result independent of the
/// order tags are listed in.
pub fn latest_version_tag<R: Repository + ?Sized>(repo: &R) -> Result<TagScan> {
    let mut scan = TagScan::default();
    let mut best = None;

    for tag in repo.list_tags()? {
        let version = match parse_lenient(strip_prefix(&tag)) {
            Ok(version) => version,
            Err(_) => {
                tracing::debug!(tag = %tag, "skipping tag without a version");
                scan.skipped.push(tag);
                continue;
            }
        };

        let candidate = (version, tag);
        if best.as_ref().map_or(true, |current| &candidate > current) {
            best = Some(candidate);
        }
    }

    scan.latest = best.map(|(_, tag)| tag);
    scan.skipped.sort();
    Ok(scan)
}
