use std::fmt;

use crate::domain::Bump;

/// Non-fatal conditions met while computing or publishing a tag.
/// These should be reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The bump was changed because the format has no patch component
    BumpAdjusted { requested: Bump, effective: Bump },
    /// Repository tags whose version part could not be parsed
    UnparsableTags { tags: Vec<String> },
    /// The repository has no tags, so the first release is computed
    NoTagsFound,
    /// The configured prefix replaced the one found on the current tag
    PrefixOverridden { detected: String, configured: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::BumpAdjusted {
                requested,
                effective,
            } => {
                write!(
                    f,
                    "Bumping {} instead of {} as format is 'majorminor'",
                    effective, requested
                )
            }
            BoundaryWarning::UnparsableTags { tags } => {
                const SHOWN: usize = 3;
                let mut listed = tags
                    .iter()
                    .take(SHOWN)
                    .map(|t| format!("'{}'", t))
                    .collect::<Vec<_>>()
                    .join(", ");
                if tags.len() > SHOWN {
                    listed.push_str(&format!(" and {} more", tags.len() - SHOWN));
                }
                write!(f, "Ignoring {} tag(s) without a version: {}", tags.len(), listed)
            }
            BoundaryWarning::NoTagsFound => {
                write!(f, "No version tags found, starting from the first release")
            }
            BoundaryWarning::PrefixOverridden {
                detected,
                configured,
            } => {
                write!(
                    f,
                    "Using configured prefix '{}' instead of detected prefix '{}'",
                    configured, detected
                )
            }
        }
    }
}
