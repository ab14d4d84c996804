//! Main workflow orchestration logic
//!
//! Turns a raw current tag and a resolved [`Config`] into the next tag:
//! prefix detection, format resolution, bump normalisation, version
//! computation and rendering. When configured, the result is then created
//! and pushed through a [`Repository`]. The workflow is independent of clap
//! so it can be driven programmatically.

use semver::Version;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{next_version, Bump, Format, Tag};
use crate::error::{NextTagError, Result};
use crate::git::{latest_version_tag, Repository};

/// Where the current tag comes from
#[derive(Debug, Clone, PartialEq)]
pub enum TagSource {
    /// Given on the command line or piped through stdin
    Given(String),
    /// The highest version tag of the repository
    Repository,
    /// No previous tag
    Empty,
}

/// Every intermediate value of a next-tag computation
#[derive(Debug, Clone, PartialEq)]
pub struct NextTagPlan {
    /// The raw current tag
    pub current: String,
    /// Prefix found on the current tag
    pub detected_prefix: String,
    /// Prefix attached to the next tag
    pub prefix: String,
    /// Current tag without its prefix
    pub stripped: String,
    /// Format after `auto` was resolved
    pub format: Format,
    /// Bump asked for
    pub requested_bump: Bump,
    /// Bump actually applied
    pub bump: Bump,
    /// The next version
    pub version: Version,
    /// The next tag, prefix included
    pub tag: String,
}

impl NextTagPlan {
    /// Whether the bump was changed to fit the format
    pub fn bump_adjusted(&self) -> bool {
        self.requested_bump != self.bump
    }
}

/// Result of a successful tag workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub plan: NextTagPlan,

    /// Whether the tag was created in the repository
    pub created: bool,

    /// Whether the tag was pushed to the remote
    pub pushed: bool,

    pub warnings: Vec<BoundaryWarning>,
}

/// Computes the next tag for a raw current tag.
///
/// # Example
/// ```
/// use next_tag::cli::orchestration::plan_next_tag;
/// use next_tag::config::Config;
///
/// let plan = plan_next_tag("v1.2.3", &Config::default()).unwrap();
/// assert_eq!(plan.tag, "v1.2.4");
/// ```
pub fn plan_next_tag(current: &str, config: &Config) -> Result<NextTagPlan> {
    let Tag { prefix, version } = Tag::split(current);

    let format = config.format.resolve(&version);
    let bump = config.bump.normalize_for(format);
    let next = next_version(&version, bump)?;

    let output_prefix = config.prefix.clone().unwrap_or_else(|| prefix.clone());
    let tag = Tag::compose(&output_prefix, &format.render(&next));

    tracing::debug!(
        current,
        prefix = %prefix,
        stripped = %version,
        format = %format,
        bump = %bump,
        next = %next,
        "computed next tag"
    );

    Ok(NextTagPlan {
        current: current.to_string(),
        detected_prefix: prefix,
        prefix: output_prefix,
        stripped: version,
        format,
        requested_bump: config.bump,
        bump,
        version: next,
        tag,
    })
}

fn require_repository<'a, R: Repository + ?Sized>(
    repo: Option<&'a R>,
    action: &str,
) -> Result<&'a R> {
    repo.ok_or_else(|| NextTagError::config(format!("{} requires a git repository", action)))
}

/// Main tag workflow
///
/// Orchestrates the entire tagging process:
/// 1. Resolve the current tag from its source
/// 2. Compute the next tag
/// 3. Create it at HEAD when configured
/// 4. Push it to the configured remote when configured
///
/// # Arguments
///
/// * `source` - Where the current tag comes from
/// * `config` - Resolved configuration
/// * `repo` - Repository for reading, creating and pushing tags, if any
///
/// # Returns
///
/// The computed tag with what was done to it, or the first error met
pub fn run_tag_workflow<R: Repository + ?Sized>(
    source: TagSource,
    config: &Config,
    repo: Option<&R>,
) -> Result<WorkflowResult> {
    let mut warnings = Vec::new();

    let current = match source {
        TagSource::Given(tag) => tag,
        TagSource::Empty => String::new(),
        TagSource::Repository => {
            let scan = latest_version_tag(require_repository(repo, "Reading tags")?)?;
            if !scan.skipped.is_empty() {
                warnings.push(BoundaryWarning::UnparsableTags { tags: scan.skipped });
            }
            match scan.latest {
                Some(tag) => tag,
                None => {
                    warnings.push(BoundaryWarning::NoTagsFound);
                    String::new()
                }
            }
        }
    };

    let plan = plan_next_tag(&current, config)?;

    if plan.bump_adjusted() {
        warnings.push(BoundaryWarning::BumpAdjusted {
            requested: plan.requested_bump,
            effective: plan.bump,
        });
    }
    if !plan.detected_prefix.is_empty() && plan.detected_prefix != plan.prefix {
        warnings.push(BoundaryWarning::PrefixOverridden {
            detected: plan.detected_prefix.clone(),
            configured: plan.prefix.clone(),
        });
    }

    let mut result = WorkflowResult {
        plan,
        created: false,
        pushed: false,
        warnings,
    };

    if !config.creates_tag() {
        return Ok(result);
    }

    let repo = require_repository(repo, "Creating tags")?;
    let head = repo.head_oid()?;
    repo.create_tag(&result.plan.tag, head)?;
    result.created = true;
    tracing::info!(tag = %result.plan.tag, %head, "created tag");

    if config.git.push {
        repo.push_tags(&config.git.remote, &[result.plan.tag.as_str()])?;
        result.pushed = true;
        tracing::info!(tag = %result.plan.tag, remote = %config.git.remote, "pushed tag");
    }

    Ok(result)
}
