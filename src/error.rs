use thiserror::Error;

/// Unified error type for next-tag operations
#[derive(Error, Debug)]
pub enum NextTagError {
    #[error("Version parsing error: '{0}' is not a valid semantic version")]
    Parse(String),

    #[error("Invalid bump '{0}': expected one of patch, minor, major, none")]
    InvalidBump(String),

    #[error("Invalid format '{0}': expected one of semver, majorminor, auto")]
    InvalidFormat(String),

    #[error("Version overflow: cannot increment '{0}'")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in next-tag
pub type Result<T> = std::result::Result<T, NextTagError>;

impl NextTagError {
    /// Create a parse error for the offending input
    pub fn parse(input: impl Into<String>) -> Self {
        NextTagError::Parse(input.into())
    }

    /// Create an invalid bump error for the offending directive
    pub fn invalid_bump(bump: impl Into<String>) -> Self {
        NextTagError::InvalidBump(bump.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextTagError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        NextTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        NextTagError::Remote(msg.into())
    }
}
