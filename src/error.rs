use thiserror::Error;

/// Unified error type for git-changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: categories '{first}' and '{second}' share order {order}")]
    DuplicateCategoryOrder {
        order: i64,
        first: String,
        second: String,
    },

    #[error("Invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("Commit source error: {0}")]
    Source(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a commit source error with context
    pub fn commit_source(msg: impl Into<String>) -> Self {
        ChangelogError::Source(msg.into())
    }

    /// True for every error raised while loading or validating configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ChangelogError::Config(_)
                | ChangelogError::DuplicateCategoryOrder { .. }
                | ChangelogError::InvalidToml(_)
        )
    }
}
