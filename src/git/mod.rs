//! Commit sources: where the pipeline's input comes from.
//!
//! The pipeline only consumes [`CommitRange`]s. [`Git2CommitSource`] reads a
//! real repository through `git2`; [`MockCommitSource`] serves fixed data in
//! tests.

pub mod mock;
pub mod repository;

pub use mock::MockCommitSource;
pub use repository::Git2CommitSource;

use crate::domain::Commit;
use crate::error::Result;

/// Commits since the last release point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitRange {
    /// Tag the range starts after, or `None` when the whole history is used
    pub since_tag: Option<String>,
    /// Full hash of the newest commit considered
    pub head: String,
    /// Commits newest first
    pub commits: Vec<Commit>,
}

/// Supplies the ordered commit list for one changelog run.
pub trait CommitSource {
    fn commits_since_release(&self) -> Result<CommitRange>;
}
