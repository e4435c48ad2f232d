use std::fmt;

use crate::domain::short_hash as shorten;

/// Warnings that occur when collecting commits near release boundaries.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the latest tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// No release tag is reachable, so the whole history was read
    NoReleaseTag { current_commit_hash: String },
    /// Commits were found but none landed in a category
    NothingCategorized { commit_count: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag,
                    shorten(current_commit_hash)
                )
            }
            BoundaryWarning::NoReleaseTag {
                current_commit_hash,
            } => {
                write!(
                    f,
                    "No release tag reachable from {}, using the full history",
                    shorten(current_commit_hash)
                )
            }
            BoundaryWarning::NothingCategorized { commit_count } => {
                write!(
                    f,
                    "None of the {} commits matched a configured category",
                    commit_count
                )
            }
        }
    }
}
