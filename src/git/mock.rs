use crate::domain::Commit;
use crate::error::Result;
use crate::git::{CommitRange, CommitSource};

/// Commit source serving a fixed range, for tests
#[derive(Debug, Clone, Default)]
pub struct MockCommitSource {
    range: CommitRange,
}

impl MockCommitSource {
    /// Create a new empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit; commits are served in insertion order
    pub fn add_commit(&mut self, commit: Commit) {
        self.range.commits.push(commit);
    }

    pub fn with_commit(mut self, hash: &str, title: &str) -> Self {
        self.add_commit(Commit::new(hash, title));
        self
    }

    pub fn with_since_tag(mut self, tag: impl Into<String>) -> Self {
        self.range.since_tag = Some(tag.into());
        self
    }

    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.range.head = head.into();
        self
    }
}

impl CommitSource for MockCommitSource {
    fn commits_since_release(&self) -> Result<CommitRange> {
        Ok(self.range.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_basic() {
        let source = MockCommitSource::new()
            .with_commit("abc123", "feat: one")
            .with_commit("def456", "fix: two")
            .with_since_tag("v1.0.0")
            .with_head("abc123");

        let range = source.commits_since_release().unwrap();
        assert_eq!(range.since_tag.as_deref(), Some("v1.0.0"));
        assert_eq!(range.head, "abc123");
        let hashes: Vec<&str> = range.commits.iter().map(|c| c.hash()).collect();
        assert_eq!(hashes, vec!["abc123", "def456"]);
    }

    #[test]
    fn test_mock_source_default() {
        let range = MockCommitSource::default().commits_since_release().unwrap();
        assert!(range.commits.is_empty());
        assert!(range.since_tag.is_none());
    }
}
