use std::collections::HashMap;
use std::path::Path;

use git2::{ObjectType, Oid, Repository, Sort};
use tracing::debug;

use crate::domain::Commit;
use crate::error::{ChangelogError, Result};
use crate::git::{CommitRange, CommitSource};

/// Reads commits since the latest release tag from a git repository.
pub struct Git2CommitSource {
    repo: Repository,
    rev: String,
    since: Option<String>,
}

impl Git2CommitSource {
    /// Open or discover a git repository, reading from `HEAD`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2CommitSource {
            repo,
            rev: "HEAD".to_string(),
            since: None,
        }
    }

    /// Read from this revision instead of `HEAD`
    pub fn with_rev(mut self, rev: impl Into<String>) -> Self {
        self.rev = rev.into();
        self
    }

    /// Start after this tag instead of the latest reachable one
    pub fn with_since(mut self, tag: impl Into<String>) -> Self {
        self.since = Some(tag.into());
        self
    }

    fn resolve_rev(&self) -> Result<Oid> {
        let object = self.repo.revparse_single(&self.rev).map_err(|e| {
            ChangelogError::commit_source(format!("Cannot resolve '{}': {}", self.rev, e))
        })?;
        Ok(object.peel_to_commit()?.id())
    }

    fn tag_target(&self, tag_name: &str) -> Result<Option<Oid>> {
        match self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
            Ok(reference) => Ok(Some(reference.peel(ObjectType::Commit)?.id())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Maps each tagged commit to its tag. When several tags point at one
    /// commit, the alphabetically last name is kept.
    fn tagged_commits(&self) -> Result<HashMap<Oid, String>> {
        let mut tagged = HashMap::new();
        let tags = self.repo.tag_names(None)?;
        let mut names: Vec<&str> = tags.iter().flatten().collect();
        names.sort_unstable();

        for name in names {
            // tags on trees or blobs cannot bound a commit range
            if let Ok(Some(oid)) = self.tag_target(name) {
                tagged.insert(oid, name.to_string());
            }
        }
        Ok(tagged)
    }

    /// Finds the latest tag reachable from `head`, including `head` itself.
    fn latest_tag(&self, head: Oid) -> Result<Option<(String, Oid)>> {
        let tagged = self.tagged_commits()?;
        if tagged.is_empty() {
            return Ok(None);
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head)?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(name) = tagged.get(&oid) {
                return Ok(Some((name.clone(), oid)));
            }
        }
        Ok(None)
    }
}

impl CommitSource for Git2CommitSource {
    fn commits_since_release(&self) -> Result<CommitRange> {
        let head = self.resolve_rev()?;

        let boundary = match &self.since {
            Some(tag) => {
                let oid = self.tag_target(tag)?.ok_or_else(|| {
                    ChangelogError::commit_source(format!("Tag not found: {}", tag))
                })?;
                Some((tag.clone(), oid))
            }
            None => self.latest_tag(head)?,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head)?;
        if let Some((_, oid)) = &boundary {
            revwalk.hide(*oid)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let mut entry = Commit::from_message(commit.id().to_string(), commit.message());
            if let Some(author) = commit.author().name() {
                entry = entry.with_author(author);
            }
            commits.push(entry);
        }

        debug!(
            rev = %self.rev,
            since = boundary.as_ref().map(|(name, _)| name.as_str()),
            commit_count = commits.len(),
            "collected commits"
        );

        Ok(CommitRange {
            since_tag: boundary.map(|(name, _)| name),
            head: head.to_string(),
            commits,
        })
    }
}
