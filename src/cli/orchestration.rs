//! Changelog workflow orchestration
//!
//! Keeps clap out of the workflow so it can be driven programmatically
//! against any [`CommitSource`].

use tracing::{info, instrument};

use crate::boundary::BoundaryWarning;
use crate::changelog::ChangelogGenerator;
use crate::config::Config;
use crate::error::Result;
use crate::git::CommitSource;

/// Arguments for the changelog workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangelogWorkflowArgs {
    /// Force the contributor section on regardless of configuration
    pub contributors: bool,
}

/// Result of a changelog run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The rendered document
    pub changelog: String,

    /// Tag the commit range started after
    pub since_tag: Option<String>,

    /// Commits read from the source
    pub commit_count: usize,

    /// Commits that appear in the document
    pub rendered_count: usize,

    /// Non-fatal issues found along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Main changelog workflow
///
/// 1. Validate the rule configuration
/// 2. Read commits since the last release point
/// 3. Label, rewrite and categorize them
/// 4. Render the document
#[instrument(skip_all)]
pub fn run_changelog_workflow(
    source: &dyn CommitSource,
    config: Config,
    args: &ChangelogWorkflowArgs,
) -> Result<WorkflowResult> {
    let mut changelog_config = config.changelog;
    if args.contributors {
        changelog_config.contributors.enabled = true;
    }
    let generator = ChangelogGenerator::new(changelog_config)?;

    let range = source.commits_since_release()?;
    let commit_count = range.commits.len();
    let mut warnings = Vec::new();

    match &range.since_tag {
        Some(tag) if commit_count == 0 => warnings.push(BoundaryWarning::NoNewCommits {
            latest_tag: tag.clone(),
            current_commit_hash: range.head.clone(),
        }),
        None => warnings.push(BoundaryWarning::NoReleaseTag {
            current_commit_hash: range.head.clone(),
        }),
        _ => {}
    }

    let document = generator.generate(range.commits);
    let rendered_count = document.entry_count();
    if commit_count > 0 && rendered_count == 0 {
        warnings.push(BoundaryWarning::NothingCategorized { commit_count });
    }

    let changelog = generator.render(&document);
    info!(
        commit_count,
        rendered_count,
        warning_count = warnings.len(),
        "changelog workflow finished"
    );

    Ok(WorkflowResult {
        changelog,
        since_tag: range.since_tag,
        commit_count,
        rendered_count,
        warnings,
    })
}
