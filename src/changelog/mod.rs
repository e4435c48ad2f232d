//! Changelog pipeline: label, rewrite, categorize, render.
//!
//! Every stage is a pure function of its inputs. [`ChangelogGenerator`]
//! holds a validated rule set and chains the stages for one run.

pub mod categorizer;
pub mod labeler;
pub mod renderer;
pub mod replacer;
pub mod template;

use tracing::{debug, info, instrument};

use crate::config::ChangelogConfig;
use crate::domain::{ChangelogDocument, Commit, Entry};
use crate::error::Result;

/// Changelog generator bound to one validated configuration
#[derive(Debug, Clone)]
pub struct ChangelogGenerator {
    config: ChangelogConfig,
}

impl ChangelogGenerator {
    /// Validates the configuration and builds a generator.
    ///
    /// Fails with a configuration error when two categories share an
    /// `order` or a `key`.
    pub fn new(config: ChangelogConfig) -> Result<Self> {
        config.validate()?;
        Ok(ChangelogGenerator { config })
    }

    /// Labels each commit and pairs it with its rewritten title.
    pub fn prepare(&self, commits: impl IntoIterator<Item = Commit>) -> Vec<Entry> {
        commits
            .into_iter()
            .map(|mut commit| {
                labeler::apply(&self.config.labelers, &mut commit);
                let display_title = replacer::rewrite(&self.config.replacers, commit.title());
                Entry {
                    commit,
                    display_title,
                }
            })
            .collect()
    }

    /// Builds the categorized document from commits in source order.
    #[instrument(skip_all)]
    pub fn generate(&self, commits: impl IntoIterator<Item = Commit>) -> ChangelogDocument {
        let entries = self.prepare(commits);
        let total = entries.len();
        let labeled = entries.iter().filter(|e| e.label().is_some()).count();
        info!(commit_count = total, labeled, "generating changelog");

        let document = ChangelogDocument::new(categorizer::group(&self.config.categories, entries));
        debug!(
            section_count = document.sections().len(),
            entry_count = document.entry_count(),
            "changelog sections built"
        );
        document
    }

    /// Formats a document to text
    pub fn render(&self, document: &ChangelogDocument) -> String {
        renderer::render(document, &self.config)
    }

    /// Generate and render in one step
    pub fn generate_formatted(&self, commits: impl IntoIterator<Item = Commit>) -> String {
        let document = self.generate(commits);
        self.render(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Category, LabelRule, ReplacementRule};

    fn generator() -> ChangelogGenerator {
        ChangelogGenerator::new(ChangelogConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_duplicate_order() {
        let mut config = ChangelogConfig::default();
        config.categories.push(Category::new("extra", "Extra", ["extra"], 1));
        let err = ChangelogGenerator::new(config).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_prepare_labels_and_rewrites() {
        let entries = generator().prepare(vec![
            Commit::new("a", "feat: login"),
            Commit::new("b", "random work"),
        ]);

        assert_eq!(entries[0].label(), Some("feature"));
        assert_eq!(entries[0].display_title, "login");
        assert_eq!(entries[0].commit.title(), "feat: login");
        assert_eq!(entries[1].label(), None);
        assert_eq!(entries[1].display_title, "random work");
    }

    #[test]
    fn test_unlabeled_commit_never_rendered() {
        let output = generator().generate_formatted(vec![
            Commit::new("aaa111", "wip something"),
            Commit::new("bbb222", "docs: readme"),
        ]);

        assert!(!output.contains("aaa111"));
        assert!(output.contains("- bbb222 readme"));
    }

    #[test]
    fn test_replacement_does_not_affect_labeling() {
        let config = ChangelogConfig {
            labelers: vec![LabelRule::new("bug", "fix:")],
            replacers: vec![ReplacementRule::new("fix:", "feat:")],
            ..ChangelogConfig::default()
        };
        let generator = ChangelogGenerator::new(config).unwrap();
        let document = generator.generate(vec![Commit::new("a", "fix: x")]);

        let bugs = document.section("bug").unwrap();
        assert_eq!(bugs.entries[0].display_title, "feat: x");
        assert!(document.section("feature").is_none());
    }

    #[test]
    fn test_prefix_with_trailing_space_matches_bare_title() {
        let config = ChangelogConfig {
            labelers: vec![LabelRule::new("bug", "fix: ")],
            ..ChangelogConfig::default()
        };
        let generator = ChangelogGenerator::new(config).unwrap();
        let document = generator.generate(vec![Commit::from_message("abc123", Some("fix: \n"))]);

        let bugs = document.section("bug").unwrap();
        assert_eq!(bugs.entries[0].commit.title(), "fix: ");
        assert_eq!(bugs.entries[0].display_title, "");
    }

    #[test]
    fn test_empty_input() {
        let generator = generator();
        let document = generator.generate(Vec::<Commit>::new());
        assert!(document.is_empty());
        assert_eq!(generator.render(&document), "");
    }
}
