use tracing::{debug, instrument};

use super::template;
use crate::config::ChangelogConfig;
use crate::domain::ChangelogDocument;

/// Renders a categorized document to text.
///
/// Each section is its heading followed by one line per entry; sections are
/// separated by a blank line. The contributor section is appended only when
/// enabled and at least one rendered commit has an author. An empty document
/// renders as an empty string.
#[instrument(skip_all, fields(section_count = document.sections().len()))]
pub fn render(document: &ChangelogDocument, config: &ChangelogConfig) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for section in document.sections() {
        let mut block = template::category_heading(&config.category_title_format, &section.category);
        block.push('\n');
        for entry in &section.entries {
            block.push_str(&template::commit_line(&config.format, entry));
            block.push('\n');
        }
        blocks.push(block);
    }

    if config.contributors.enabled {
        let names: Vec<String> = document
            .contributors()
            .into_iter()
            .map(|name| template::contributor(&config.contributors.format, name))
            .collect();
        if !names.is_empty() {
            blocks.push(format!("{}\n{}\n", config.contributors.title, names.join(", ")));
        }
    }

    let output = blocks.join("\n");
    debug!(output_len = output.len(), "changelog rendered");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Category;
    use crate::domain::{Commit, Entry, Section};

    fn entry(hash: &str, title: &str, author: &str) -> Entry {
        Entry {
            commit: Commit::new(hash, title).with_author(author),
            display_title: title.to_string(),
        }
    }

    fn document() -> ChangelogDocument {
        let mut bugs = Section::new(Category::new("bug", "🐞 Bug Fixes", ["bug"], 2));
        bugs.push(entry("bbbbbbbbbb", "fix crash", "Ann"));
        let mut features = Section::new(Category::new("feature", "🚀 New Features", ["feature"], 1));
        features.push(entry("aaaaaaaaaa", "add login", "Bob"));
        features.push(entry("cccccccccc", "add logout", "Ann"));
        ChangelogDocument::new(vec![bugs, features])
    }

    #[test]
    fn test_render_sections_in_order() {
        let output = render(&document(), &ChangelogConfig::default());
        assert_eq!(
            output,
            "## 🚀 New Features\n\
             - aaaaaaa add login\n\
             - ccccccc add logout\n\
             \n\
             ## 🐞 Bug Fixes\n\
             - bbbbbbb fix crash\n"
        );
    }

    #[test]
    fn test_contributors_only_when_enabled() {
        let mut config = ChangelogConfig::default();
        assert!(!render(&document(), &config).contains("Contributors"));

        config.contributors.enabled = true;
        let output = render(&document(), &config);
        assert!(output.ends_with("\n## Contributors\nBob, Ann\n"));
    }

    #[test]
    fn test_contributors_format() {
        let mut config = ChangelogConfig::default();
        config.contributors.enabled = true;
        config.contributors.format = "@{{contributorName}}".to_string();
        let output = render(&document(), &config);
        assert!(output.contains("@Bob, @Ann"));
    }

    #[test]
    fn test_empty_document_renders_empty() {
        let mut config = ChangelogConfig::default();
        config.contributors.enabled = true;
        assert_eq!(render(&ChangelogDocument::default(), &config), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = ChangelogConfig::default();
        let doc = document();
        assert_eq!(render(&doc, &config), render(&doc, &config));
    }
}
