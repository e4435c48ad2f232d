use crate::config::Category;
use crate::domain::{Entry, Section};

/// Index of the category that owns `label`.
///
/// When several categories list the same label, the first one declared wins.
pub fn category_for(categories: &[Category], label: &str) -> Option<usize> {
    categories.iter().position(|c| c.accepts(label))
}

/// Groups entries into one section per category, in declaration order.
///
/// Entry order within a section follows the input. Unlabeled entries, and
/// entries whose label no category accepts, are dropped. Empty sections are
/// kept so callers can see every declared category.
pub fn group(categories: &[Category], entries: impl IntoIterator<Item = Entry>) -> Vec<Section> {
    let mut sections: Vec<Section> = categories.iter().cloned().map(Section::new).collect();

    for entry in entries {
        let Some(label) = entry.label() else {
            continue;
        };
        if let Some(index) = category_for(categories, label) {
            sections[index].push(entry);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Commit;

    fn entry(hash: &str, label: Option<&str>) -> Entry {
        let mut commit = Commit::new(hash, format!("title {}", hash));
        if let Some(label) = label {
            commit.assign_label(label);
        }
        Entry {
            display_title: commit.title().to_string(),
            commit,
        }
    }

    fn hashes(section: &Section) -> Vec<&str> {
        section.entries.iter().map(|e| e.commit.hash()).collect()
    }

    #[test]
    fn test_groups_preserving_source_order() {
        let categories = vec![
            Category::new("feature", "Features", ["feature"], 1),
            Category::new("bug", "Bugs", ["bug"], 2),
        ];
        let sections = group(
            &categories,
            vec![
                entry("c3", Some("bug")),
                entry("c2", Some("feature")),
                entry("c1", Some("bug")),
            ],
        );

        assert_eq!(hashes(&sections[0]), vec!["c2"]);
        assert_eq!(hashes(&sections[1]), vec!["c3", "c1"]);
    }

    #[test]
    fn test_first_declared_category_wins() {
        let categories = vec![
            Category::new("later", "Later", ["shared"], 1),
            Category::new("first", "First", ["shared", "other"], 0),
        ];
        assert_eq!(category_for(&categories, "shared"), Some(0));

        let sections = group(&categories, vec![entry("a", Some("shared"))]);
        assert_eq!(hashes(&sections[0]), vec!["a"]);
        assert!(sections[1].is_empty());
    }

    #[test]
    fn test_unlabeled_and_unknown_labels_excluded() {
        let categories = vec![Category::new("feature", "Features", ["feature"], 1)];
        let sections = group(
            &categories,
            vec![
                entry("a", None),
                entry("b", Some("unknown")),
                entry("c", Some("feature")),
            ],
        );

        assert_eq!(sections.len(), 1);
        assert_eq!(hashes(&sections[0]), vec!["c"]);
    }

    #[test]
    fn test_no_commit_in_two_sections() {
        let categories = vec![
            Category::new("one", "One", ["x"], 1),
            Category::new("two", "Two", ["x"], 2),
            Category::new("three", "Three", ["x", "y"], 3),
        ];
        let sections = group(
            &categories,
            vec![entry("a", Some("x")), entry("b", Some("y"))],
        );

        let total: usize = sections.iter().map(|s| s.entries.len()).sum();
        assert_eq!(total, 2);
        assert_eq!(hashes(&sections[0]), vec!["a"]);
        assert_eq!(hashes(&sections[2]), vec!["b"]);
    }
}
