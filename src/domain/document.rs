use crate::config::Category;
use crate::domain::Commit;

/// A labeled commit paired with its rewritten display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub commit: Commit,
    pub display_title: String,
}

impl Entry {
    pub fn label(&self) -> Option<&str> {
        self.commit.label()
    }
}

/// One category and its member entries, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(category: Category) -> Self {
        Section {
            category,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The categorized changelog, ready for rendering.
///
/// Sections are kept sorted by ascending category order and empty sections
/// are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangelogDocument {
    sections: Vec<Section>,
}

impl ChangelogDocument {
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut sections: Vec<Section> = sections.into_iter().filter(|s| !s.is_empty()).collect();
        sections.sort_by_key(|s| s.category.order);
        ChangelogDocument { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.category.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Distinct authors of the entries, in the order they first appear.
    pub fn contributors(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for author in self
            .sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .filter_map(|e| e.commit.author())
        {
            if !seen.contains(&author) {
                seen.push(author);
            }
        }
        seen
    }
}
