/// Number of hash characters shown by `{{commitShortHash}}`.
pub const SHORT_HASH_LEN: usize = 7;

/// Truncates a hash to [`SHORT_HASH_LEN`] characters.
pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(SHORT_HASH_LEN) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}

/// A commit as supplied by a commit source.
///
/// Everything but the label is fixed at construction; the label can be
/// assigned once, by the labeler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    hash: String,
    title: String,
    author: Option<String>,
    label: Option<String>,
}

impl Commit {
    pub fn new(hash: impl Into<String>, title: impl Into<String>) -> Self {
        Commit {
            hash: hash.into(),
            title: title.into(),
            author: None,
            label: None,
        }
    }

    /// Builds a commit from a full message, keeping only its first line as the title.
    ///
    /// A missing message becomes an empty title.
    pub fn from_message(hash: impl Into<String>, message: Option<&str>) -> Self {
        let title = message
            .and_then(|m| m.lines().next())
            .unwrap_or_default()
            .to_string();
        Commit::new(hash, title)
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        self.author = if author.trim().is_empty() {
            None
        } else {
            Some(author)
        };
        self
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The hash truncated to [`SHORT_HASH_LEN`] characters.
    pub fn short_hash(&self) -> &str {
        short_hash(&self.hash)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Assigns the label. Returns `false` and leaves the commit untouched if
    /// a label was already set.
    pub fn assign_label(&mut self, label: impl Into<String>) -> bool {
        if self.label.is_some() {
            return false;
        }
        self.label = Some(label.into());
        true
    }
}
