//! Domain types shared by the changelog pipeline, independent of git

pub mod commit;
pub mod document;

pub use commit::{short_hash, Commit, SHORT_HASH_LEN};
pub use document::{ChangelogDocument, Entry, Section};
