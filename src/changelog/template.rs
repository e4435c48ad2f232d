//! `{{placeholder}}` substitution for line and heading templates.

use crate::config::Category;
use crate::domain::Entry;

pub const COMMIT_SHORT_HASH: &str = "{{commitShortHash}}";
pub const COMMIT_HASH: &str = "{{commitHash}}";
pub const COMMIT_TITLE: &str = "{{commitTitle}}";
pub const COMMIT_AUTHOR: &str = "{{commitAuthor}}";
pub const CATEGORY_TITLE: &str = "{{categoryTitle}}";
pub const CATEGORY_KEY: &str = "{{categoryKey}}";
pub const CONTRIBUTOR_NAME: &str = "{{contributorName}}";

/// Substitutes each `(placeholder, value)` pair in a single left-to-right pass.
///
/// Values are never rescanned, so a title that itself contains `{{...}}` is
/// emitted literally. Unknown placeholders are left as written.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        rest = &rest[start..];
        for (placeholder, value) in values {
            if let Some(after) = rest.strip_prefix(placeholder) {
                output.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        output.push_str("{{");
        rest = &rest[2..];
    }
    output.push_str(rest);
    output
}

pub fn commit_line(template: &str, entry: &Entry) -> String {
    fill(
        template,
        &[
            (COMMIT_SHORT_HASH, entry.commit.short_hash()),
            (COMMIT_HASH, entry.commit.hash()),
            (COMMIT_TITLE, entry.display_title.as_str()),
            (COMMIT_AUTHOR, entry.commit.author().unwrap_or_default()),
        ],
    )
}

pub fn category_heading(template: &str, category: &Category) -> String {
    fill(
        template,
        &[
            (CATEGORY_TITLE, category.title.as_str()),
            (CATEGORY_KEY, category.key.as_str()),
        ],
    )
}

pub fn contributor(template: &str, name: &str) -> String {
    fill(template, &[(CONTRIBUTOR_NAME, name)])
}
