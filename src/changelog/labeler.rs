use crate::config::LabelRule;
use crate::domain::Commit;

/// Returns the label of the first rule whose prefix starts `title`.
///
/// Matching is case-sensitive and exact. No match is a normal outcome.
pub fn label_for<'a>(rules: &'a [LabelRule], title: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| title.starts_with(rule.title.as_str()))
        .map(|rule| rule.label.as_str())
}

/// Labels a commit in place. Returns whether a label was assigned.
pub fn apply(rules: &[LabelRule], commit: &mut Commit) -> bool {
    match label_for(rules, commit.title()) {
        Some(label) => commit.assign_label(label),
        None => false,
    }
}
