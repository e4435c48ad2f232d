use crate::config::ReplacementRule;

/// Applies every rule in order, each one to the previous rule's output.
///
/// All occurrences of `search` are replaced. Rules with an empty `search`
/// are skipped.
pub fn rewrite(rules: &[ReplacementRule], title: &str) -> String {
    rules
        .iter()
        .filter(|rule| !rule.search.is_empty())
        .fold(title.to_string(), |acc, rule| {
            acc.replace(rule.search.as_str(), &rule.replace)
        })
}
