//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Everything goes to stderr so the changelog itself can be piped from stdout.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::config::Category;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One line per category: order, key, title and accepted labels.
pub fn format_category(category: &Category) -> String {
    let labels: Vec<&str> = category.labels.iter().map(String::as_str).collect();
    format!(
        "{:>3}. {} - {} [{}]",
        category.order,
        category.key,
        category.title,
        labels.join(", ")
    )
}

/// Display configured categories, already sorted by order.
pub fn display_categories(categories: &[&Category]) {
    println!("{}", style("Configured categories:").bold());
    for category in categories {
        println!("  {}", format_category(category));
    }
}

/// Summarise a run: how many commits were read and how many were rendered.
pub fn format_summary(commit_count: usize, rendered_count: usize, since_tag: Option<&str>) -> String {
    match since_tag {
        Some(tag) => format!(
            "{} of {} commits since {} included in the changelog",
            rendered_count, commit_count, tag
        ),
        None => format!(
            "{} of {} commits included in the changelog",
            rendered_count, commit_count
        ),
    }
}
