//! Violation aggregation for presentation
//!
//! The validator reports every deviation; callers showing results to a
//! person want them grouped by category with a bounded number of examples.
//! Deduplication and truncation happen here only, never in the validator.

use doc_model::{Category, Violation};

/// Examples shown per category before collapsing the rest into a count.
pub const MAX_EXAMPLES: usize = 3;

/// Upper bound on the rendered summary, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub examples: Vec<String>,
    pub omitted: usize,
}

/// Group violations by category in first-appearance order, de-duplicating
/// identical details and keeping at most [`MAX_EXAMPLES`] examples each.
pub fn group(violations: &[Violation]) -> Vec<CategoryGroup> {
    let mut grouped: Vec<(Category, Vec<String>)> = Vec::new();

    for violation in violations {
        match grouped.iter_mut().find(|(c, _)| *c == violation.category) {
            Some((_, details)) => {
                if !details.contains(&violation.detail) {
                    details.push(violation.detail.clone());
                }
            }
            None => grouped.push((violation.category, vec![violation.detail.clone()])),
        }
    }

    grouped
        .into_iter()
        .map(|(category, details)| {
            let omitted = details.len().saturating_sub(MAX_EXAMPLES);
            let examples = details.into_iter().take(MAX_EXAMPLES).collect();
            CategoryGroup {
                category,
                examples,
                omitted,
            }
        })
        .collect()
}

/// Render grouped violations as a bounded human-readable summary.
pub fn render(groups: &[CategoryGroup]) -> String {
    let mut message = String::new();

    for group in groups {
        message.push_str("❌ ");
        message.push_str(group.category.label());
        message.push_str(":\n");
        for example in &group.examples {
            message.push_str("• ");
            message.push_str(example);
            message.push('\n');
        }
        if group.omitted > 0 {
            message.push_str(&format!("• и ещё {} подобных случаев\n", group.omitted));
        }
        message.push('\n');
    }

    truncate_chars(&message, MAX_MESSAGE_CHARS)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}
