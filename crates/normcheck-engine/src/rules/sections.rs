// Required-section presence.
use crate::standard::REQUIRED_HEADERS;
use doc_model::Paragraph;

/// Required phrases with no matching canonical header at or after the end
/// of the title page, in the standard's order.
pub fn missing_required_sections(
    paragraphs: &[Paragraph],
    title_page_end: usize,
) -> Vec<&'static str> {
    let tail = &paragraphs[title_page_end.min(paragraphs.len())..];
    REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|phrase| {
            !tail.iter().any(|paragraph| {
                paragraph.style.role.is_header()
                    && paragraph.text().trim().to_lowercase().contains(phrase)
            })
        })
        .collect()
}

/// Uppercase the first letter for display («введение» -> «Введение»).
pub fn display_name(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::StyleRole;

    fn heading(text: &str) -> Paragraph {
        Paragraph::with_role(StyleRole::Heading(1), text)
    }

    fn body(text: &str) -> Paragraph {
        Paragraph::with_role(StyleRole::Body, text)
    }

    #[test]
    fn test_all_present() {
        let paragraphs = vec![
            heading("Введение"),
            heading("Список источников литературы"),
            heading("Заключение"),
        ];
        assert!(missing_required_sections(&paragraphs, 0).is_empty());
    }

    #[test]
    fn test_missing_reported_in_standard_order() {
        let paragraphs = vec![heading("Список источников литературы")];
        let missing = missing_required_sections(&paragraphs, 0);
        assert_eq!(missing, vec!["введение", "заключение"]);
    }

    #[test]
    fn test_body_mention_does_not_satisfy_requirement() {
        let paragraphs = vec![
            body("в заключение отметим"),
            heading("Введение"),
            heading("Список источников литературы"),
        ];
        let missing = missing_required_sections(&paragraphs, 0);
        assert_eq!(missing, vec!["заключение"]);
    }

    #[test]
    fn test_headers_on_title_page_do_not_count() {
        let paragraphs = vec![heading("Введение"), heading("Заключение")];
        let missing = missing_required_sections(&paragraphs, 1);
        assert_eq!(
            missing,
            vec!["введение", "список источников литературы"]
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("введение"), "Введение");
        assert_eq!(display_name(""), "");
    }
}
