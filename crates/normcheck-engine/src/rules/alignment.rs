// Alignment resolution: direct -> style -> raw attribute -> left.
use crate::resolve;
use doc_model::{Alignment, Paragraph};

pub fn effective_alignment(paragraph: &Paragraph) -> Alignment {
    resolve::first_some([
        paragraph.alignment,
        paragraph.style.alignment,
        paragraph
            .raw
            .justification
            .as_deref()
            .and_then(Alignment::from_jc_val),
    ])
    .unwrap_or(Alignment::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::StyleRole;

    fn body() -> Paragraph {
        Paragraph::with_role(StyleRole::Body, "текст")
    }

    #[test]
    fn test_defaults_to_left() {
        assert_eq!(effective_alignment(&body()), Alignment::Left);
    }

    #[test]
    fn test_direct_wins_over_style() {
        let mut paragraph = body();
        paragraph.alignment = Some(Alignment::Center);
        paragraph.style.alignment = Some(Alignment::Justify);
        assert_eq!(effective_alignment(&paragraph), Alignment::Center);
    }

    #[test]
    fn test_style_wins_over_raw() {
        let mut paragraph = body();
        paragraph.style.alignment = Some(Alignment::Justify);
        paragraph.raw.justification = Some("center".to_string());
        assert_eq!(effective_alignment(&paragraph), Alignment::Justify);
    }

    #[test]
    fn test_raw_attribute_decoded() {
        let mut paragraph = body();
        paragraph.raw.justification = Some("both".to_string());
        assert_eq!(effective_alignment(&paragraph), Alignment::Justify);
    }

    #[test]
    fn test_unknown_raw_value_falls_back_to_left() {
        let mut paragraph = body();
        paragraph.raw.justification = Some("thaiDistribute".to_string());
        assert_eq!(effective_alignment(&paragraph), Alignment::Left);
    }
}
