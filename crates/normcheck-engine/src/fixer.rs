//! Canonicalization pass
//!
//! Rewrites a non-conforming document into a conforming one. Deterministic
//! and total for classifiable input: the result is a new document, never a
//! partially mutated input. Structural issues (missing sections, appendix
//! letters and ordering) require human authorship and are left untouched.

use crate::error::EngineError;
use crate::regions;
use crate::standard::{
    self, BOTTOM_MARGIN_MM, FIRST_LINE_INDENT_CM, LEFT_MARGIN_MM, LINE_SPACING, MAIN_FONT_NAME,
    MAIN_FONT_SIZE_PT, RIGHT_MARGIN_MM, TOP_MARGIN_MM,
};
use doc_model::{Alignment, Document, Length, LineSpacing};

/// Produce a conforming copy of the document.
///
/// Paragraphs strictly before the title-page boundary keep all their
/// formatting; everything at or after it is normalized to the standard.
/// Text, runs, paragraph order and section count are preserved exactly.
pub fn fix(document: &Document) -> Result<Document, EngineError> {
    if document.paragraphs.is_empty() {
        return Err(EngineError::EmptyDocument);
    }

    let mut fixed = document.clone();
    let regions = regions::classify(&fixed.paragraphs);

    for section in &mut fixed.sections {
        section.left_margin = Length::mm(LEFT_MARGIN_MM);
        section.right_margin = Length::mm(RIGHT_MARGIN_MM);
        section.top_margin = Length::mm(TOP_MARGIN_MM);
        section.bottom_margin = Length::mm(BOTTOM_MARGIN_MM);
    }

    for paragraph in fixed.paragraphs.iter_mut().skip(regions.title_page_end) {
        for run in &mut paragraph.runs {
            run.font.name = Some(MAIN_FONT_NAME.to_string());
            run.font.size = Some(Length::pt(MAIN_FONT_SIZE_PT));
        }

        let is_header = paragraph.style.role.is_header();
        let is_list = paragraph.style.role.is_list();

        if is_header {
            for run in &mut paragraph.runs {
                run.font.bold = Some(true);
            }
            let text_lower = paragraph.text().trim().to_lowercase();
            paragraph.alignment = Some(if standard::contains_canonical_phrase(&text_lower) {
                Alignment::Center
            } else {
                Alignment::Left
            });
        } else {
            paragraph.alignment = Some(Alignment::Justify);
        }

        paragraph.format.line_spacing = Some(LineSpacing::Multiple(LINE_SPACING));
        paragraph.format.space_before = Some(Length::ZERO);
        paragraph.format.space_after = Some(Length::ZERO);

        if !is_header && !is_list {
            paragraph.format.first_line_indent = Some(Length::cm(FIRST_LINE_INDENT_CM));
            paragraph.format.left_indent = Some(Length::ZERO);
            paragraph.format.right_indent = Some(Length::ZERO);
        }
    }

    tracing::debug!(
        title_page_end = regions.title_page_end,
        paragraphs = fixed.paragraphs.len(),
        "canonicalization pass complete"
    );
    Ok(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Paragraph, Run, Section, StyleRole};
    use pretty_assertions::assert_eq;

    fn sample_document() -> Document {
        Document {
            sections: vec![Section::with_margins_mm(30.0, 10.0, 10.0, 30.0)],
            paragraphs: vec![
                Paragraph::with_role(StyleRole::Body, "Титульный лист"),
                Paragraph::with_role(StyleRole::Heading(1), "Введение"),
                Paragraph::with_role(StyleRole::Body, "Первый абзац."),
                Paragraph::with_role(StyleRole::Heading(2), "Глава 1. Обзор"),
                Paragraph::with_role(StyleRole::ListItem, "пункт списка"),
                Paragraph::with_role(StyleRole::Heading(1), "Заключение"),
            ],
        }
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert_eq!(fix(&Document::default()), Err(EngineError::EmptyDocument));
    }

    #[test]
    fn test_margins_set_unconditionally() {
        let fixed = fix(&sample_document()).unwrap();
        let section = fixed.sections[0];
        assert_eq!(section.left_margin.as_mm(), 25.0);
        assert_eq!(section.right_margin.as_mm(), 15.0);
        assert_eq!(section.top_margin.as_mm(), 20.0);
        assert_eq!(section.bottom_margin.as_mm(), 20.0);
    }

    #[test]
    fn test_title_page_left_untouched() {
        let mut document = sample_document();
        document.paragraphs[0].alignment = Some(Alignment::Right);
        document.paragraphs[0].runs[0].font.name = Some("Arial".to_string());

        let fixed = fix(&document).unwrap();
        assert_eq!(fixed.paragraphs[0], document.paragraphs[0]);
    }

    #[test]
    fn test_text_and_structure_preserved() {
        let document = sample_document();
        let fixed = fix(&document).unwrap();
        assert_eq!(fixed.paragraphs.len(), document.paragraphs.len());
        assert_eq!(fixed.sections.len(), document.sections.len());
        for (fixed_para, original) in fixed.paragraphs.iter().zip(&document.paragraphs) {
            assert_eq!(fixed_para.text(), original.text());
            assert_eq!(fixed_para.runs.len(), original.runs.len());
        }
    }

    #[test]
    fn test_canonical_header_centered_and_bold() {
        let fixed = fix(&sample_document()).unwrap();
        let header = &fixed.paragraphs[1];
        assert_eq!(header.alignment, Some(Alignment::Center));
        assert!(header.runs.iter().all(|run| run.font.bold == Some(true)));
    }

    #[test]
    fn test_other_header_left_aligned() {
        let fixed = fix(&sample_document()).unwrap();
        assert_eq!(fixed.paragraphs[3].alignment, Some(Alignment::Left));
    }

    #[test]
    fn test_body_justified_with_target_indents() {
        let fixed = fix(&sample_document()).unwrap();
        let body = &fixed.paragraphs[2];
        assert_eq!(body.alignment, Some(Alignment::Justify));
        assert_eq!(body.format.first_line_indent, Some(Length::cm(1.25)));
        assert_eq!(body.format.left_indent, Some(Length::ZERO));
        assert_eq!(body.format.right_indent, Some(Length::ZERO));
        assert_eq!(body.format.line_spacing, Some(LineSpacing::Multiple(1.5)));
        assert_eq!(body.format.space_before, Some(Length::ZERO));
        assert_eq!(body.format.space_after, Some(Length::ZERO));
    }

    #[test]
    fn test_list_items_keep_their_indents() {
        let mut document = sample_document();
        document.paragraphs[4].format.left_indent = Some(Length::cm(1.0));
        let fixed = fix(&document).unwrap();
        let item = &fixed.paragraphs[4];
        assert_eq!(item.format.left_indent, Some(Length::cm(1.0)));
        assert_eq!(item.format.first_line_indent, None);
        // But alignment and spacing are still normalized.
        assert_eq!(item.alignment, Some(Alignment::Justify));
        assert_eq!(item.format.space_after, Some(Length::ZERO));
    }

    #[test]
    fn test_runs_get_target_font() {
        let mut document = sample_document();
        document.paragraphs[2].runs.push(Run::new("второе предложение"));
        document.paragraphs[2].runs[0].font.name = Some("Calibri".to_string());

        let fixed = fix(&document).unwrap();
        for run in &fixed.paragraphs[2].runs {
            assert_eq!(run.font.name.as_deref(), Some("Times New Roman"));
            assert_eq!(run.font.size, Some(Length::pt(14.0)));
        }
    }

    #[test]
    fn test_fix_is_deterministic() {
        let document = sample_document();
        assert_eq!(fix(&document).unwrap(), fix(&document).unwrap());
    }
}
