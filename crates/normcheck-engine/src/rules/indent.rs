// First-line and side indent checks.
use crate::resolve;
use crate::standard::{FIRST_LINE_INDENT_CM, INDENT_TOLERANCE_CM};
use doc_model::{Length, Paragraph, ParagraphFormat};

/// First-line indent passes when no source sets it at all, or when any of
/// the sources (direct value, style value, raw twips attribute) is within
/// 0.1 cm of the target. Only explicit wrong values are flagged.
pub fn first_line_indent_ok(paragraph: &Paragraph) -> bool {
    let sources = resolve::candidates([
        paragraph.format.first_line_indent,
        paragraph.style.format.first_line_indent,
        paragraph.raw.first_line_twips.map(Length::from_twips),
    ]);

    if sources.is_empty() {
        return true;
    }
    sources
        .iter()
        .any(|length| (length.as_cm() - FIRST_LINE_INDENT_CM).abs() <= INDENT_TOLERANCE_CM)
}

/// Left indent in cm when it is set and deviates from zero beyond tolerance.
pub fn left_indent_violation_cm(format: &ParagraphFormat) -> Option<f64> {
    format
        .left_indent
        .map(|length| length.as_cm())
        .filter(|cm| cm.abs() > INDENT_TOLERANCE_CM)
}

/// Right indent in cm when it is set and deviates from zero beyond tolerance.
pub fn right_indent_violation_cm(format: &ParagraphFormat) -> Option<f64> {
    format
        .right_indent
        .map(|length| length.as_cm())
        .filter(|cm| cm.abs() > INDENT_TOLERANCE_CM)
}
