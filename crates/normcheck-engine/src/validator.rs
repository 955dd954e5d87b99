//! Validation pass
//!
//! Read-only orchestration of the region classifier and both rule sets.
//! Produces the full ordered violation list; grouping and truncation are
//! presentation concerns handled by the report module.

use crate::error::EngineError;
use crate::regions::{self, RegionMap};
use crate::rules::{self, snippet};
use crate::standard::{
    self, APPENDIX_KEYWORD, APPENDIX_LABEL, FIRST_LINE_INDENT_CM, LINE_SPACING, MAIN_FONT_NAME,
    MAIN_FONT_SIZE_PT,
};
use doc_model::{Alignment, Category, Document, Paragraph, Violation};

/// Validate a document against the formatting standard.
///
/// Never mutates the document. A document with zero paragraphs is a
/// processing failure, not an empty violation list.
pub fn validate(document: &Document) -> Result<Vec<Violation>, EngineError> {
    if document.paragraphs.is_empty() {
        return Err(EngineError::EmptyDocument);
    }

    let mut violations = Vec::new();

    for section in &document.sections {
        violations.extend(rules::margins::check_margins(section));
    }

    let regions = regions::classify(&document.paragraphs);

    let missing =
        rules::sections::missing_required_sections(&document.paragraphs, regions.title_page_end);
    if !missing.is_empty() {
        let listed: Vec<String> = missing
            .iter()
            .map(|phrase| rules::sections::display_name(phrase))
            .collect();
        violations.push(Violation::new(
            Category::MissingRequiredSection,
            listed.join(", "),
        ));
    }

    check_paragraphs(document, &regions, &mut violations);
    violations.extend(rules::appendices::scan(&document.paragraphs, &regions));

    tracing::debug!(
        paragraphs = document.paragraphs.len(),
        violations = violations.len(),
        "validation pass complete"
    );
    Ok(violations)
}

/// Per-paragraph formatting pass from the end of the title page, skipping
/// the table-of-contents span.
fn check_paragraphs(document: &Document, regions: &RegionMap, violations: &mut Vec<Violation>) {
    for (idx, paragraph) in document.paragraphs.iter().enumerate() {
        if idx < regions.title_page_end || regions.in_content_pages(idx) {
            continue;
        }

        let raw_text = paragraph.text();
        let text = raw_text.trim();
        if paragraph.runs.is_empty() || text.is_empty() || raw_text.starts_with('\u{000C}') {
            continue;
        }

        let text_lower = text.to_lowercase();
        if text_lower.starts_with(APPENDIX_KEYWORD) {
            if APPENDIX_LABEL.is_match(text) {
                // Valid labels belong to the structural scan.
                continue;
            }
            // Malformed label: the appendix section has effectively ended,
            // mirroring the structural scan's early stop.
            break;
        }

        if paragraph.style.role.is_header() {
            check_header(paragraph, text, &text_lower, violations);
        } else {
            check_body(paragraph, idx, text, regions, violations);
        }
    }
}

fn check_paragraph_spacing(paragraph: &Paragraph, text: &str, violations: &mut Vec<Violation>) {
    if !rules::spacing::paragraph_spacing_ok(&paragraph.format) {
        let (before, after) = rules::spacing::spacing_pt(&paragraph.format);
        violations.push(Violation::new(
            Category::ParagraphSpacingNonzero,
            format!(
                "«{}»: перед {:.1} pt, после {:.1} pt (должно быть 0 pt)",
                snippet(text),
                before,
                after
            ),
        ));
    }
}

fn check_run_fonts(paragraph: &Paragraph, text: &str, violations: &mut Vec<Violation>) {
    let findings = rules::font::check_runs(paragraph);
    if !findings.wrong_fonts.is_empty() {
        let fonts: Vec<String> = findings.wrong_fonts.into_iter().collect();
        violations.push(Violation::new(
            Category::FontMismatch,
            format!(
                "«{}»: обнаружены шрифты {} (должен быть {})",
                snippet(text),
                fonts.join(", "),
                MAIN_FONT_NAME
            ),
        ));
    }
    if !findings.wrong_sizes.is_empty() {
        let sizes: Vec<String> = findings.wrong_sizes.into_iter().collect();
        violations.push(Violation::new(
            Category::FontSizeMismatch,
            format!(
                "«{}»: обнаружены размеры {} (должно быть {:.0} pt)",
                snippet(text),
                sizes.join(", "),
                MAIN_FONT_SIZE_PT
            ),
        ));
    }
}

/// Required and optional canonical headers are centered; every other header
/// is left-aligned and additionally subject to the first-line-indent rule.
fn check_header(
    paragraph: &Paragraph,
    text: &str,
    text_lower: &str,
    violations: &mut Vec<Violation>,
) {
    check_paragraph_spacing(paragraph, text, violations);

    let canonical = standard::contains_canonical_phrase(text_lower);
    let required_alignment = if canonical {
        Alignment::Center
    } else {
        Alignment::Left
    };
    let alignment = rules::alignment::effective_alignment(paragraph);
    if alignment != required_alignment {
        violations.push(Violation::new(
            Category::HeaderAlignmentWrong,
            format!(
                "«{}»: требуется выравнивание {}, сейчас {}",
                snippet(text),
                required_alignment.label_ru(),
                alignment.label_ru()
            ),
        ));
    }

    if !rules::font::is_bold(paragraph) {
        violations.push(Violation::new(
            Category::HeaderNotBold,
            format!("Заголовок: «{}»", snippet(text)),
        ));
    }

    check_run_fonts(paragraph, text, violations);

    if !canonical && !rules::indent::first_line_indent_ok(paragraph) {
        violations.push(Violation::new(
            Category::FirstLineIndentWrong,
            format!(
                "«{}»: отступ первой строки должен быть {} см",
                snippet(text),
                FIRST_LINE_INDENT_CM
            ),
        ));
    }
}

/// Body text is justified; outside lists and the references span it also
/// carries the indent and line-spacing requirements.
fn check_body(
    paragraph: &Paragraph,
    idx: usize,
    text: &str,
    regions: &RegionMap,
    violations: &mut Vec<Violation>,
) {
    check_paragraph_spacing(paragraph, text, violations);

    let alignment = rules::alignment::effective_alignment(paragraph);
    if alignment != Alignment::Justify {
        violations.push(Violation::new(
            Category::BodyAlignmentWrong,
            format!(
                "«{}»: сейчас {}, требуется по ширине",
                snippet(text),
                alignment.label_ru()
            ),
        ));
    }

    check_run_fonts(paragraph, text, violations);

    if !paragraph.style.role.is_list() && !regions.in_references(idx) {
        if !rules::indent::first_line_indent_ok(paragraph) {
            violations.push(Violation::new(
                Category::FirstLineIndentWrong,
                format!(
                    "«{}»: отступ первой строки должен быть {} см",
                    snippet(text),
                    FIRST_LINE_INDENT_CM
                ),
            ));
        }
        if let Some(cm) = rules::indent::left_indent_violation_cm(&paragraph.format) {
            violations.push(Violation::new(
                Category::SideIndentNonzero,
                format!(
                    "«{}»: отступ слева {:.1} см (должно быть 0 см)",
                    snippet(text),
                    cm
                ),
            ));
        }
        if let Some(cm) = rules::indent::right_indent_violation_cm(&paragraph.format) {
            violations.push(Violation::new(
                Category::SideIndentNonzero,
                format!(
                    "«{}»: отступ справа {:.1} см (должно быть 0 см)",
                    snippet(text),
                    cm
                ),
            ));
        }
        if !rules::spacing::line_spacing_ok(&paragraph.format) {
            violations.push(Violation::new(
                Category::LineSpacingWrong,
                format!(
                    "«{}»: межстрочный интервал должен быть {}",
                    snippet(text),
                    LINE_SPACING
                ),
            ));
        }
    }
}
