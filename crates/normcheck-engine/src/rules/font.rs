// Font family, size and boldness checks with run -> style fallback.
use crate::resolve;
use crate::standard::{FONT_SIZE_TOLERANCE_PT, MAIN_FONT_NAME, MAIN_FONT_SIZE_PT};
use doc_model::{Length, Paragraph, ParagraphStyle, Run};
use std::collections::BTreeSet;

/// Effective font family of a run: run override, else paragraph style.
/// Any Calibri variant ("Calibri", "Calibri Light") is normalized to the
/// literal family name for reporting.
pub fn effective_font_name(run: &Run, style: &ParagraphStyle) -> Option<String> {
    let name = resolve::first_some([run.font.name.clone(), style.font.name.clone()])?;
    if name.to_lowercase().contains("calibri") {
        return Some("Calibri".to_string());
    }
    Some(name)
}

/// Effective font size with the same run -> style fallback.
pub fn effective_font_size(run: &Run, style: &ParagraphStyle) -> Option<Length> {
    resolve::first_some([run.font.size, style.font.size])
}

/// Offending font families and sizes found in a paragraph's non-empty runs,
/// de-duplicated so one paragraph yields at most one violation per kind.
#[derive(Debug, Default)]
pub struct RunFindings {
    pub wrong_fonts: BTreeSet<String>,
    pub wrong_sizes: BTreeSet<String>,
}

pub fn check_runs(paragraph: &Paragraph) -> RunFindings {
    let mut findings = RunFindings::default();

    for run in &paragraph.runs {
        if run.text.trim().is_empty() {
            continue;
        }

        if let Some(name) = effective_font_name(run, &paragraph.style) {
            if name.to_lowercase() != MAIN_FONT_NAME.to_lowercase() {
                findings.wrong_fonts.insert(name);
            }
        }

        if let Some(size) = effective_font_size(run, &paragraph.style) {
            if (size.as_pt() - MAIN_FONT_SIZE_PT).abs() > FONT_SIZE_TOLERANCE_PT {
                findings.wrong_sizes.insert(format!("{:.1} pt", size.as_pt()));
            }
        }
    }

    findings
}

/// Boldness with style/run interplay: an explicit run-level `bold = false`
/// overrides a bold style; otherwise a bold style or any bold run counts.
pub fn is_bold(paragraph: &Paragraph) -> bool {
    let style_bold = paragraph.style.font.bold.unwrap_or(false);
    if style_bold
        && paragraph
            .runs
            .iter()
            .any(|run| run.font.bold == Some(false))
    {
        return false;
    }
    if style_bold {
        return true;
    }
    paragraph.runs.iter().any(|run| run.font.bold == Some(true))
}
