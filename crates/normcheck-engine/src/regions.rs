//! Region classifier
//!
//! Partitions the paragraph sequence into title page, table of contents,
//! body, references and appendix zones. A pure function of the paragraphs:
//! the validator and the fixer each call it independently and must see the
//! same boundaries.

use crate::standard::{self, APPENDIX_KEYWORD, REFERENCES_HEADERS};
use doc_model::Paragraph;
use std::ops::Range;

/// Paragraph-index boundaries of the structural zones. All boundaries are
/// optional except `title_page_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    /// Index of the first canonical header; everything before it is the
    /// title page, exempt from all formatting rules.
    pub title_page_end: usize,
    /// The table-of-contents span, when a «Содержание» header exists.
    pub content_pages: Option<Range<usize>>,
    /// First header that opens the appendix section (not an individual
    /// «Приложение <letter>» label).
    pub appendix_start: Option<usize>,
    /// First header that opens the references section.
    pub references_start: Option<usize>,
}

impl RegionMap {
    pub fn in_content_pages(&self, idx: usize) -> bool {
        self.content_pages
            .as_ref()
            .map_or(false, |range| range.contains(&idx))
    }

    pub fn in_references(&self, idx: usize) -> bool {
        self.references_start.map_or(false, |start| idx >= start)
    }
}

/// A canonical header is styled as a heading/title/subtitle AND contains a
/// required or optional phrase. Plain substring matches in body text never
/// classify as headers.
fn canonical_header_text(paragraph: &Paragraph) -> Option<String> {
    if !paragraph.style.role.is_header() {
        return None;
    }
    let text = paragraph.text().trim().to_lowercase();
    standard::contains_canonical_phrase(&text).then_some(text)
}

pub fn classify(paragraphs: &[Paragraph]) -> RegionMap {
    let mut first_header = None;
    let mut content_start = None;
    let mut content_end = None;
    let mut in_content = false;
    let mut appendix_start = None;
    let mut references_start = None;

    for (idx, paragraph) in paragraphs.iter().enumerate() {
        let text = match canonical_header_text(paragraph) {
            Some(text) => text,
            None => continue,
        };

        if first_header.is_none() {
            first_header = Some(idx);
        }

        if text.contains("содержание") {
            if content_start.is_none() {
                content_start = Some(idx);
            }
            in_content = true;
        } else if in_content {
            if content_end.is_none() {
                content_end = Some(idx);
            }
            in_content = false;
        }

        // «Приложение <letter>» labels do not open the appendix section.
        if appendix_start.is_none()
            && text.contains(APPENDIX_KEYWORD)
            && !text.starts_with("приложение ")
        {
            appendix_start = Some(idx);
        }

        if references_start.is_none()
            && REFERENCES_HEADERS.iter().any(|phrase| text.contains(phrase))
        {
            references_start = Some(idx);
        }
    }

    let title_page_end = first_header.unwrap_or_else(|| paragraphs.len().min(5));
    let content_pages =
        content_start.map(|start| start..content_end.unwrap_or(paragraphs.len()));

    let map = RegionMap {
        title_page_end,
        content_pages,
        appendix_start,
        references_start,
    };
    tracing::debug!(?map, "classified document regions");
    map
}
