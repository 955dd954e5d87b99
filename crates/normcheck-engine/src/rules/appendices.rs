//! Appendix lettering scheme
//!
//! Valid appendix labels are «Приложение <letter>» with letters drawn
//! positionally from the standard alphabet minus the forbidden pair. The
//! scan stops at the first malformed label; later headings are treated as
//! being past the end of the appendix section.

use super::snippet;
use crate::regions::RegionMap;
use crate::standard::{
    APPENDIX_KEYWORD, APPENDIX_LABEL, APPENDIX_ORDER, FORBIDDEN_APPENDIX_LETTERS,
};
use doc_model::{Category, Paragraph, Violation};
use std::collections::BTreeSet;

/// (full heading text, letter identifier) of one valid appendix heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendixRecord {
    pub heading: String,
    pub letter: char,
}

fn uppercased(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

/// Single letter of a two-word appendix heading, if it has that shape.
fn label_letter(text: &str) -> Option<char> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != 2 {
        return None;
    }
    let mut chars = parts[1].chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(uppercased(letter)),
        _ => None,
    }
}

/// Structural scan over appendix headings: forbidden letters, label pattern
/// conformance with early stop, positional ordering and duplicates.
pub fn scan(paragraphs: &[Paragraph], regions: &RegionMap) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut records: Vec<AppendixRecord> = Vec::new();

    for (idx, paragraph) in paragraphs.iter().enumerate() {
        if idx < regions.title_page_end || regions.in_content_pages(idx) {
            continue;
        }

        let text = paragraph.text().trim().to_string();
        if text.is_empty() || !text.to_lowercase().starts_with(APPENDIX_KEYWORD) {
            continue;
        }

        // Forbidden letters are reported on their own and never reach the
        // ordering or duplicate checks.
        if let Some(letter) = label_letter(&text) {
            if FORBIDDEN_APPENDIX_LETTERS.contains(&letter) {
                violations.push(Violation::new(
                    Category::ForbiddenAppendixLetter,
                    format!(
                        "«{}»: буква «{}» не используется для обозначения приложений",
                        snippet(&text),
                        letter
                    ),
                ));
                continue;
            }
        }

        if APPENDIX_LABEL.is_match(&text) {
            let letter = uppercased(text.chars().last().unwrap_or(' '));
            records.push(AppendixRecord {
                heading: text,
                letter,
            });
        } else {
            violations.push(Violation::new(
                Category::InvalidAppendixPattern,
                format!(
                    "«{}»: ожидается формат «Приложение <буква>»",
                    snippet(&text)
                ),
            ));
            // End of the appendix section: do not classify further headings.
            break;
        }
    }

    violations.extend(check_order(&records));
    violations.extend(check_duplicates(&records));
    violations
}

/// The k-th valid appendix must carry the k-th letter of the sequence; the
/// first mismatch stops order-checking so later appendices are not
/// re-validated against shifted expectations.
fn check_order(records: &[AppendixRecord]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let Some(&expected) = APPENDIX_ORDER.get(position) else {
            violations.push(Violation::new(
                Category::TooManyAppendices,
                format!(
                    "«{}»: максимально допустимое — «Приложение {}»",
                    snippet(&record.heading),
                    APPENDIX_ORDER[APPENDIX_ORDER.len() - 1]
                ),
            ));
            break;
        };
        if record.letter != expected {
            violations.push(Violation::new(
                Category::AppendixOrderViolation,
                format!(
                    "«{}»: ожидалось «Приложение {}»",
                    snippet(&record.heading),
                    expected
                ),
            ));
            break;
        }
    }

    violations
}

/// Duplicates are collected independently of ordering and reported once.
fn check_duplicates(records: &[AppendixRecord]) -> Vec<Violation> {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for record in records {
        if !seen.insert(record.letter) {
            duplicates.insert(record.letter);
        }
    }

    if duplicates.is_empty() {
        return Vec::new();
    }
    let listed: Vec<String> = duplicates
        .iter()
        .map(|letter| format!("Приложение {}", letter))
        .collect();
    vec![Violation::new(
        Category::DuplicateAppendix,
        listed.join(", "),
    )]
}
