//! The fixed formatting standard
//!
//! Targets and tolerances are build-time constants: the rule set is not
//! configurable at runtime.

use lazy_static::lazy_static;
use regex::Regex;

pub const MAIN_FONT_NAME: &str = "Times New Roman";
pub const MAIN_FONT_SIZE_PT: f64 = 14.0;
pub const LINE_SPACING: f64 = 1.5;
pub const FIRST_LINE_INDENT_CM: f64 = 1.25;

pub const LEFT_MARGIN_MM: f64 = 25.0;
pub const RIGHT_MARGIN_MM: f64 = 15.0;
pub const TOP_MARGIN_MM: f64 = 20.0;
pub const BOTTOM_MARGIN_MM: f64 = 20.0;

pub const MARGIN_TOLERANCE_MM: f64 = 1.0;
pub const FONT_SIZE_TOLERANCE_PT: f64 = 0.1;
pub const LINE_SPACING_TOLERANCE: f64 = 0.01;
pub const LINE_SPACING_ABSOLUTE_TOLERANCE_PT: f64 = 0.1;
pub const INDENT_TOLERANCE_CM: f64 = 0.1;

/// Section header phrases every document must contain.
pub const REQUIRED_HEADERS: &[&str] = &[
    "введение",
    "список источников литературы",
    "заключение",
];

/// Section header phrases a document may contain.
pub const OPTIONAL_HEADERS: &[&str] = &["содержание", "приложение"];

/// Phrases that open the references section.
pub const REFERENCES_HEADERS: &[&str] = &[
    "список источников литературы",
    "список использованных источников",
];

pub const APPENDIX_KEYWORD: &str = "приложение";

/// Letters that must not designate an appendix.
pub const FORBIDDEN_APPENDIX_LETTERS: &[char] = &['Ё', 'И'];

/// Positional letter sequence valid appendices must follow: the standard
/// alphabet minus the forbidden letters.
pub const APPENDIX_ORDER: &[char] = &[
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'З', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С', 'Т',
    'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

lazy_static! {
    /// Exact form of a single-appendix label: «Приложение <letter>».
    /// `Ё` is outside the а-я range, so a label carrying it never matches.
    pub static ref APPENDIX_LABEL: Regex = Regex::new(r"(?i)^приложение [а-я]$").unwrap();
}

/// True when a lowercased header text contains any required or optional
/// phrase.
pub fn contains_canonical_phrase(text_lower: &str) -> bool {
    REQUIRED_HEADERS
        .iter()
        .chain(OPTIONAL_HEADERS)
        .any(|phrase| text_lower.contains(phrase))
}
