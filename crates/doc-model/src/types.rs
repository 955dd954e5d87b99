use crate::length::Length;
use serde::{Deserialize, Serialize};

/// Paragraph alignment, resolved or direct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Decode the raw low-level justification attribute value (`w:jc`).
    pub fn from_jc_val(val: &str) -> Option<Alignment> {
        match val {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            "both" => Some(Alignment::Justify),
            _ => None,
        }
    }

    pub fn label_ru(&self) -> &'static str {
        match self {
            Alignment::Left => "по левому краю",
            Alignment::Center => "по центру",
            Alignment::Right => "по правому краю",
            Alignment::Justify => "по ширине",
        }
    }
}

/// Style role of a paragraph as tagged by the document's style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleRole {
    Body,
    Heading(u8),
    Title,
    Subtitle,
    ListItem,
}

impl StyleRole {
    pub fn is_header(&self) -> bool {
        matches!(
            self,
            StyleRole::Heading(_) | StyleRole::Title | StyleRole::Subtitle
        )
    }

    pub fn is_list(&self) -> bool {
        matches!(self, StyleRole::ListItem)
    }
}

impl Default for StyleRole {
    fn default() -> Self {
        StyleRole::Body
    }
}

/// Direct character properties of a run, or the style-level fallbacks.
/// Absent fields defer to the next source in the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FontProps {
    pub name: Option<String>,
    pub size: Option<Length>,
    pub bold: Option<bool>,
}

/// Rule mode for absolute line spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpacingRule {
    Exactly,
    AtLeast,
}

/// Line spacing is either a multiplier of single spacing or an absolute
/// height under an exact/at-least rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineSpacing {
    Multiple(f64),
    Absolute { rule: SpacingRule, amount: Length },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParagraphFormat {
    pub line_spacing: Option<LineSpacing>,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    pub first_line_indent: Option<Length>,
    pub left_indent: Option<Length>,
    pub right_indent: Option<Length>,
}

/// Raw low-level paragraph attributes that survive in the markup when
/// neither the paragraph nor its style carries an explicit value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RawParagraphProps {
    /// Raw `w:jc` value, e.g. "both".
    pub justification: Option<String>,
    /// Raw `w:ind/@w:firstLine` value in twips.
    pub first_line_twips: Option<i64>,
}

/// The style a paragraph references, flattened to the fields the rules read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParagraphStyle {
    pub role: StyleRole,
    pub font: FontProps,
    pub alignment: Option<Alignment>,
    pub format: ParagraphFormat,
}

/// A contiguous span of text sharing one set of direct character properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub font: FontProps,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            font: FontProps::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub alignment: Option<Alignment>,
    pub format: ParagraphFormat,
    pub raw: RawParagraphProps,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// New paragraph with the given role and a single run.
    pub fn with_role(role: StyleRole, text: impl Into<String>) -> Self {
        Paragraph {
            style: ParagraphStyle {
                role,
                ..ParagraphStyle::default()
            },
            runs: vec![Run::new(text)],
            ..Paragraph::default()
        }
    }

    /// Full paragraph text in document order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Page-layout definition: the four margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Section {
    pub left_margin: Length,
    pub right_margin: Length,
    pub top_margin: Length,
    pub bottom_margin: Length,
}

impl Section {
    pub fn with_margins_mm(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Section {
            left_margin: Length::mm(left),
            right_margin: Length::mm(right),
            top_margin: Length::mm(top),
            bottom_margin: Length::mm(bottom),
        }
    }
}

/// A parsed document: ordered sections and ordered paragraphs spanning the
/// whole document, title page included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    pub sections: Vec<Section>,
    pub paragraphs: Vec<Paragraph>,
}
