pub mod length;
pub mod types;
pub mod violation;

pub use length::Length;
pub use types::{
    Alignment, Document, FontProps, LineSpacing, Paragraph, ParagraphFormat, ParagraphStyle,
    RawParagraphProps, Run, Section, SpacingRule, StyleRole,
};
pub use violation::{Category, CheckReport, Violation};
