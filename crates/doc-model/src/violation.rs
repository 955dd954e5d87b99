use serde::{Deserialize, Serialize};

/// Closed vocabulary of violation categories.
///
/// Categories before `ForbiddenAppendixLetter` describe formatting deviations
/// the fixer can repair; the appendix and missing-section categories are
/// structural and require human authorship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MarginDeviation,
    MissingRequiredSection,
    HeaderNotBold,
    HeaderAlignmentWrong,
    BodyAlignmentWrong,
    FontMismatch,
    FontSizeMismatch,
    LineSpacingWrong,
    ParagraphSpacingNonzero,
    FirstLineIndentWrong,
    SideIndentNonzero,
    ForbiddenAppendixLetter,
    InvalidAppendixPattern,
    AppendixOrderViolation,
    DuplicateAppendix,
    TooManyAppendices,
}

impl Category {
    /// Display label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::MarginDeviation => "Неправильные размеры полей",
            Category::MissingRequiredSection => "Отсутствуют обязательные разделы",
            Category::HeaderNotBold => "Заголовок должен быть жирным",
            Category::HeaderAlignmentWrong => "Неправильное выравнивание заголовка",
            Category::BodyAlignmentWrong => "Основной текст должен быть выровнен по ширине",
            Category::FontMismatch => "Неверный шрифт",
            Category::FontSizeMismatch => "Неверный размер шрифта",
            Category::LineSpacingWrong => "Неверный межстрочный интервал",
            Category::ParagraphSpacingNonzero => "Ненулевые интервалы между абзацами",
            Category::FirstLineIndentWrong => "Неверный отступ первой строки",
            Category::SideIndentNonzero => "Ненулевые отступы слева или справа",
            Category::ForbiddenAppendixLetter => "Запрещенная буква в приложении",
            Category::InvalidAppendixPattern => "Недопустимое обозначение приложения",
            Category::AppendixOrderViolation => "Нарушен порядок приложений",
            Category::DuplicateAppendix => "Обнаружены дублирующиеся приложения",
            Category::TooManyAppendices => "Слишком много приложений",
        }
    }

    /// Structural categories are not auto-fixable.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Category::MissingRequiredSection
                | Category::ForbiddenAppendixLetter
                | Category::InvalidAppendixPattern
                | Category::AppendixOrderViolation
                | Category::DuplicateAppendix
                | Category::TooManyAppendices
        )
    }
}

/// One deviation from the formatting standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub category: Category,
    pub detail: String,
}

impl Violation {
    pub fn new(category: Category, detail: impl Into<String>) -> Self {
        Violation {
            category,
            detail: detail.into(),
        }
    }
}

/// Validation result envelope for callers that persist or send it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
    pub checked_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::MarginDeviation).unwrap();
        assert_eq!(json, "\"margin-deviation\"");
        let json = serde_json::to_string(&Category::FirstLineIndentWrong).unwrap();
        assert_eq!(json, "\"first-line-indent-wrong\"");
    }

    #[test]
    fn test_structural_split() {
        assert!(Category::AppendixOrderViolation.is_structural());
        assert!(Category::MissingRequiredSection.is_structural());
        assert!(!Category::FontMismatch.is_structural());
        assert!(!Category::MarginDeviation.is_structural());
    }

    #[test]
    fn test_violation_round_trip() {
        let violation = Violation::new(Category::FontMismatch, "Arial");
        let json = serde_json::to_string(&violation).unwrap();
        let back: Violation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, violation);
    }
}
