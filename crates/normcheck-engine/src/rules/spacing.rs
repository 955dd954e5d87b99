// Line spacing and inter-paragraph spacing checks.
use crate::standard::{
    LINE_SPACING, LINE_SPACING_ABSOLUTE_TOLERANCE_PT, LINE_SPACING_TOLERANCE, MAIN_FONT_SIZE_PT,
};
use doc_model::{LineSpacing, ParagraphFormat};

/// Line spacing passes as a multiplier within 0.01 of the target, or as an
/// absolute exact/at-least height within 0.1 pt of size × multiplier.
/// An unset value fails: the spacing is required on checked paragraphs.
pub fn line_spacing_ok(format: &ParagraphFormat) -> bool {
    match format.line_spacing {
        None => false,
        Some(LineSpacing::Multiple(factor)) => (factor - LINE_SPACING).abs() < LINE_SPACING_TOLERANCE,
        Some(LineSpacing::Absolute { amount, .. }) => {
            let expected_pt = MAIN_FONT_SIZE_PT * LINE_SPACING;
            (amount.as_pt() - expected_pt).abs() < LINE_SPACING_ABSOLUTE_TOLERANCE_PT
        }
    }
}

/// Space before and after a paragraph must both be 0 pt; any positive value
/// fails, with no tolerance.
pub fn paragraph_spacing_ok(format: &ParagraphFormat) -> bool {
    let positive = |length: Option<doc_model::Length>| length.map_or(false, |l| l.as_pt() > 0.0);
    !positive(format.space_before) && !positive(format.space_after)
}

/// Current spacing values in points for violation details.
pub fn spacing_pt(format: &ParagraphFormat) -> (f64, f64) {
    (
        format.space_before.map_or(0.0, |l| l.as_pt()),
        format.space_after.map_or(0.0, |l| l.as_pt()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Length, SpacingRule};

    fn with_spacing(spacing: Option<LineSpacing>) -> ParagraphFormat {
        ParagraphFormat {
            line_spacing: spacing,
            ..ParagraphFormat::default()
        }
    }

    #[test]
    fn test_multiplier_within_tolerance() {
        assert!(line_spacing_ok(&with_spacing(Some(LineSpacing::Multiple(1.5)))));
        assert!(line_spacing_ok(&with_spacing(Some(LineSpacing::Multiple(1.505)))));
        assert!(!line_spacing_ok(&with_spacing(Some(LineSpacing::Multiple(1.0)))));
        assert!(!line_spacing_ok(&with_spacing(Some(LineSpacing::Multiple(2.0)))));
    }

    #[test]
    fn test_absolute_spacing_against_expected_points() {
        // 14 pt × 1.5 = 21 pt
        let exact = LineSpacing::Absolute {
            rule: SpacingRule::Exactly,
            amount: Length::pt(21.0),
        };
        assert!(line_spacing_ok(&with_spacing(Some(exact))));

        let at_least = LineSpacing::Absolute {
            rule: SpacingRule::AtLeast,
            amount: Length::pt(21.05),
        };
        assert!(line_spacing_ok(&with_spacing(Some(at_least))));

        let wrong = LineSpacing::Absolute {
            rule: SpacingRule::Exactly,
            amount: Length::pt(18.0),
        };
        assert!(!line_spacing_ok(&with_spacing(Some(wrong))));
    }

    #[test]
    fn test_unset_line_spacing_fails() {
        assert!(!line_spacing_ok(&with_spacing(None)));
    }

    #[test]
    fn test_paragraph_spacing_zero_or_unset_passes() {
        assert!(paragraph_spacing_ok(&ParagraphFormat::default()));
        let zeroed = ParagraphFormat {
            space_before: Some(Length::ZERO),
            space_after: Some(Length::ZERO),
            ..ParagraphFormat::default()
        };
        assert!(paragraph_spacing_ok(&zeroed));
    }

    #[test]
    fn test_positive_paragraph_spacing_fails() {
        let spaced = ParagraphFormat {
            space_after: Some(Length::pt(6.0)),
            ..ParagraphFormat::default()
        };
        assert!(!paragraph_spacing_ok(&spaced));
        assert_eq!(spacing_pt(&spaced), (0.0, 6.0));
    }
}
