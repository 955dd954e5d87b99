// Section margin validation against the fixed targets.
use crate::standard::{
    BOTTOM_MARGIN_MM, LEFT_MARGIN_MM, MARGIN_TOLERANCE_MM, RIGHT_MARGIN_MM, TOP_MARGIN_MM,
};
use doc_model::{Category, Section, Violation};

/// Each of the four margins must be within ±1 mm of its target, inclusive.
pub fn check_margins(section: &Section) -> Vec<Violation> {
    let checks = [
        ("Левое поле", section.left_margin, LEFT_MARGIN_MM),
        ("Правое поле", section.right_margin, RIGHT_MARGIN_MM),
        ("Верхнее поле", section.top_margin, TOP_MARGIN_MM),
        ("Нижнее поле", section.bottom_margin, BOTTOM_MARGIN_MM),
    ];

    let mut violations = Vec::new();
    for (name, actual, target) in checks {
        let actual_mm = actual.as_mm();
        let within =
            (target - MARGIN_TOLERANCE_MM..=target + MARGIN_TOLERANCE_MM).contains(&actual_mm);
        if !within {
            violations.push(Violation::new(
                Category::MarginDeviation,
                format!(
                    "{}: {:.1} мм (должно быть {:.0} мм)",
                    name, actual_mm, target
                ),
            ));
        }
    }
    violations
}
