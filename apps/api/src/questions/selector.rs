//! Question selection: the pure filter over the question catalog.

use crate::catalog::{QuestionCategory, QuestionRecord};

/// Texts of every record matching `role` and `category`, in catalog order.
/// Role comparison is exact and case-sensitive; an unknown role simply
/// yields an empty list.
pub fn select_questions(
    role: &str,
    category: QuestionCategory,
    records: &[QuestionRecord],
) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.role_name == role && record.category == category)
        .map(|record| record.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question(role: &str, category: QuestionCategory, text: &str) -> QuestionRecord {
        QuestionRecord {
            role_name: role.to_string(),
            category,
            text: text.to_string(),
            stored_difficulty: "Medium".to_string(),
        }
    }

    fn make_bank() -> Vec<QuestionRecord> {
        vec![
            make_question("Software Engineer", QuestionCategory::Technical, "What is a closure?"),
            make_question("Data Scientist", QuestionCategory::Technical, "Explain overfitting."),
            make_question("Software Engineer", QuestionCategory::Behavioral, "Tell me about a failure."),
            make_question("Software Engineer", QuestionCategory::Technical, "Explain ownership in Rust."),
        ]
    }

    #[test]
    fn filters_by_role_and_category_preserving_order() {
        let bank = make_bank();
        let selected = select_questions("Software Engineer", QuestionCategory::Technical, &bank);
        assert_eq!(selected, vec!["What is a closure?", "Explain ownership in Rust."]);
    }

    #[test]
    fn role_comparison_is_case_sensitive() {
        let bank = make_bank();
        assert!(select_questions("software engineer", QuestionCategory::Technical, &bank).is_empty());
    }

    #[test]
    fn unknown_role_yields_empty_not_error() {
        let bank = make_bank();
        assert!(select_questions("Astronaut", QuestionCategory::Behavioral, &bank).is_empty());
    }

    #[test]
    fn category_without_questions_yields_empty() {
        let bank = make_bank();
        assert!(select_questions("Data Scientist", QuestionCategory::ScenarioBased, &bank).is_empty());
    }
}
