//! Job-role and interview-question catalogs.
//!
//! Catalogs are CSV-backed read-only inputs: a roles file mapping each
//! role to its comma-separated required skills, and a questions file
//! holding the question bank per role and category. Loading filters
//! malformed rows; serving goes through a mtime-keyed snapshot cache.

pub mod cache;
pub mod handlers;
pub mod loader;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Question categories, matching the labels stored in the questions CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    #[serde(rename = "Scenario-based")]
    ScenarioBased,
}

impl QuestionCategory {
    /// All categories in presentation order.
    pub const ALL: [QuestionCategory; 3] = [
        QuestionCategory::Technical,
        QuestionCategory::Behavioral,
        QuestionCategory::ScenarioBased,
    ];

    /// Parses the exact stored label; anything else is an unknown category.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Technical" => Some(Self::Technical),
            "Behavioral" => Some(Self::Behavioral),
            "Scenario-based" => Some(Self::ScenarioBased),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Behavioral => "Behavioral",
            Self::ScenarioBased => "Scenario-based",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One role and its requirement tokens, split from the CSV field in
/// catalog order and kept as authored (matching normalizes later).
#[derive(Debug, Clone, Serialize)]
pub struct JobRoleRecord {
    pub role_name: String,
    pub required_skills: Vec<String>,
}

/// One catalog question. `stored_difficulty` is what the CSV claims;
/// the pipeline recomputes displayed difficulty from the text instead of
/// trusting it.
#[derive(Debug, Clone)]
pub struct QuestionRecord {
    pub role_name: String,
    pub category: QuestionCategory,
    pub text: String,
    pub stored_difficulty: String,
}

/// Immutable snapshot of both catalogs.
#[derive(Debug, Default)]
pub struct Catalog {
    pub roles: Vec<JobRoleRecord>,
    pub questions: Vec<QuestionRecord>,
}

impl Catalog {
    /// Exact, case-sensitive role lookup. A miss is a normal outcome.
    pub fn find_role(&self, role_name: &str) -> Option<&JobRoleRecord> {
        self.roles.iter().find(|role| role.role_name == role_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for category in QuestionCategory::ALL {
            assert_eq!(QuestionCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn category_parse_is_exact() {
        assert_eq!(QuestionCategory::from_label("technical"), None);
        assert_eq!(QuestionCategory::from_label("Scenario-Based"), None);
        assert_eq!(QuestionCategory::from_label(""), None);
    }

    #[test]
    fn role_lookup_is_case_sensitive() {
        let catalog = Catalog {
            roles: vec![JobRoleRecord {
                role_name: "Software Engineer".to_string(),
                required_skills: vec!["python".to_string()],
            }],
            questions: Vec::new(),
        };
        assert!(catalog.find_role("Software Engineer").is_some());
        assert!(catalog.find_role("software engineer").is_none());
    }
}
