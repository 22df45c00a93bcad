//! Heuristic difficulty labels for interview questions.
//!
//! The catalog's stored difficulty is not trusted; the label shown to a
//! candidate is recomputed from the question text alone, so hand-edited
//! catalogs stay consistent.

use std::fmt;

use serde::Serialize;

/// Keywords whose presence pulls a question toward Hard.
const HARD_KEYWORDS: &[&str] = &[
    "design",
    "architecture",
    "scalability",
    "distributed",
    "algorithm",
    "complexity",
    "optimization",
    "system design",
    "concurrency",
];

/// Keywords typical of explain/compare questions.
const MEDIUM_KEYWORDS: &[&str] = &[
    "explain",
    "difference",
    "how",
    "what",
    "describe",
    "implement",
];

/// Keywords typical of recall questions.
const EASY_KEYWORDS: &[&str] = &["define", "list", "name", "what is", "basic"];

const HARD_KEYWORD_FLOOR: usize = 2;
const HARD_WORD_COUNT: usize = 30;
const MEDIUM_WORD_COUNT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies one question. Total and deterministic.
///
/// Each keyword counts at most once, as a substring of the lower-cased
/// text. Decision order:
/// 1. two or more hard keywords, or more than 30 words → Hard
/// 2. more medium than easy keywords, or more than 15 words → Medium
/// 3. otherwise → Easy
pub fn classify_difficulty(question: &str) -> Difficulty {
    let lower = question.to_lowercase();
    let word_count = question.split_whitespace().count();

    let hard = presence_count(&lower, HARD_KEYWORDS);
    if hard >= HARD_KEYWORD_FLOOR || word_count > HARD_WORD_COUNT {
        return Difficulty::Hard;
    }

    let medium = presence_count(&lower, MEDIUM_KEYWORDS);
    let easy = presence_count(&lower, EASY_KEYWORDS);
    if medium > easy || word_count > MEDIUM_WORD_COUNT {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

fn presence_count(lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| lower.contains(*kw)).count()
}
