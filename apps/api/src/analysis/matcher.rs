//! Role matching: a résumé's extracted skills scored against a role's
//! required skills.
//!
//! Matching is deliberately loose: a required skill counts as covered when
//! it and any candidate skill contain each other as a substring, so `react`
//! is covered by `react native` and vice versa. The same rule admits a
//! known false-positive class (`go` inside `mongodb`); callers depend on
//! this behavior, so tighten it only with a migration plan.

use serde::Serialize;

use crate::analysis::vocabulary::title_case;

// ────────────────────────────────────────────────────────────────────────────
// Report type
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of scoring one résumé against one role.
///
/// `matched_skills` and `missing_skills` partition the normalized
/// requirement list; both are title-cased, deduplicated, and sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Percentage of required skills covered, in `[0, 100]`, rounded to
    /// two decimals.
    pub match_score: f64,
}

impl MatchReport {
    /// The zero-valued report. Returned for an empty requirement list and
    /// used by callers for an unknown role, which is a normal outcome
    /// rather than an error.
    pub fn zero() -> Self {
        Self {
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            match_score: 0.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores `candidate_skills` (typically extractor output) against
/// `required_skills` (typically a role record's requirement tokens).
///
/// Algorithm:
/// 1. Normalize requirements: split every element on commas, trim, and
///    lower-case; drop tokens that end up empty.
/// 2. A requirement is matched when any lower-cased candidate contains it
///    or is contained by it.
/// 3. Score is `100 × matched / required`, counted per requirement token
///    before display deduplication, rounded to two decimals.
pub fn match_role_skills(required_skills: &[String], candidate_skills: &[String]) -> MatchReport {
    let required: Vec<String> = required_skills
        .iter()
        .flat_map(|field| field.split(','))
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();
    if required.is_empty() {
        return MatchReport::zero();
    }

    let candidates: Vec<String> = candidate_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();

    let mut matched_count = 0usize;
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for requirement in &required {
        let covered = candidates.iter().any(|candidate| {
            candidate.contains(requirement.as_str()) || requirement.contains(candidate.as_str())
        });
        if covered {
            matched_count += 1;
            matched.push(title_case(requirement));
        } else {
            missing.push(title_case(requirement));
        }
    }

    let score = matched_count as f64 / required.len() as f64 * 100.0;
    matched.sort();
    matched.dedup();
    missing.sort();
    missing.dedup();

    MatchReport {
        matched_skills: matched,
        missing_skills: missing,
        match_score: (score * 100.0).round() / 100.0,
    }
}

/// Human-readable next step for a score, using the service's tier cuts:
/// below 50 is low, below 75 is moderate, the rest high.
pub fn build_recommendation(match_score: f64) -> String {
    if match_score < 50.0 {
        "Your resume has a low match score. Consider adding more relevant skills.".to_string()
    } else if match_score < 75.0 {
        "Your resume has a moderate match score. Adding a few more skills could improve it."
            .to_string()
    } else {
        "Your resume has a high match score! You're well-aligned with the role requirements."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_requirements_yield_zero_report() {
        let report = match_role_skills(&[], &skills(&["Python", "Sql"]));
        assert_eq!(report, MatchReport::zero());
    }

    #[test]
    fn matched_and_missing_partition_the_requirements() {
        let report = match_role_skills(
            &skills(&["Python", "SQL"]),
            &skills(&["python", "java"]),
        );
        assert_eq!(report.matched_skills, vec!["Python"]);
        assert_eq!(report.missing_skills, vec!["Sql"]);
        assert_eq!(report.match_score, 50.0);
    }

    #[test]
    fn comma_fields_are_split_and_trimmed() {
        let report = match_role_skills(
            &skills(&["python, django , sql"]),
            &skills(&["Python", "Django"]),
        );
        assert_eq!(report.matched_skills, vec!["Django", "Python"]);
        assert_eq!(report.missing_skills, vec!["Sql"]);
        assert_eq!(report.match_score, 66.67);
    }

    #[test]
    fn empty_tokens_are_dropped_not_matched() {
        let report = match_role_skills(&skills(&["python,,sql"]), &skills(&["Python"]));
        assert_eq!(report.match_score, 50.0, "the empty token must not count");
        assert_eq!(report.missing_skills, vec!["Sql"]);
    }

    #[test]
    fn containment_works_in_both_directions() {
        let narrow = match_role_skills(&skills(&["react"]), &skills(&["React Native"]));
        assert_eq!(narrow.match_score, 100.0, "requirement inside candidate");

        let wide = match_role_skills(&skills(&["React Native"]), &skills(&["react"]));
        assert_eq!(wide.match_score, 100.0, "candidate inside requirement");
    }

    #[test]
    fn known_false_positive_class_is_preserved() {
        // `go` occurs inside `mongodb`; loose containment counts it.
        let report = match_role_skills(&skills(&["Go"]), &skills(&["MongoDB"]));
        assert_eq!(report.matched_skills, vec!["Go"]);
        assert_eq!(report.match_score, 100.0);
    }

    #[test]
    fn duplicate_requirements_count_toward_score_once_each() {
        let report = match_role_skills(&skills(&["python, python"]), &skills(&["python"]));
        assert_eq!(report.match_score, 100.0);
        assert_eq!(report.matched_skills, vec!["Python"], "display list is deduplicated");
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        let report = match_role_skills(
            &skills(&["python, haskell, prolog"]),
            &skills(&["python"]),
        );
        assert_eq!(report.match_score, 33.33);
    }

    #[test]
    fn report_lists_are_sorted() {
        let report = match_role_skills(&skills(&["sql, python, java"]), &skills(&[]));
        assert_eq!(report.missing_skills, vec!["Java", "Python", "Sql"]);
    }

    #[test]
    fn matching_is_idempotent() {
        let required = skills(&["python, sql, docker"]);
        let candidates = skills(&["Python", "Docker"]);
        assert_eq!(
            match_role_skills(&required, &candidates),
            match_role_skills(&required, &candidates)
        );
    }

    #[test]
    fn recommendation_tiers_follow_score_cuts() {
        assert!(build_recommendation(20.0).contains("low match score"));
        assert!(build_recommendation(50.0).contains("moderate match score"));
        assert!(build_recommendation(74.99).contains("moderate match score"));
        assert!(build_recommendation(75.0).contains("high match score"));
    }
}
