//! Skill extraction from free résumé text.
//!
//! Two signals feed the result set:
//! 1. a case-insensitive, word-boundary-anchored scan for every vocabulary
//!    entry (the primary signal), and
//! 2. an optional part-of-speech pass that nominates noun-like tokens for
//!    exact vocabulary lookup (recall booster only).
//!
//! The second pass can never introduce a skill outside the vocabulary, and
//! extraction itself never fails: empty text yields an empty set.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use regex::RegexSet;
use tracing::debug;

use crate::analysis::tagger::PosTagger;
use crate::analysis::vocabulary::{title_case, SkillVocabulary};

/// Tokens shorter than this are never accepted from the tagger pass; the
/// boundary scan is the only way two-letter entries like `go` get in.
const MIN_TAGGED_TOKEN_CHARS: usize = 3;

pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
    patterns: RegexSet,
    tagger: Option<Arc<dyn PosTagger>>,
}

impl SkillExtractor {
    /// Compiles one word-boundary pattern per vocabulary entry. Pattern
    /// indices align with vocabulary entry indices.
    pub fn new(
        vocabulary: Arc<SkillVocabulary>,
        tagger: Option<Arc<dyn PosTagger>>,
    ) -> Result<Self> {
        let patterns = RegexSet::new(
            vocabulary
                .entries()
                .iter()
                .map(|entry| format!(r"(?i)\b{}\b", regex::escape(entry))),
        )
        .context("failed to compile skill vocabulary patterns")?;
        Ok(Self {
            vocabulary,
            patterns,
            tagger,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Extracts recognized skills from `text` as a sorted, deduplicated,
    /// title-cased list.
    ///
    /// Algorithm:
    /// 1. Empty or whitespace-only text short-circuits to an empty list.
    /// 2. Every vocabulary entry whose word-boundary pattern matches the
    ///    raw text contributes its title-cased form.
    /// 3. If a tagger is present, every noun-like token longer than two
    ///    characters whose lower-cased form equals a vocabulary entry
    ///    contributes that entry's title-cased form.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut found = BTreeSet::new();
        for idx in self.patterns.matches(text).iter() {
            found.insert(title_case(self.vocabulary.entry(idx)));
        }

        if let Some(tagger) = &self.tagger {
            for token in tagger.noun_like_tokens(text) {
                if token.chars().count() < MIN_TAGGED_TOKEN_CHARS {
                    continue;
                }
                let lower = token.to_lowercase();
                if self.vocabulary.contains(&lower) {
                    found.insert(title_case(&lower));
                }
            }
        }

        debug!(
            chars = text.chars().count(),
            skills = found.len(),
            "extracted skills"
        );
        found.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tagger::LexiconTagger;

    fn make_extractor(tagger: Option<Arc<dyn PosTagger>>) -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillVocabulary::builtin()), tagger)
            .expect("builtin vocabulary compiles")
    }

    /// Tagger stub that nominates a fixed token list regardless of input.
    struct FixedTagger(Vec<String>);

    impl PosTagger for FixedTagger {
        fn noun_like_tokens(&self, _text: &str) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn empty_text_yields_empty_set() {
        let extractor = make_extractor(None);
        assert!(extractor.extract_skills("").is_empty());
        assert!(extractor.extract_skills("   \n ").is_empty());
    }

    #[test]
    fn standalone_word_is_detected() {
        let extractor = make_extractor(None);
        let skills = extractor.extract_skills("Five years of Python experience.");
        assert_eq!(skills, vec!["Python"]);
    }

    #[test]
    fn embedded_substring_is_not_detected() {
        let extractor = make_extractor(None);
        let skills = extractor.extract_skills("Writes very Pythonic code.");
        assert!(
            !skills.contains(&"Python".to_string()),
            "word boundary must reject 'Pythonic', got {skills:?}"
        );
    }

    #[test]
    fn boundary_separates_java_from_javascript() {
        let extractor = make_extractor(None);
        let skills = extractor.extract_skills("Senior JavaScript developer");
        assert_eq!(skills, vec!["Javascript"]);
    }

    #[test]
    fn multi_word_entries_match_across_whitespace() {
        let extractor = make_extractor(None);
        let skills = extractor.extract_skills("Applied Machine Learning to churn models");
        assert!(skills.contains(&"Machine Learning".to_string()), "got {skills:?}");
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        let extractor = make_extractor(None);
        let skills = extractor.extract_skills("SQL and python and sql and Python");
        assert_eq!(skills, vec!["Python", "Sql"]);
    }

    #[test]
    fn output_is_subset_of_title_cased_vocabulary() {
        let extractor = make_extractor(Some(Arc::new(LexiconTagger)));
        let skills = extractor
            .extract_skills("Docker, Kubernetes, blockchain, underwater basket weaving, go");
        for skill in &skills {
            let canonical = skill.to_lowercase();
            assert!(
                extractor.vocabulary().contains(&canonical),
                "{skill} is not a vocabulary entry"
            );
        }
        assert!(skills.contains(&"Docker".to_string()));
        assert!(!skills.iter().any(|s| s.contains("blockchain")));
    }

    #[test]
    fn tagger_rescues_entries_the_boundary_scan_cannot_anchor() {
        // `c++` ends in a non-word character, so `\b` never closes the
        // scan pattern mid-sentence; the token path has no such problem.
        let text = "Expert in C++ development";
        let without = make_extractor(None).extract_skills(text);
        assert!(!without.contains(&"C++".to_string()), "got {without:?}");

        let with = make_extractor(Some(Arc::new(LexiconTagger))).extract_skills(text);
        assert!(with.contains(&"C++".to_string()), "got {with:?}");
    }

    #[test]
    fn tagger_tokens_below_three_chars_are_ignored() {
        let extractor = make_extractor(Some(Arc::new(FixedTagger(vec![
            "ai".to_string(),
            "go".to_string(),
        ]))));
        let skills = extractor.extract_skills("nothing recognizable here");
        assert!(skills.is_empty(), "short tokens must not enter via the tagger, got {skills:?}");
    }

    #[test]
    fn tagger_cannot_invent_skills_outside_the_vocabulary() {
        let extractor = make_extractor(Some(Arc::new(FixedTagger(vec![
            "warpdrive".to_string(),
            "python".to_string(),
        ]))));
        let skills = extractor.extract_skills("some text");
        assert_eq!(skills, vec!["Python"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let extractor = make_extractor(Some(Arc::new(LexiconTagger)));
        let text = "Python, Django, PostgreSQL, and teamwork under pressure";
        assert_eq!(extractor.extract_skills(text), extractor.extract_skills(text));
    }
}
