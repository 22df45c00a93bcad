//! Optional part-of-speech capability for the skill extractor.
//!
//! The extractor's primary signal is the vocabulary scan; a tagger only
//! widens recall by nominating noun-like tokens for vocabulary lookup.
//! Absence of a tagger is a valid configuration, so the capability is
//! injected as `Option<Arc<dyn PosTagger>>` rather than assumed.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Closed-class words that are never nouns: determiners, pronouns,
/// prepositions, conjunctions, auxiliaries, and a few high-frequency
/// adverbs. Open-class words outside this table are treated as noun
/// candidates.
static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Determiners & pronouns
        "a", "an", "the", "this", "that", "these", "those", "i", "me", "my", "mine", "we",
        "us", "our", "ours", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
        "it", "its", "they", "them", "their", "theirs", "who", "whom", "whose", "which", "what",
        "some", "any", "no", "every", "each", "either", "neither", "both", "all", "few", "many",
        "much", "more", "most", "other", "another", "such", "own", "same",
        // Prepositions & conjunctions
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
        "over", "under", "and", "but", "or", "nor", "so", "yet", "if", "then", "than", "because",
        "while", "although", "though", "since", "unless", "until", "as", "per",
        // Auxiliaries & modals
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
        "might", "must",
        // High-frequency adverbs
        "not", "very", "too", "also", "just", "only", "here", "there", "when", "where", "why",
        "how", "again", "further", "once", "now", "out",
    ]
    .into_iter()
    .collect()
});

/// Nominates tokens judged to be nouns or proper nouns, in document order.
pub trait PosTagger: Send + Sync {
    fn noun_like_tokens(&self, text: &str) -> Vec<String>;
}

/// Rule-based tagger: whitespace tokenization, punctuation trimmed off
/// token edges, closed-class function words rejected. Over-permissive on
/// purpose; nominations still have to pass exact vocabulary membership
/// in the extractor.
#[derive(Debug, Default)]
pub struct LexiconTagger;

impl PosTagger for LexiconTagger {
    fn noun_like_tokens(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(clean_token)
            .filter(|token| !token.is_empty())
            .filter(|token| !FUNCTION_WORDS.contains(token.to_lowercase().as_str()))
            .map(str::to_string)
            .collect()
    }
}

/// Trims punctuation from both ends of a raw token. `+` and `#` survive
/// so identifiers like `c++` and `c#` stay intact; interior punctuation
/// (`node.js`, `ci/cd`) is untouched.
fn clean_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#')))
}
