//! Relevance ranking: orders candidate questions by textual similarity to
//! a reference document (the résumé).
//!
//! The reference and every candidate are vectorized together with TF-IDF
//! (stop-words removed, vocabulary capped at a fixed feature budget) and
//! candidates are scored by cosine similarity to the reference. The sort
//! is stable, so equal scores keep catalog order, and every degenerate
//! input degrades to the original order instead of failing.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use tracing::warn;

/// Vectorizer keeps this many terms, most frequent across all documents
/// first, alphabetical on ties.
const MAX_FEATURES: usize = 100;
const MIN_TOKEN_CHARS: usize = 2;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
        "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during",
        "each", "either", "else", "ever", "every", "few", "for", "from", "further", "had", "has",
        "have", "having", "he", "her", "here", "hers", "him", "his", "how", "if", "in", "into",
        "is", "it", "its", "itself", "just", "may", "me", "might", "more", "most", "must", "my",
        "neither", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
        "our", "ours", "out", "over", "own", "per", "same", "shall", "she", "should", "since",
        "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
        "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "upon",
        "us", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
        "whom", "whose", "why", "will", "with", "within", "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

/// Returns up to `top_n` candidates ordered by descending relevance to
/// `reference_text`. Always a sub-permutation of `candidates`; never fails.
///
/// Edge behavior:
/// - no candidates → empty
/// - empty reference → first `top_n` unchanged
/// - degenerate vectorization (no usable terms, or a reference that shares
///   no terms with the feature space) → first `top_n` unchanged, warned
pub fn rank_by_relevance(reference_text: &str, candidates: &[String], top_n: usize) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }
    if reference_text.trim().is_empty() {
        return candidates.iter().take(top_n).cloned().collect();
    }

    match cosine_rank(reference_text, candidates) {
        Some(order) => order
            .into_iter()
            .take(top_n)
            .map(|idx| candidates[idx].clone())
            .collect(),
        None => {
            warn!(
                candidates = candidates.len(),
                "ranking input vectorized to nothing; keeping catalog order"
            );
            candidates.iter().take(top_n).cloned().collect()
        }
    }
}

/// Candidate indices sorted by descending cosine similarity to the
/// reference, equal scores keeping input order. `None` when vectorization
/// degenerates.
fn cosine_rank(reference_text: &str, candidates: &[String]) -> Option<Vec<usize>> {
    let mut documents = Vec::with_capacity(candidates.len() + 1);
    documents.push(tokenize(reference_text));
    documents.extend(candidates.iter().map(|candidate| tokenize(candidate)));

    let features = select_features(&documents);
    if features.is_empty() {
        return None;
    }
    let index: HashMap<&str, usize> = features
        .iter()
        .enumerate()
        .map(|(i, term)| (term.as_str(), i))
        .collect();

    let idf = inverse_document_frequencies(&documents, &index, features.len());
    let vectors: Vec<Vec<f64>> = documents
        .iter()
        .map(|doc| tfidf_vector(doc, &index, &idf))
        .collect();

    let reference = &vectors[0];
    if reference.iter().all(|weight| *weight == 0.0) {
        return None;
    }

    let mut scored: Vec<(usize, f64)> = vectors[1..]
        .iter()
        .enumerate()
        .map(|(idx, vector)| (idx, cosine_similarity(reference, vector)))
        .collect();
    // sort_by is stable: ties stay in catalog order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    Some(scored.into_iter().map(|(idx, _)| idx).collect())
}

/// Lower-cased alphanumeric tokens of at least two characters, stop-words
/// removed.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// The feature vocabulary: terms ordered by total frequency across the
/// corpus (alphabetical on ties), truncated to the budget.
fn select_features(documents: &[Vec<String>]) -> Vec<String> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for doc in documents {
        for token in doc {
            *totals.entry(token.as_str()).or_insert(0) += 1;
        }
    }
    let mut terms: Vec<(&str, usize)> = totals.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(MAX_FEATURES);
    terms.into_iter().map(|(term, _)| term.to_string()).collect()
}

/// Smoothed IDF per feature: `ln((1 + n) / (1 + df)) + 1`.
fn inverse_document_frequencies(
    documents: &[Vec<String>],
    index: &HashMap<&str, usize>,
    feature_count: usize,
) -> Vec<f64> {
    let mut df = vec![0usize; feature_count];
    for doc in documents {
        let mut seen = HashSet::new();
        for token in doc {
            if let Some(&i) = index.get(token.as_str()) {
                if seen.insert(i) {
                    df[i] += 1;
                }
            }
        }
    }
    let n = documents.len() as f64;
    df.into_iter()
        .map(|d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
        .collect()
}

fn tfidf_vector(doc: &[String], index: &HashMap<&str, usize>, idf: &[f64]) -> Vec<f64> {
    let mut vector = vec![0.0; idf.len()];
    for token in doc {
        if let Some(&i) = index.get(token.as_str()) {
            vector[i] += 1.0;
        }
    }
    for (weight, idf) in vector.iter_mut().zip(idf) {
        *weight *= idf;
    }
    vector
}

fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
