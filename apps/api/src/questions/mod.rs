// Interview question pipeline: catalog selection, tf-idf relevance
// ranking against the resume text, and keyword/length difficulty
// classification. Ranking is CPU-only; no model calls anywhere here.

pub mod difficulty;
pub mod handlers;
pub mod ranker;
pub mod selector;
