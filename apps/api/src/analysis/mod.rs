// Resume analysis: skill vocabulary, extraction, and role matching.
// Extraction combines a word-boundary vocabulary scan with an optional
// part-of-speech pass; matching compares extracted skills to role
// requirements with bidirectional substring containment.

pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod tagger;
pub mod vocabulary;
