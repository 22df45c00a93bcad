use std::sync::Arc;

use crate::analysis::extractor::SkillExtractor;
use crate::catalog::cache::CatalogCache;
use crate::resume::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-through CSV snapshot cache; handlers take one snapshot per request.
    pub catalog: CatalogCache,
    /// Vocabulary scan plus the optionally injected part-of-speech tagger.
    pub extractor: Arc<SkillExtractor>,
    /// In-memory uploads; not persisted across restarts.
    pub resumes: ResumeStore,
}
