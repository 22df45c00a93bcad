mod analysis;
mod catalog;
mod config;
mod errors;
mod extract;
mod questions;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extractor::SkillExtractor;
use crate::analysis::tagger::{LexiconTagger, PosTagger};
use crate::analysis::vocabulary::SkillVocabulary;
use crate::catalog::cache::CatalogCache;
use crate::config::{Config, TaggerConfig};
use crate::resume::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every key has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interprep API v{}", env!("CARGO_PKG_VERSION"));

    // Build the skill vocabulary (built-in list unless SKILLS_PATH overrides it)
    let vocabulary = match &config.skills_path {
        Some(path) => {
            let vocabulary = SkillVocabulary::from_path(path)?;
            info!(path = %path.display(), "loaded skill vocabulary override");
            vocabulary
        }
        None => SkillVocabulary::builtin(),
    };

    // Wire up the optional part-of-speech tagger
    let tagger: Option<Arc<dyn PosTagger>> = match config.tagger {
        TaggerConfig::Lexicon => Some(Arc::new(LexiconTagger)),
        TaggerConfig::Off => {
            info!("POS tagger disabled; extraction uses vocabulary scan only");
            None
        }
    };

    // Compile the extractor
    let extractor = Arc::new(SkillExtractor::new(Arc::new(vocabulary), tagger)?);
    info!(
        entries = extractor.vocabulary().len(),
        "skill extractor ready"
    );

    // Load the role and question catalogs (fail fast on first load)
    let catalog = CatalogCache::open(
        config.job_roles_path.clone(),
        config.questions_path.clone(),
    )?;

    // Build app state
    let state = AppState {
        catalog,
        extractor,
        resumes: ResumeStore::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
