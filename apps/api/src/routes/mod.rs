pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::catalog::handlers as catalog_handlers;
use crate::questions::handlers as question_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

/// Uploads above this size are rejected before the multipart body is read.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/roles", get(catalog_handlers::handle_list_roles))
        // Analysis API
        .route(
            "/api/v1/skills/extract",
            post(analysis_handlers::handle_extract_skills),
        )
        // Resume API
        .route("/api/v1/resumes", post(resume_handlers::handle_upload_resume))
        .route("/api/v1/resumes/:id", get(resume_handlers::handle_get_resume))
        .route(
            "/api/v1/resumes/:id/match",
            get(analysis_handlers::handle_match_role),
        )
        .route(
            "/api/v1/resumes/:id/stats",
            get(resume_handlers::handle_resume_stats),
        )
        // Question API
        .route(
            "/api/v1/resumes/:id/questions",
            get(question_handlers::handle_generate_questions),
        )
        .route(
            "/api/v1/resumes/:id/export",
            get(question_handlers::handle_export_questions),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
