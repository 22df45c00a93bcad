//! Axum route handlers for skill extraction and role matching.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::matcher::{match_role_skills, MatchReport};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skill_count: usize,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct MatchRoleResponse {
    pub resume_id: Uuid,
    pub role: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/extract
///
/// Runs the skill scan over raw text without storing anything. Useful for
/// previewing extraction when the client already has the text in hand.
/// Empty text is a valid input and yields an empty list.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    let skills = state.extractor.extract_skills(&request.text);
    Ok(Json(ExtractSkillsResponse {
        skill_count: skills.len(),
        skills,
    }))
}

/// GET /api/v1/resumes/:id/match
///
/// Scores the stored résumé's skills against `?role=`. A role missing
/// from the catalog is a normal outcome and returns the zero report, so
/// clients can render "no requirements known" without special-casing.
pub async fn handle_match_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchRoleResponse>, AppError> {
    let record = state
        .resumes
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("resume {id} not found")))?;

    let catalog = state.catalog.snapshot();
    let report = catalog
        .find_role(&query.role)
        .map(|role| match_role_skills(&role.required_skills, &record.skills))
        .unwrap_or_else(MatchReport::zero);

    info!(
        resume_id = %id,
        role = %query.role,
        score = report.match_score,
        "matched resume against role"
    );

    Ok(Json(MatchRoleResponse {
        resume_id: id,
        role: query.role,
        matched_skills: report.matched_skills,
        missing_skills: report.missing_skills,
        match_score: report.match_score,
    }))
}
