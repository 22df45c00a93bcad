//! Axum route handlers for résumé upload, retrieval, and statistics.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::matcher::{build_recommendation, match_role_skills, MatchReport};
use crate::errors::AppError;
use crate::extract::{self, DocumentKind, ExtractError};
use crate::resume::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub resume_id: Uuid,
    pub filename: String,
    pub character_count: usize,
    pub word_count: usize,
    pub skill_count: usize,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub resume_id: Uuid,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub character_count: usize,
    pub word_count: usize,
    pub skills: Vec<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleMatchSummary {
    pub role: String,
    pub match_score: f64,
    pub matched_count: usize,
    pub missing_count: usize,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeStatsResponse {
    pub resume_id: Uuid,
    pub character_count: usize,
    pub word_count: usize,
    pub skill_count: usize,
    pub skills: Vec<String>,
    pub role_match: Option<RoleMatchSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Accepts a multipart upload (field `file`), extracts its text, scans it
/// for skills, and stores the record in memory. The response carries
/// everything a client needs to drive the analysis endpoints.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let mut upload: Option<(String, Option<String>, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Validation(format!("invalid multipart payload: {err}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::Validation(format!("failed to read uploaded file: {err}")))?;
        upload = Some((filename, content_type, data));
    }
    let (filename, content_type, data) = upload
        .ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    let kind = DocumentKind::detect(&filename, content_type.as_deref())?;
    let text = tokio::task::spawn_blocking(move || extract::extract_text(kind, &data))
        .await
        .map_err(|err| AppError::Internal(anyhow::anyhow!("extraction task failed: {err}")))??;
    if text.trim().is_empty() {
        return Err(ExtractError::Empty.into());
    }

    let skills = state.extractor.extract_skills(&text);
    let record = state
        .resumes
        .insert(ResumeRecord::new(filename, text, skills))
        .await;

    info!(
        resume_id = %record.id,
        filename = %record.filename,
        skills = record.skills.len(),
        "stored uploaded resume"
    );

    Ok(Json(ResumeUploadResponse {
        resume_id: record.id,
        filename: record.filename.clone(),
        character_count: record.character_count(),
        word_count: record.word_count(),
        skill_count: record.skills.len(),
        skills: record.skills.clone(),
    }))
}

/// GET /api/v1/resumes/:id
///
/// Returns the stored record including the full extracted text, so a
/// client can show what the parser actually saw.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let record = state
        .resumes
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("resume {id} not found")))?;

    Ok(Json(ResumeDetailResponse {
        resume_id: record.id,
        filename: record.filename.clone(),
        uploaded_at: record.uploaded_at,
        character_count: record.character_count(),
        word_count: record.word_count(),
        skills: record.skills.clone(),
        text: record.text.clone(),
    }))
}

/// GET /api/v1/resumes/:id/stats
///
/// Résumé-level counts, plus a role-match summary with a recommendation
/// tier when `?role=` is given. An unknown role produces the zero-score
/// summary rather than an error.
pub async fn handle_resume_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ResumeStatsResponse>, AppError> {
    let record = state
        .resumes
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("resume {id} not found")))?;

    let role_match = query.role.map(|role_name| {
        let catalog = state.catalog.snapshot();
        let report = catalog
            .find_role(&role_name)
            .map(|role| match_role_skills(&role.required_skills, &record.skills))
            .unwrap_or_else(MatchReport::zero);
        RoleMatchSummary {
            role: role_name,
            match_score: report.match_score,
            matched_count: report.matched_skills.len(),
            missing_count: report.missing_skills.len(),
            recommendation: build_recommendation(report.match_score),
        }
    });

    Ok(Json(ResumeStatsResponse {
        resume_id: record.id,
        character_count: record.character_count(),
        word_count: record.word_count(),
        skill_count: record.skills.len(),
        skills: record.skills.clone(),
        role_match,
    }))
}
