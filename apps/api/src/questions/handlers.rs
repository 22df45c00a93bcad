//! Axum route handlers for tailored question sets and CSV export.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::{QuestionCategory, QuestionRecord};
use crate::errors::AppError;
use crate::questions::difficulty::{classify_difficulty, Difficulty};
use crate::questions::ranker::rank_by_relevance;
use crate::questions::selector::select_questions;
use crate::state::AppState;

/// How many questions each category keeps when the client does not say.
const DEFAULT_TOP_N: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub role: String,
    pub category: Option<QuestionCategory>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub role: String,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankedQuestion {
    pub text: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub category: QuestionCategory,
    pub questions: Vec<RankedQuestion>,
}

#[derive(Debug, Serialize)]
pub struct QuestionSetResponse {
    pub resume_id: Uuid,
    pub role: String,
    pub top_n: usize,
    pub categories: Vec<CategoryQuestions>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes/:id/questions
///
/// Builds the interview set for `?role=`: per category, the role's catalog
/// questions ranked by relevance to the résumé text, each annotated with a
/// recomputed difficulty. `?category=` narrows to one category; `?top_n=`
/// resizes the cut (default 10).
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<QuestionSetResponse>, AppError> {
    let record = state
        .resumes
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("resume {id} not found")))?;
    let top_n = resolve_top_n(query.top_n)?;

    let catalog = state.catalog.snapshot();
    let categories: Vec<CategoryQuestions> = categories_for(query.category)
        .into_iter()
        .map(|category| CategoryQuestions {
            category,
            questions: build_category_questions(
                &record.text,
                &query.role,
                category,
                &catalog.questions,
                top_n,
            ),
        })
        .collect();

    info!(
        resume_id = %id,
        role = %query.role,
        questions = categories.iter().map(|c| c.questions.len()).sum::<usize>(),
        "generated question set"
    );

    Ok(Json(QuestionSetResponse {
        resume_id: id,
        role: query.role,
        top_n,
        categories,
    }))
}

/// GET /api/v1/resumes/:id/export
///
/// The same material as the questions endpoint, rendered as a CSV
/// attachment with a timestamped filename, so candidates can take their
/// preparation sheet offline.
pub async fn handle_export_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<(HeaderMap, String), AppError> {
    let record = state
        .resumes
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("resume {id} not found")))?;
    let top_n = resolve_top_n(query.top_n)?;

    let catalog = state.catalog.snapshot();
    let sections: Vec<CategoryQuestions> = QuestionCategory::ALL
        .into_iter()
        .map(|category| CategoryQuestions {
            category,
            questions: build_category_questions(
                &record.text,
                &query.role,
                category,
                &catalog.questions,
                top_n,
            ),
        })
        .collect();

    let body = render_export_csv(&query.role, &sections)?;
    let filename = export_filename(&query.role, Utc::now());

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|err| AppError::Internal(anyhow::anyhow!("invalid export filename: {err}")))?,
    );

    info!(resume_id = %id, role = %query.role, %filename, "exported question set");
    Ok((headers, body))
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly helpers
// ────────────────────────────────────────────────────────────────────────────

fn resolve_top_n(requested: Option<usize>) -> Result<usize, AppError> {
    match requested {
        None => Ok(DEFAULT_TOP_N),
        Some(0) => Err(AppError::Validation("top_n must be at least 1".to_string())),
        Some(n) => Ok(n),
    }
}

fn categories_for(filter: Option<QuestionCategory>) -> Vec<QuestionCategory> {
    match filter {
        Some(category) => vec![category],
        None => QuestionCategory::ALL.to_vec(),
    }
}

/// Select → rank → classify for one category.
fn build_category_questions(
    resume_text: &str,
    role: &str,
    category: QuestionCategory,
    records: &[QuestionRecord],
    top_n: usize,
) -> Vec<RankedQuestion> {
    let selected = select_questions(role, category, records);
    rank_by_relevance(resume_text, &selected, top_n)
        .into_iter()
        .map(|text| {
            let difficulty = classify_difficulty(&text);
            RankedQuestion { text, difficulty }
        })
        .collect()
}

fn render_export_csv(role: &str, sections: &[CategoryQuestions]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Category", "Question", "Difficulty", "Job Role"])?;
    for section in sections {
        for question in &section.questions {
            writer.write_record([
                section.category.label(),
                question.text.as_str(),
                question.difficulty.label(),
                role,
            ])?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush csv export: {err}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn export_filename(role: &str, timestamp: DateTime<Utc>) -> String {
    format!(
        "interview_questions_{}_{}.csv",
        sanitize_filename_component(role),
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Keeps the filename header-safe for any role string; everything outside
/// a conservative ASCII set becomes an underscore.
fn sanitize_filename_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
