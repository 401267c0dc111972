//! Axum route handlers for the analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::models::AnalysisResult;
use crate::analysis::service::{analyze, rewrite_section};
use crate::errors::AppError;
use crate::extract::extract_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub text: String,
    pub pages: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteSectionRequest {
    #[serde(default)]
    pub section_text: String,
    #[serde(default)]
    pub job_description: String,
    pub section_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteSectionResponse {
    pub rewritten: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/parse-resume
///
/// Accepts a multipart upload with a `resume` PDF field and returns the
/// extracted plain text plus page count. The bytes live only for this request.
/// Non-PDF uploads are rejected before extraction is attempted.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }

        if field.content_type() != Some("application/pdf") {
            return Err(AppError::Validation(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let extracted = extract_resume(&bytes)?;
        return Ok(Json(ParseResumeResponse {
            text: extracted.text,
            pages: extracted.pages,
        }));
    }

    Err(AppError::Validation("No PDF file uploaded".to_string()))
}

/// POST /api/analyze
///
/// Full analysis pipeline: validate → prompt → model call → strict decode.
/// 400 on missing/empty input, 500 on model or parse failure.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = analyze(
        state.llm.as_ref(),
        &request.resume_text,
        &request.job_description,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/rewrite-section
///
/// Rewrites a single resume section against the JD. Returns trimmed text.
pub async fn handle_rewrite_section(
    State(state): State<AppState>,
    Json(request): Json<RewriteSectionRequest>,
) -> Result<Json<RewriteSectionResponse>, AppError> {
    let rewritten = rewrite_section(
        state.llm.as_ref(),
        &request.section_text,
        &request.job_description,
        request.section_type.as_deref(),
    )
    .await?;

    Ok(Json(RewriteSectionResponse { rewritten }))
}
