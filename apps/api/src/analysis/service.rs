//! Analysis orchestration: validate inputs → build prompt → call the model →
//! decode the completion. Two operations, both request-scoped; nothing is
//! cached or deduplicated across calls.

use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::{ANALYZE_PROMPT_TEMPLATE, REWRITE_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, CompletionBackend};

/// Full resume-vs-JD analysis.
///
/// Validates both inputs are non-empty before any model call, then returns the
/// strictly-decoded nine-field result or a classified error.
pub async fn analyze(
    llm: &dyn CompletionBackend,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisResult, AppError> {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeText and jobDescription are required".to_string(),
        ));
    }

    let prompt = ANALYZE_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description);

    let raw = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;

    parse_analysis(&raw)
}

/// Rewrites one resume section against the job description.
/// The completion is returned as trimmed text — no JSON decoding.
pub async fn rewrite_section(
    llm: &dyn CompletionBackend,
    section_text: &str,
    job_description: &str,
    section_type: Option<&str>,
) -> Result<String, AppError> {
    if section_text.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "sectionText and jobDescription are required".to_string(),
        ));
    }

    let prompt = REWRITE_PROMPT_TEMPLATE
        .replace("{section_type}", section_type.unwrap_or("section"))
        .replace("{job_description}", job_description)
        .replace("{section_text}", section_text);

    let rewritten = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;

    Ok(rewritten.trim().to_string())
}

/// Decodes a raw completion into an [`AnalysisResult`]: strip markdown fences,
/// trim, parse. No repair and no corrective re-prompt — a completion that is
/// not the exact schema fails here.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AppError> {
    let cleaned = strip_json_fences(raw);
    serde_json::from_str(cleaned).map_err(|e| AppError::Parse(e.to_string()))
}
