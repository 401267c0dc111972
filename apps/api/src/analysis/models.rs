//! Typed analysis result — the contract the model is prompted to produce.
//!
//! The completion is decoded into this schema-checked shape rather than passed
//! through as free-form JSON: a response missing a field or mistyping one is a
//! parse failure, never a partially-typed success.

use serde::{Deserialize, Serialize};

/// Importance of a missing skill, as judged by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// Severity of an ATS-compliance issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A skill the job description asks for that the résumé does not demonstrate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub importance: Importance,
    pub suggestion: String,
}

/// An issue that may cause an Applicant Tracking System to reject the résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsFlag {
    pub issue: String,
    pub severity: Severity,
    pub fix: String,
}

/// Full analysis of a résumé against a job description.
///
/// `match_score` is whatever integer the model returned — the 0–100 range is
/// requested by prompt but not enforced here, so an out-of-range score passes
/// through to the client unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub match_score: u32,
    pub match_score_reason: String,
    pub optimized_resume: String,
    pub key_changes: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
    pub ats_flags: Vec<AtsFlag>,
    pub cover_letter: String,
    pub top_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}
