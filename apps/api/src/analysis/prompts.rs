// All LLM prompt constants for the analysis module.
// Templates are plain `{placeholder}` substitution — résumé and JD text are
// inserted verbatim; the only consumer of the prompt is the model itself.

/// Full-analysis prompt template.
/// Replace `{resume_text}` and `{job_description}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"You are an expert resume coach, ATS specialist, and career advisor.

Analyze the following resume against the job description and return a comprehensive JSON object.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Return ONLY a valid JSON object (no markdown, no extra text) with this exact structure:
{
  "matchScore": <integer 0-100>,
  "matchScoreReason": "<1-2 sentence explanation of the score>",
  "optimizedResume": "<full rewritten resume text, well-formatted with sections, optimized for this job>",
  "keyChanges": ["<change 1>", "<change 2>", ...],
  "skillGaps": [
    {
      "skill": "<skill name>",
      "importance": "<high|medium|low>",
      "suggestion": "<how to acquire or demonstrate this skill>"
    }
  ],
  "atsFlags": [
    {
      "issue": "<ATS issue description>",
      "severity": "<high|medium|low>",
      "fix": "<how to fix it>"
    }
  ],
  "coverLetter": "<a full tailored cover letter for this job, professional and personalized>",
  "topKeywords": ["<keyword1>", "<keyword2>", ...],
  "missingKeywords": ["<keyword1>", "<keyword2>", ...]
}"#;

/// Section-rewrite prompt template.
/// Replace `{section_type}`, `{job_description}`, and `{section_text}`.
/// The model is instructed to return only the rewritten text — no JSON.
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Rewrite the following resume {section_type} to better align with the job description.
Use strong action verbs, quantify achievements where possible, and incorporate relevant keywords naturally.

JOB DESCRIPTION:
{job_description}

ORIGINAL SECTION:
{section_text}

Return ONLY the rewritten section text, no explanations."#;
