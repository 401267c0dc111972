// Resume analysis engine.
// Implements: PDF-to-text parsing, full resume-vs-JD analysis, section rewriting.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
