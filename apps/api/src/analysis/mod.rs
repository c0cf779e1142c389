// Résumé analysis: upload → text extraction → templated prompt → model feedback.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
