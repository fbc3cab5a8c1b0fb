// Interview question generation: resume text in, free-form question list out.
// All LLM calls go through llm_client, never straight to Gemini.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::extract::ExtractedText;
use crate::interview::prompts::{build_questions_prompt, QUESTIONS_SYSTEM};
use crate::llm_client::ModelClient;

/// Asks the model for interview questions and returns its text untouched.
pub async fn generate_questions(
    resume: &ExtractedText,
    model: &dyn ModelClient,
) -> Result<String, AppError> {
    let prompt = build_questions_prompt(resume.as_str());
    Ok(model.generate(&prompt, QUESTIONS_SYSTEM).await?)
}
