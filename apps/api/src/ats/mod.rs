//! ATS scoring: compares a resume with a job description via the model.
//!
//! The model is asked for a JSON object; `BraceSpan` pulls it out of whatever
//! prose surrounds it. Every field is required. A response missing one, or
//! carrying an `atsScore` outside 0–100, is rejected rather than patched up.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::prompts::{build_ats_prompt, ATS_SYSTEM};
use crate::errors::AppError;
use crate::extract::ExtractedText;
use crate::llm_client::json::{parse_model_json, BraceSpan, JsonLocator};
use crate::llm_client::ModelClient;

pub const MAX_SCORE: u8 = 100;

/// Structured ATS verdict, serialized with the field names the client reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    #[serde(rename = "atsScore")]
    pub score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    #[serde(rename = "finalVerdict")]
    pub verdict: String,
}

/// Scores `resume` against `job_description` using the default `BraceSpan`
/// locator.
pub async fn score_resume(
    resume: &ExtractedText,
    job_description: &str,
    model: &dyn ModelClient,
) -> Result<ScoreResult, AppError> {
    let prompt = build_ats_prompt(resume.as_str(), job_description);
    let raw = model.generate(&prompt, ATS_SYSTEM).await?;
    parse_score(&raw, &BraceSpan)
}

/// Parses raw model output into a `ScoreResult` using `locator`.
pub fn parse_score<L>(raw: &str, locator: &L) -> Result<ScoreResult, AppError>
where
    L: JsonLocator + ?Sized,
{
    let result: ScoreResult = parse_model_json(raw, locator).map_err(|e| {
        debug!("Unusable ATS response: {raw}");
        AppError::ModelResponse(format!("ATS response: {e}"))
    })?;

    if result.score > MAX_SCORE {
        return Err(AppError::ModelResponse(format!(
            "atsScore {} is outside 0-{MAX_SCORE}",
            result.score
        )));
    }
    Ok(result)
}
