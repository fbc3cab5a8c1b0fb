//! Axum route handlers for ATS scoring.

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    Json,
};
use tracing::info;

use crate::ats::{score_resume, ScoreResult};
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::routes::form::ResumeForm;
use crate::state::AppState;

/// POST /api/ats-analyze
///
/// Multipart `resume` file plus `jobDescription` text in, `ScoreResult` out.
/// Both inputs are checked before any extraction or model call.
pub async fn handle_ats_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScoreResult>, AppError> {
    let mut form = ResumeForm::from_request(multipart).await?;
    let resume = form.require_resume()?;
    let job_description = form.require_job_description()?;

    let text = extract_text(&resume, &state.config.upload_dir).await?;
    let result = score_resume(&text, &job_description, state.model.as_ref()).await?;

    info!(
        "ATS score {}: {} matched, {} missing",
        result.score,
        result.matched_skills.len(),
        result.missing_skills.len()
    );
    Ok(Json(result))
}
