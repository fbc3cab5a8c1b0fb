//! Axum route handlers for interview question generation.

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::interview::generate_questions;
use crate::routes::form::ResumeForm;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: String,
}

/// POST /api/upload
///
/// Multipart `resume` file in, `{ "questions": "..." }` out.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let mut form = ResumeForm::from_request(multipart).await?;
    let resume = form.require_resume()?;

    let text = extract_text(&resume, &state.config.upload_dir).await?;
    let questions = generate_questions(&text, state.model.as_ref()).await?;

    info!("Generated {} lines of interview questions", questions.lines().count());
    Ok(Json(QuestionsResponse { questions }))
}
