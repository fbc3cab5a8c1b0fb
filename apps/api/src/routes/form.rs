//! Multipart form shared by both resume endpoints.

use axum::{
    extract::multipart::{Multipart, MultipartError, MultipartRejection},
    http::StatusCode,
};
use tracing::debug;

use crate::errors::AppError;
use crate::extract::UploadedDocument;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

#[derive(Debug, Default)]
pub struct ResumeForm {
    pub resume: Option<UploadedDocument>,
    pub job_description: Option<String>,
}

impl ResumeForm {
    /// Drains the multipart body. Unknown fields are read and discarded.
    /// A request that is not multipart at all is a client error like any
    /// other missing input.
    pub async fn from_request(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, AppError> {
        let mut multipart = multipart.map_err(|rejection| {
            form_error(
                rejection.status(),
                format!("Expected a multipart form: {}", rejection.body_text()),
            )
        })?;
        let mut form = ResumeForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, "Malformed multipart body"))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                RESUME_FIELD => {
                    let content_type = field.content_type().map(String::from);
                    let file_name = field.file_name().map(String::from);
                    let bytes = field.bytes().await.map_err(|e| {
                        multipart_error(e, &format!("Failed to read '{RESUME_FIELD}'"))
                    })?;
                    if !bytes.is_empty() {
                        form.resume = Some(UploadedDocument {
                            bytes,
                            content_type,
                            file_name,
                        });
                    }
                }
                JOB_DESCRIPTION_FIELD => {
                    let text = field.text().await.map_err(|e| {
                        multipart_error(e, &format!("Failed to read '{JOB_DESCRIPTION_FIELD}'"))
                    })?;
                    if !text.trim().is_empty() {
                        form.job_description = Some(text);
                    }
                }
                other => {
                    debug!("Ignoring unexpected form field '{other}'");
                    field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(e, &format!("Failed to read '{other}'")))?;
                }
            }
        }

        Ok(form)
    }

    pub fn require_resume(&mut self) -> Result<UploadedDocument, AppError> {
        self.resume
            .take()
            .ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))
    }

    pub fn require_job_description(&mut self) -> Result<String, AppError> {
        self.job_description
            .take()
            .ok_or_else(|| AppError::Validation("jobDescription cannot be empty".to_string()))
    }
}

fn multipart_error(e: MultipartError, context: &str) -> AppError {
    form_error(e.status(), format!("{context}: {}", e.body_text()))
}

/// Body-limit overruns keep their 413; every other form problem is a 400.
fn form_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::Validation(message)
    }
}
