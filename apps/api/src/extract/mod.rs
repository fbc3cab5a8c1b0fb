//! Text extraction: turns an uploaded resume into plain text.
//!
//! Every upload is spooled to a `NamedTempFile` inside the configured upload
//! directory. The handle owns the file for the whole extraction, so it is
//! removed on every exit path, including a panic inside the PDF library.

use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::errors::AppError;

/// Raw upload as received from the multipart form.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

/// Plain text pulled out of an `UploadedDocument`. Never blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: String) -> Result<Self, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Extraction(
                "document contains no extractable text".to_string(),
            ));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Resolves the kind from the declared media type, falling back to the
    /// file extension when the browser sent nothing useful.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let declared = content_type
            .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

        if let Some(ct) = declared {
            return match ct.as_str() {
                "application/pdf" | "application/x-pdf" => Some(Self::Pdf),
                "text/plain" | "text/markdown" => Some(Self::PlainText),
                _ => None,
            };
        }

        let ext = Path::new(file_name?)
            .extension()
            .and_then(|e| e.to_str())?
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "md" => Some(Self::PlainText),
            _ => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::PlainText => ".txt",
        }
    }
}

/// Extracts plain text from an upload, spooling it through `upload_dir`.
pub async fn extract_text(
    doc: &UploadedDocument,
    upload_dir: &Path,
) -> Result<ExtractedText, AppError> {
    let kind = DocumentKind::detect(doc.content_type.as_deref(), doc.file_name.as_deref())
        .ok_or_else(|| {
            AppError::Extraction(format!(
                "unsupported document type: {}",
                doc.content_type.as_deref().unwrap_or("unknown")
            ))
        })?;

    let spooled = spool(&doc.bytes, upload_dir, kind)?;
    debug!("Spooled {} byte upload to {:?}", doc.bytes.len(), spooled.path());

    // The temp file moves into the blocking task and drops there, after the
    // read finishes or the task unwinds.
    let text = tokio::task::spawn_blocking(move || read_spooled(&spooled, kind))
        .await
        .map_err(|e| AppError::Extraction(format!("extraction task failed: {e}")))??;

    info!("Extracted {} chars from {:?} upload", text.len(), kind);
    ExtractedText::new(text)
}

fn spool(bytes: &[u8], upload_dir: &Path, kind: DocumentKind) -> Result<NamedTempFile, AppError> {
    let mut file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(kind.suffix())
        .tempfile_in(upload_dir)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot create upload file: {e}")))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot write upload file: {e}")))?;
    Ok(file)
}

fn read_spooled(file: &NamedTempFile, kind: DocumentKind) -> Result<String, AppError> {
    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text(file.path())
            .map_err(|e| AppError::Extraction(format!("PDF parse failed: {e}"))),
        DocumentKind::PlainText => {
            let raw = std::fs::read(file.path())
                .map_err(|e| AppError::Extraction(format!("cannot read upload: {e}")))?;
            String::from_utf8(raw)
                .map_err(|e| AppError::Extraction(format!("upload is not UTF-8 text: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(bytes: &'static [u8], content_type: Option<&str>, name: Option<&str>) -> UploadedDocument {
        UploadedDocument {
            bytes: Bytes::from_static(bytes),
            content_type: content_type.map(String::from),
            file_name: name.map(String::from),
        }
    }

    fn entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_detect_prefers_declared_type() {
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), Some("cv.txt")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect(Some("text/plain; charset=utf-8"), None),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), Some("CV.PDF")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(DocumentKind::detect(None, Some("resume.md")), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::detect(None, Some("resume.docx")), None);
        assert_eq!(DocumentKind::detect(None, None), None);
    }

    #[test]
    fn test_detect_rejects_unknown_declared_type() {
        assert_eq!(DocumentKind::detect(Some("image/png"), Some("cv.pdf")), None);
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(ExtractedText::new("  \n\t".to_string()).is_err());
        assert_eq!(ExtractedText::new("a".to_string()).unwrap().as_str(), "a");
    }

    #[tokio::test]
    async fn test_plain_text_extracted_and_temp_file_removed() {
        let dir = tempfile::tempdir().unwrap();
        let doc = upload(b"Jane Doe\nRust, SQL", Some("text/plain"), Some("cv.txt"));

        let text = extract_text(&doc, dir.path()).await.unwrap();

        assert_eq!(text.as_str(), "Jane Doe\nRust, SQL");
        assert_eq!(entries(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_corrupt_pdf_fails_and_temp_file_removed() {
        let dir = tempfile::tempdir().unwrap();
        let doc = upload(b"%PDF-1.4 this is not really a pdf", Some("application/pdf"), None);

        let err = extract_text(&doc, dir.path()).await.unwrap_err();

        assert!(matches!(err, AppError::Extraction(_)));
        assert_eq!(entries(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_empty_text_document_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let doc = upload(b"   \n", Some("text/plain"), None);

        assert!(matches!(
            extract_text(&doc, dir.path()).await,
            Err(AppError::Extraction(_))
        ));
        assert_eq!(entries(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_unsupported_type_never_touches_disk() {
        let dir = tempfile::tempdir().unwrap();
        let doc = upload(b"PK\x03\x04", Some("application/zip"), Some("cv.zip"));

        assert!(extract_text(&doc, dir.path()).await.is_err());
        assert_eq!(entries(dir.path()), 0);
    }
}
