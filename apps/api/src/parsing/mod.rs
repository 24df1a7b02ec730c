// Document reading for uploaded résumés.
// Validation here is cheap and synchronous; the actual text extraction sits behind
// the TextExtractor trait so handlers can be tested without real PDFs.

pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

pub use pdf::PdfTextExtractor;

/// Magic bytes every PDF file starts with.
const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// A file received from a multipart upload, before any parsing.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Readable text and metadata pulled out of an upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub text: String,
    pub file_name: String,
    pub file_size: usize,
    /// `None` when the page tree could not be read even though text could.
    pub page_count: Option<i32>,
}

/// Pluggable document reader.
/// Default: PdfTextExtractor.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file: &UploadedFile) -> Result<ParsedDocument, AppError>;
}

/// Rejects anything that is not a non-empty PDF within `max_size` bytes.
pub fn ensure_pdf(file: &UploadedFile, max_size: usize) -> Result<(), AppError> {
    if file.bytes.is_empty() {
        return Err(AppError::Validation("No file uploaded".to_string()));
    }

    if file.bytes.len() > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File too large. Maximum size is {}",
            human_size(max_size)
        )));
    }

    let declared_pdf = file
        .content_type
        .as_deref()
        .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false)
        || file.file_name.to_ascii_lowercase().ends_with(".pdf");

    if !declared_pdf || !file.bytes.starts_with(PDF_SIGNATURE) {
        return Err(AppError::UnsupportedMedia(
            "Only PDF files are allowed".to_string(),
        ));
    }

    Ok(())
}

fn human_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}
