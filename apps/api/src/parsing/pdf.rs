use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::parsing::{ParsedDocument, TextExtractor, UploadedFile};

/// Reads the text layer with `pdf-extract` and the page count with `lopdf`.
/// Both are synchronous and CPU-bound, so the work runs on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, file: &UploadedFile) -> Result<ParsedDocument, AppError> {
        let bytes = file.bytes.clone();

        // pdf-extract panics on some malformed inputs; a panic surfaces as a JoinError.
        let (text, page_count) = tokio::task::spawn_blocking(move || {
            let text = pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| AppError::DocumentParse(e.to_string()))?;
            Ok::<_, AppError>((text, count_pages(&bytes)))
        })
        .await
        .map_err(|e| AppError::DocumentParse(format!("PDF reader aborted: {e}")))??;

        debug!(
            file_name = %file.file_name,
            chars = text.len(),
            pages = ?page_count,
            "Extracted PDF text"
        );

        Ok(ParsedDocument {
            text,
            file_name: file.file_name.clone(),
            file_size: file.bytes.len(),
            page_count,
        })
    }
}

fn count_pages(bytes: &[u8]) -> Option<i32> {
    match lopdf::Document::load_mem(bytes) {
        Ok(doc) => i32::try_from(doc.get_pages().len()).ok(),
        Err(e) => {
            warn!("Could not read PDF page tree: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_garbage_is_a_parse_error() {
        let file = UploadedFile {
            file_name: "broken.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            bytes: Bytes::from_static(b"%PDF-1.4\nthis is not really a pdf"),
        };
        let result = PdfTextExtractor.extract(&file).await;
        assert!(matches!(result, Err(AppError::DocumentParse(_))));
    }

    #[test]
    fn test_count_pages_on_garbage_is_none() {
        assert_eq!(count_pages(b"not a pdf"), None);
    }
}
