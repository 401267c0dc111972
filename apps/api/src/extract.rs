//! PDF text extraction — converts raw résumé bytes to plain text plus a page count.
//!
//! Text ordering follows the extraction library's content-stream order, which
//! may not match visual reading order for multi-column layouts. That is an
//! accepted limitation of the extractor, not something this module corrects.

use std::panic::{self, AssertUnwindSafe};

use crate::errors::AppError;

/// Result of extracting a résumé PDF.
#[derive(Debug)]
pub struct ExtractedResume {
    pub text: String,
    pub pages: usize,
}

/// Extracts plain text from raw PDF bytes.
///
/// `pdf_extract` can panic on malformed input rather than returning an error,
/// so the call is wrapped in `catch_unwind` and panics are converted into
/// `AppError::Extraction`.
pub fn extract_resume(bytes: &[u8]) -> Result<ExtractedResume, AppError> {
    let owned = bytes.to_vec(); // owned copy for the unwind boundary
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&owned)
    }));

    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(AppError::Extraction(e.to_string())),
        Err(_) => {
            return Err(AppError::Extraction(
                "extraction panicked (malformed document)".to_string(),
            ))
        }
    };

    Ok(ExtractedResume {
        text: pages.join("\n"),
        pages: pages.len(),
    })
}
