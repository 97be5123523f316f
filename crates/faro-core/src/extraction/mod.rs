pub mod pdftotext;

use crate::error::FaroError;

/// Text content extracted from a single page of a PDF.
///
/// Lines preserve the original visual order of the rendered page. Garbled
/// ligatures or spacing from the underlying renderer are not corrected; the
/// parser downstream tolerates inexact whitespace around markers.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number, exposed as-is in output records.
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    pub fn line_refs(&self) -> Vec<&str> {
        self.lines.iter().map(|s| s.as_str()).collect()
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FaroError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
