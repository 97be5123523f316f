pub mod aggregate;
pub mod duration;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod targets;
pub mod walk;

use error::FaroError;
use extraction::PdfExtractor;
use model::ExtractionRecord;
use targets::schema::TargetCatalog;

/// Main API entry point: extract every recognized monitored-target record
/// from one PDF document.
///
/// The primary target runs through the strict single-target scan first;
/// discovery then picks up the remaining targets, de-duplicated per
/// document. A document with no pages, or whose pages carry no recognized
/// records, yields an empty vector rather than an error.
pub fn extract_document(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    catalog: &TargetCatalog,
    source_document: &str,
) -> Result<Vec<ExtractionRecord>, FaroError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(walk::extract_records(&pages, catalog, source_document))
}
