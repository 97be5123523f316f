pub mod extract;
pub mod summary;
pub mod targets;

use faro_core::error::FaroError;
use faro_core::extraction::pdftotext::PdftotextExtractor;
use faro_core::model::ExtractionRecord;
use faro_core::targets::schema::TargetCatalog;
use std::path::{Path, PathBuf};

/// Load the catalog named on the command line, or fall back to the builtin
/// preset.
pub fn load_catalog(targets_file: Option<&Path>) -> Result<TargetCatalog, FaroError> {
    match targets_file {
        Some(path) => faro_core::targets::load_catalog(path),
        None => faro_core::targets::builtin::load_preset("prtg-caba"),
    }
}

/// Find the PDF documents of a corpus directory, sorted by name.
/// An empty corpus is fatal: nothing is extracted and no output is written.
pub fn collect_documents(dir: &Path) -> Result<Vec<PathBuf>, FaroError> {
    let mut pdfs: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    pdfs.sort();

    if pdfs.is_empty() {
        return Err(FaroError::NoDocuments(dir.to_path_buf()));
    }
    Ok(pdfs)
}

/// Run the extraction over every PDF in the corpus directory.
///
/// Each document is a failure boundary: a document that cannot be read or
/// decoded is logged and skipped, and the run continues. There is no retry;
/// a failed document is simply absent from the output.
pub fn extract_corpus(
    dir: &Path,
    catalog: &TargetCatalog,
) -> Result<Vec<ExtractionRecord>, FaroError> {
    let pdfs = collect_documents(dir)?;
    log::info!("found {} PDF document(s) in {}", pdfs.len(), dir.display());

    let extractor = PdftotextExtractor::new();
    let mut records = Vec::new();

    for path in &pdfs {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        log::info!("processing {name}");

        let result = std::fs::read(path)
            .map_err(FaroError::from)
            .and_then(|bytes| faro_core::extract_document(&bytes, &extractor, catalog, &name));

        match result {
            Ok(document_records) => {
                if document_records.is_empty() {
                    log::warn!("{name}: no uptime records found");
                }
                for record in &document_records {
                    log::info!("  found {} (page {})", record.target, record.page_number);
                }
                records.extend(document_records);
            }
            Err(e) => log::error!("skipping {name}: {e}"),
        }
    }

    Ok(records)
}
