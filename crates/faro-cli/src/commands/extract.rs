use faro_core::aggregate::partition;
use faro_core::error::FaroError;
use std::path::PathBuf;

use crate::commands;
use crate::output;

pub fn run(
    data_dir: PathBuf,
    targets_file: Option<PathBuf>,
    out_dir: Option<PathBuf>,
) -> Result<(), FaroError> {
    let catalog = commands::load_catalog(targets_file.as_deref())?;
    let records = commands::extract_corpus(&data_dir, &catalog)?;

    if records.is_empty() {
        eprintln!("No uptime records found in any PDF");
        return Ok(());
    }

    let out_dir = out_dir.unwrap_or_else(|| data_dir.clone());

    let report_path = out_dir.join("uptime_report.csv");
    output::csv::write_records(&report_path, records.iter())?;
    eprintln!(
        "Wrote {} record(s) to {}",
        records.len(),
        report_path.display()
    );

    // Per-target filtered reports, only when the target actually appeared
    let (primary, secondary) = partition(&records, &catalog);

    if !primary.is_empty() {
        let path = out_dir.join("uptime_report_primary.csv");
        output::csv::write_records(&path, primary.iter().copied())?;
        eprintln!(
            "Wrote {} record(s) for {} to {}",
            primary.len(),
            catalog.primary,
            path.display()
        );
    }

    if !secondary.is_empty() {
        let path = out_dir.join("uptime_report_secondary.csv");
        output::csv::write_records(&path, secondary.iter().copied())?;
        eprintln!(
            "Wrote {} record(s) for {} to {}",
            secondary.len(),
            catalog.secondary,
            path.display()
        );
    }

    Ok(())
}
