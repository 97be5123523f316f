use faro_core::aggregate::{aggregate, partition};
use faro_core::error::FaroError;
use std::path::PathBuf;

use crate::commands;
use crate::output;

pub fn run(
    data_dir: PathBuf,
    targets_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), FaroError> {
    let catalog = commands::load_catalog(targets_file.as_deref())?;
    let records = commands::extract_corpus(&data_dir, &catalog)?;

    let (primary, secondary) = partition(&records, &catalog);
    let stats = aggregate(&primary, &secondary);

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => output::table::print_summary(&stats, &catalog),
    }

    Ok(())
}
