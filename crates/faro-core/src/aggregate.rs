//! Corpus-level aggregation of extraction records into derived statistics.

use crate::model::{CorpusStatistics, ExtractionRecord};
use crate::targets::schema::TargetCatalog;

/// Split a record set into the primary and secondary subsets named by the
/// catalog. Records for other targets are ignored.
pub fn partition<'a>(
    records: &'a [ExtractionRecord],
    catalog: &TargetCatalog,
) -> (Vec<&'a ExtractionRecord>, Vec<&'a ExtractionRecord>) {
    let primary = records
        .iter()
        .filter(|r| r.target == catalog.primary)
        .collect();
    let secondary = records
        .iter()
        .filter(|r| r.target == catalog.secondary)
        .collect();
    (primary, secondary)
}

/// Sum the uptime/downtime seconds of the two record subsets into corpus
/// statistics. Pure and stateless; empty inputs yield zero-filled counters
/// and a 0 percentage rather than a division error.
pub fn aggregate(
    primary: &[&ExtractionRecord],
    secondary: &[&ExtractionRecord],
) -> CorpusStatistics {
    let mut stats = CorpusStatistics::default();

    for record in primary {
        stats.primary_uptime_seconds += record.uptime_seconds;
        stats.primary_downtime_seconds += record.downtime_seconds;
    }
    for record in secondary {
        stats.secondary_uptime_seconds += record.uptime_seconds;
        stats.secondary_downtime_seconds += record.downtime_seconds;
    }

    stats.total_seconds = stats.primary_uptime_seconds
        + stats.primary_downtime_seconds
        + stats.secondary_uptime_seconds
        + stats.secondary_downtime_seconds;

    if stats.total_seconds > 0 {
        stats.secondary_downtime_percent =
            (stats.secondary_downtime_seconds as f64 / stats.total_seconds as f64) * 100.0;
    }

    stats
}
