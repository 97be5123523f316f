//! Document-level walk: drives the locator over every page and turns
//! matches into flat extraction records.

use std::collections::HashSet;

use crate::duration;
use crate::extraction::PageContent;
use crate::model::ExtractionRecord;
use crate::parsing::context::{self, ContextFields};
use crate::parsing::locate::{RecordLocator, StatsTriples};
use crate::targets::schema::{TargetCatalog, TargetPattern};

// Context windows around the match anchor. Single-target mode anchors at
// the declaration line, discovery mode at the statistics line.
const SINGLE_BEFORE: usize = 5;
const SINGLE_AFTER: usize = 15;
const DISCOVERY_BEFORE: usize = 10;
const DISCOVERY_AFTER: usize = 10;

/// Single-target extraction for one document.
///
/// Only the first page whose text contains the target's canonical string is
/// scanned; if that page yields no match, the document yields no
/// single-target result. Later pages are not retried — the source reports
/// declare each target once, and this mirrors that assumption.
pub fn extract_target(
    pages: &[PageContent],
    catalog: &TargetCatalog,
    target: &TargetPattern,
    source_document: &str,
) -> Option<ExtractionRecord> {
    let page = pages
        .iter()
        .find(|p| p.lines.iter().any(|l| l.contains(&target.canonical)))?;

    let lines = page.line_refs();
    let locator = RecordLocator::new(catalog);
    let m = locator.find_target(&lines, target)?;
    let fields = context::enrich(&lines, m.declaration_index, SINGLE_BEFORE, SINGLE_AFTER);

    Some(build_record(
        source_document,
        &target.canonical,
        page.page_number,
        m.stats,
        fields,
    ))
}

/// Discovery extraction: every page is processed unconditionally, with one
/// de-duplication set scoped to this call, so each target produces at most
/// one record per document even when its statistics block repeats on later
/// pages.
pub fn discover_targets(
    pages: &[PageContent],
    catalog: &TargetCatalog,
    source_document: &str,
) -> Vec<ExtractionRecord> {
    let locator = RecordLocator::new(catalog);
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for page in pages {
        let lines = page.line_refs();
        for hit in locator.discover(&lines, &mut seen) {
            let fields =
                context::enrich(&lines, hit.statistics_index, DISCOVERY_BEFORE, DISCOVERY_AFTER);
            records.push(build_record(
                source_document,
                &hit.canonical,
                page.page_number,
                hit.stats,
                fields,
            ));
        }
    }

    records
}

/// Full per-document record set: the primary target is extracted with the
/// strict single-target guard first, then discovery picks up every other
/// recognized target. A discovery duplicate of the primary is dropped.
pub fn extract_records(
    pages: &[PageContent],
    catalog: &TargetCatalog,
    source_document: &str,
) -> Vec<ExtractionRecord> {
    let mut records = Vec::new();

    if let Some(primary) = catalog.primary_target() {
        if let Some(record) = extract_target(pages, catalog, primary, source_document) {
            records.push(record);
        }
    }

    for record in discover_targets(pages, catalog, source_document) {
        if record.target != catalog.primary {
            records.push(record);
        }
    }

    records
}

fn build_record(
    source_document: &str,
    canonical: &str,
    page_number: usize,
    stats: StatsTriples,
    fields: ContextFields,
) -> ExtractionRecord {
    let uptime_seconds = duration::to_seconds(&stats.up_duration);
    let downtime_seconds = duration::to_seconds(&stats.down_duration);

    ExtractionRecord {
        source_document: source_document.to_string(),
        target: canonical.to_string(),
        uptime_percent: stats.up_percent,
        uptime_unit: stats.up_unit,
        uptime_duration: stats.up_duration,
        uptime_seconds,
        downtime_percent: stats.down_percent,
        downtime_unit: stats.down_unit,
        downtime_duration: stats.down_duration,
        downtime_seconds,
        report_time_span: fields.report_time_span,
        report_hours: fields.report_hours,
        sensor_type: fields.sensor_type,
        average_load_time: fields.average_load_time,
        page_number,
    }
}
