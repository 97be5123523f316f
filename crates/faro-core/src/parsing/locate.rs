//! Locates a monitored target's declaration line and its statistics line
//! within the text lines of one report page.

use crate::targets::schema::{TargetCatalog, TargetPattern};
use regex::Regex;
use std::collections::HashSet;

/// How many lines below a declaration line the statistics line may sit.
const STATS_LOOKAHEAD: usize = 10;

/// The up/down triples captured from one statistics line.
///
/// Percentages and duration tokens are kept verbatim; the two sides come
/// from independent captures and are not cross-validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsTriples {
    pub up_percent: String,
    pub up_unit: String,
    pub up_duration: String,
    pub down_percent: String,
    pub down_unit: String,
    pub down_duration: String,
}

/// A single-target match on one page.
#[derive(Debug, Clone)]
pub struct PageMatch {
    pub declaration_index: usize,
    pub statistics_index: usize,
    pub stats: StatsTriples,
}

/// A discovery-mode match: target identity plus statistics line position.
#[derive(Debug, Clone)]
pub struct DiscoveredMatch {
    pub canonical: String,
    pub statistics_index: usize,
    pub stats: StatsTriples,
}

/// Line scanner for one target catalog. Compiles the statistics patterns
/// once so per-line matching stays cheap across a whole corpus walk.
pub struct RecordLocator<'a> {
    catalog: &'a TargetCatalog,
    up_re: Regex,
    down_re: Regex,
}

impl<'a> RecordLocator<'a> {
    pub fn new(catalog: &'a TargetCatalog) -> Self {
        RecordLocator {
            catalog,
            up_re: Regex::new(r"Up:\s*([\d\.]+)\s*(%)\s*\[([^\]]+)\]")
                .unwrap_or_else(|_| unreachable!()),
            down_re: Regex::new(r"Down:\s*([\d\.]+)\s*(%)\s*\[([^\]]+)\]")
                .unwrap_or_else(|_| unreachable!()),
        }
    }

    /// Parse the up/down triples out of a statistics line. Both sides must
    /// be present; a line with only one yields nothing.
    pub fn parse_statistics_line(&self, line: &str) -> Option<StatsTriples> {
        let up = self.up_re.captures(line)?;
        let down = self.down_re.captures(line)?;
        Some(StatsTriples {
            up_percent: up[1].to_string(),
            up_unit: up[2].to_string(),
            up_duration: up[3].to_string(),
            down_percent: down[1].to_string(),
            down_unit: down[2].to_string(),
            down_duration: down[3].to_string(),
        })
    }

    /// Single-target mode: scan one page's lines for the target's
    /// declaration line and the nearest statistics line below it.
    ///
    /// The declaration guard requires the line to end exactly with the
    /// target's canonical string (after trimming trailing whitespace) and to
    /// carry none of the catalog's conflict markers, so a target that is a
    /// strict prefix of a longer listed form never matches the longer form's
    /// line.
    pub fn find_target(&self, lines: &[&str], target: &TargetPattern) -> Option<PageMatch> {
        for (i, line) in lines.iter().enumerate() {
            if !self.declaration_guard(line, target) {
                continue;
            }

            let window_end = (i + STATS_LOOKAHEAD).min(lines.len());
            for (j, candidate) in lines.iter().enumerate().take(window_end).skip(i) {
                if !candidate.contains(&self.catalog.statistics_marker) {
                    continue;
                }
                if let Some(stats) = self.parse_statistics_line(candidate) {
                    return Some(PageMatch {
                        declaration_index: i,
                        statistics_index: j,
                        stats,
                    });
                }
            }
        }
        None
    }

    fn declaration_guard(&self, line: &str, target: &TargetPattern) -> bool {
        line.contains(&self.catalog.declaration_marker)
            && line.contains(&target.canonical)
            && !self
                .catalog
                .conflict_markers
                .iter()
                .any(|marker| line.contains(marker))
            && line.trim_end().ends_with(&target.canonical)
    }

    /// Classify a declaration line against the catalog's ordered target
    /// list. First containing literal wins, so the catalog must list
    /// more-specific forms first.
    pub fn classify_declaration(&self, line: &str) -> Option<&TargetPattern> {
        if !line.contains(&self.catalog.declaration_marker) {
            return None;
        }
        self.catalog
            .targets
            .iter()
            .find(|t| line.contains(&t.literal))
    }

    /// Discovery mode: walk the page's lines once, tracking the most recent
    /// declared target and emitting a match for every statistics line whose
    /// target has not been recorded yet in `seen`.
    ///
    /// `seen` is owned by the caller and scoped to one document, so a target
    /// already recorded on an earlier page stays suppressed. It is marked
    /// only on a successful parse; a garbled statistics line leaves the
    /// target eligible for a later occurrence.
    pub fn discover(&self, lines: &[&str], seen: &mut HashSet<String>) -> Vec<DiscoveredMatch> {
        let mut matches = Vec::new();
        let mut current: Option<&TargetPattern> = None;

        for (i, line) in lines.iter().enumerate() {
            if line.contains(&self.catalog.declaration_marker) {
                if let Some(target) = self.classify_declaration(line) {
                    current = Some(target);
                }
            } else if line.contains(&self.catalog.statistics_marker) {
                let Some(target) = current else {
                    continue;
                };
                if seen.contains(&target.canonical) {
                    continue;
                }
                if let Some(stats) = self.parse_statistics_line(line) {
                    seen.insert(target.canonical.clone());
                    matches.push(DiscoveredMatch {
                        canonical: target.canonical.clone(),
                        statistics_index: i,
                        stats,
                    });
                } else {
                    log::debug!("statistics line at index {i} missing an up or down triple");
                }
            }
        }

        matches
    }
}
