//! Window-bounded scan for the contextual fields surrounding a matched
//! record: reporting period, reporting hours, sensor type, average load
//! time.

/// Auxiliary fields found near a match. Fields stay `None` when their
/// marker never appears in the window; they serialize as empty, not null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextFields {
    pub report_time_span: Option<String>,
    pub report_hours: Option<String>,
    pub sensor_type: Option<String>,
    pub average_load_time: Option<String>,
}

const REPORT_TIME_SPAN: &str = "Report Time Span:";
const REPORT_HOURS: &str = "Report Hours:";
const SENSOR_TYPE: &str = "Sensor Type:";
// The reports are inconsistent about the casing of this label.
const AVERAGE_LOAD_TIME: [&str; 2] = ["Average (Loading time):", "Average (Loading Time):"];

/// Scan the lines in `[anchor - before, anchor + after)`, clamped to the
/// slice bounds, for the four labeled fields. The underlying sequence is
/// never mutated; if a marker reappears within the window, the last
/// occurrence wins.
pub fn enrich(lines: &[&str], anchor: usize, before: usize, after: usize) -> ContextFields {
    let lo = anchor.saturating_sub(before);
    let hi = (anchor + after).min(lines.len());

    let mut fields = ContextFields::default();
    for line in &lines[lo..hi] {
        if let Some(value) = after_marker(line, REPORT_TIME_SPAN) {
            fields.report_time_span = Some(value);
        } else if let Some(value) = after_marker(line, REPORT_HOURS) {
            fields.report_hours = Some(value);
        } else if let Some(value) = after_marker(line, SENSOR_TYPE) {
            fields.sensor_type = Some(value);
        } else if AVERAGE_LOAD_TIME.iter().any(|m| line.contains(m)) {
            // The label itself contains colons; the value sits after the
            // last one.
            if let Some(value) = line.rsplit(':').next() {
                fields.average_load_time = Some(value.trim().to_string());
            }
        }
    }
    fields
}

/// Trailing content of `line` after `marker`, trimmed.
fn after_marker(line: &str, marker: &str) -> Option<String> {
    let idx = line.find(marker)?;
    Some(line[idx + marker.len()..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_found() {
        let lines = vec![
            "Report Time Span: 01/06/2025 - 30/06/2025",
            "Report Hours: 720",
            "Probe, Group, Device: > https://buenosaires.gob.ar/",
            "Sensor Type: HTTP",
            "Average (Loading time): 312 msec",
        ];
        let fields = enrich(&lines, 2, 5, 15);
        assert_eq!(
            fields.report_time_span.as_deref(),
            Some("01/06/2025 - 30/06/2025")
        );
        assert_eq!(fields.report_hours.as_deref(), Some("720"));
        assert_eq!(fields.sensor_type.as_deref(), Some("HTTP"));
        assert_eq!(fields.average_load_time.as_deref(), Some("312 msec"));
    }

    #[test]
    fn test_load_time_casings_equivalent() {
        let lower = vec!["Average (Loading time): 100 msec"];
        let upper = vec!["Average (Loading Time): 100 msec"];
        assert_eq!(
            enrich(&lower, 0, 5, 15).average_load_time.as_deref(),
            Some("100 msec")
        );
        assert_eq!(
            enrich(&upper, 0, 5, 15).average_load_time.as_deref(),
            Some("100 msec")
        );
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let lines = vec!["Sensor Type: HTTP"];
        let fields = enrich(&lines, 0, 5, 15);
        assert_eq!(fields.sensor_type.as_deref(), Some("HTTP"));
        assert!(fields.report_time_span.is_none());
        assert!(fields.report_hours.is_none());
        assert!(fields.average_load_time.is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let lines = vec!["Sensor Type: HTTP", "Sensor Type: HTTPS"];
        let fields = enrich(&lines, 0, 5, 15);
        assert_eq!(fields.sensor_type.as_deref(), Some("HTTPS"));
    }

    #[test]
    fn test_window_excludes_lines_outside_range() {
        let mut lines = vec!["Report Hours: 720"];
        lines.extend(vec![""; 20]);
        lines.push("anchor");
        // Anchor at index 21; the marker at index 0 is outside [11, 31).
        let fields = enrich(&lines, 21, 10, 10);
        assert!(fields.report_hours.is_none());
    }

    #[test]
    fn test_window_clamps_at_bounds() {
        let lines = vec!["Report Hours: 720", "anchor"];
        // before/after larger than the slice must not panic
        let fields = enrich(&lines, 1, 10, 15);
        assert_eq!(fields.report_hours.as_deref(), Some("720"));
    }
}
