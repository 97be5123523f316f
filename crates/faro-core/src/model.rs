use serde::{Deserialize, Serialize};

/// One extracted uptime row, keyed by (source document, target, page).
///
/// Percentages and duration tokens are kept verbatim as captured from the
/// report text; the seconds fields are decoded independently from the
/// duration tokens and are never reconciled against the percentages.
///
/// Serde names follow the CSV column layout of the original reports, so the
/// output files stay byte-compatible with downstream spreadsheet tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    #[serde(rename = "archivo_pdf")]
    pub source_document: String,
    #[serde(rename = "url")]
    pub target: String,
    #[serde(rename = "uptime_porcentaje")]
    pub uptime_percent: String,
    #[serde(rename = "uptime_unidad")]
    pub uptime_unit: String,
    #[serde(rename = "uptime_duracion")]
    pub uptime_duration: String,
    #[serde(rename = "uptime_segundos")]
    pub uptime_seconds: u64,
    #[serde(rename = "downtime_porcentaje")]
    pub downtime_percent: String,
    #[serde(rename = "downtime_unidad")]
    pub downtime_unit: String,
    #[serde(rename = "downtime_duracion")]
    pub downtime_duration: String,
    #[serde(rename = "downtime_segundos")]
    pub downtime_seconds: u64,
    #[serde(rename = "periodo_reporte")]
    pub report_time_span: Option<String>,
    #[serde(rename = "horas_reporte")]
    pub report_hours: Option<String>,
    #[serde(rename = "tipo_sensor")]
    pub sensor_type: Option<String>,
    #[serde(rename = "tiempo_carga_promedio")]
    pub average_load_time: Option<String>,
    #[serde(rename = "pagina")]
    pub page_number: usize,
}

/// Corpus-level totals, recomputed from the record set on every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusStatistics {
    pub primary_uptime_seconds: u64,
    pub primary_downtime_seconds: u64,
    pub secondary_uptime_seconds: u64,
    pub secondary_downtime_seconds: u64,
    pub total_seconds: u64,
    /// Secondary-target downtime over total time, in percent.
    /// Downstream formatting expects 4 decimal digits.
    pub secondary_downtime_percent: f64,
}
