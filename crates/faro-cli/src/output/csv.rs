//! Semicolon-delimited CSV sink for extraction records, matching the column
//! layout the downstream spreadsheets expect.

use faro_core::error::FaroError;
use faro_core::model::ExtractionRecord;
use std::path::Path;

/// Write records to a semicolon-delimited CSV file. Headers come from the
/// record's serde names; absent optional fields serialize as empty strings,
/// so every row keeps the full column shape.
pub fn write_records<'a, I>(path: &Path, records: I) -> Result<(), FaroError>
where
    I: IntoIterator<Item = &'a ExtractionRecord>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(|e| FaroError::Output(e.to_string()))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| FaroError::Output(e.to_string()))?;
    }

    writer.flush().map_err(|e| FaroError::Output(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ExtractionRecord {
        ExtractionRecord {
            source_document: "junio.pdf".into(),
            target: "https://buenosaires.gob.ar/".into(),
            uptime_percent: "99.50".into(),
            uptime_unit: "%".into(),
            uptime_duration: "06d 23h 59m 41s".into(),
            uptime_seconds: 604781,
            downtime_percent: "0.50".into(),
            downtime_unit: "%".into(),
            downtime_duration: "00d 00h 10m 00s".into(),
            downtime_seconds: 600,
            report_time_span: Some("01/06/2025 - 30/06/2025".into()),
            report_hours: None,
            sensor_type: Some("HTTP".into()),
            average_load_time: None,
            page_number: 3,
        }
    }

    #[test]
    fn test_write_records_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uptime_report.csv");
        write_records(&path, [&record()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();

        let header = lines.next().unwrap();
        assert_eq!(
            header,
            "archivo_pdf;url;uptime_porcentaje;uptime_unidad;uptime_duracion;\
             uptime_segundos;downtime_porcentaje;downtime_unidad;downtime_duracion;\
             downtime_segundos;periodo_reporte;horas_reporte;tipo_sensor;\
             tiempo_carga_promedio;pagina"
        );

        // Absent optionals stay in the row shape as empty fields
        let row = lines.next().unwrap();
        assert_eq!(
            row,
            "junio.pdf;https://buenosaires.gob.ar/;99.50;%;06d 23h 59m 41s;604781;\
             0.50;%;00d 00h 10m 00s;600;01/06/2025 - 30/06/2025;;HTTP;;3"
        );
    }
}
