//! CSV export of measurement rows.

use airaware_db::MeasurementRow;
use chrono::NaiveDate;
use std::io::Cursor;
use thiserror::Error;

/// Column headers, in the order every data row is written.
pub const CSV_HEADER: [&str; 6] = ["Location", "Sub-location", "Pollutant", "Value", "Status", "Date"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not flush export buffer: {0}")]
    Flush(String),

    #[error("Row {index} is malformed: {reason}")]
    MalformedRow { index: usize, reason: String },
}

/// Encode rows as UTF-8 CSV, header first, rows in input order.
///
/// The returned cursor is positioned at byte 0. An empty slice still
/// produces the header line.
pub fn encode_csv(rows: &[MeasurementRow]) -> Result<Cursor<Vec<u8>>, ExportError> {
    let mut writer = csv::Writer::from_writer(Cursor::new(Vec::new()));
    writer.write_record(CSV_HEADER)?;

    for (index, row) in rows.iter().enumerate() {
        if !row.value.is_finite() {
            return Err(ExportError::MalformedRow {
                index,
                reason: format!("value {} is not a finite number", row.value),
            });
        }
        let value = row.value.to_string();
        let date = row.measured_at.format("%Y-%m-%d").to_string();
        writer.write_record([
            row.location_name.as_str(),
            row.sub_location_name.as_str(),
            row.pollutant_name.as_str(),
            value.as_str(),
            row.status.as_str(),
            date.as_str(),
        ])?;
    }

    let mut buffer = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))?;
    buffer.set_position(0);
    Ok(buffer)
}

/// `Air Quality Data for: {label}_{YYYY-MM-DD}`, with anything that
/// can't sit inside a quoted header value stripped from the label.
pub fn attachment_filename(label: &str, date: NaiveDate) -> String {
    let label: String = label
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    format!("Air Quality Data for: {}_{}", label.trim(), date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Read;

    fn row(location: &str, site: &str, value: f64, day: u32) -> MeasurementRow {
        MeasurementRow {
            location_name: location.to_string(),
            sub_location_name: site.to_string(),
            pollutant_name: "Nitrogen dioxide".to_string(),
            value,
            status: "P µg/m³".to_string(),
            measured_at: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        }
    }

    fn read_all(mut cursor: Cursor<Vec<u8>>) -> String {
        let mut out = String::new();
        cursor.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_empty_rows_give_header_only() {
        let text = read_all(encode_csv(&[]).unwrap());
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["Location,Sub-location,Pollutant,Value,Status,Date"]);
    }

    #[test]
    fn test_rows_follow_header_in_input_order() {
        let rows = vec![
            row("Oxford", "St Aldates", 11.2, 3),
            row("Oxford", "St Ebbes", 48.0, 2),
            row("Oxford", "High Street", 20.5, 1),
        ];
        let text = read_all(encode_csv(&rows).unwrap());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Location,Sub-location,Pollutant,Value,Status,Date");
        assert_eq!(lines[1], "Oxford,St Aldates,Nitrogen dioxide,11.2,P µg/m³,2024-01-03");
        assert_eq!(lines[2], "Oxford,St Ebbes,Nitrogen dioxide,48,P µg/m³,2024-01-02");
        assert_eq!(lines[3], "Oxford,High Street,Nitrogen dioxide,20.5,P µg/m³,2024-01-01");
    }

    #[test]
    fn test_buffer_starts_at_byte_zero() {
        let cursor = encode_csv(&[row("Oxford", "St Ebbes", 1.0, 1)]).unwrap();
        assert_eq!(cursor.position(), 0);
        assert!(read_all(cursor).starts_with("Location,"));
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let rows = vec![row("Oxford, City", "St \"Old\" Ebbes", 1.5, 1)];
        let text = read_all(encode_csv(&rows).unwrap());

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "Oxford, City");
        assert_eq!(&record[1], "St \"Old\" Ebbes");
        assert!(text.contains("\"Oxford, City\""));
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let rows = vec![row("Oxford", "St Ebbes", 1.0, 1), row("Oxford", "St Ebbes", f64::NAN, 2)];
        match encode_csv(&rows) {
            Err(ExportError::MalformedRow { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected malformed row, got {other:?}"),
        }
    }

    #[test]
    fn test_attachment_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(attachment_filename("Oxford", date), "Air Quality Data for: Oxford_2024-03-09");
        assert_eq!(attachment_filename("Ox\"ford\n", date), "Air Quality Data for: Oxford_2024-03-09");
    }
}
