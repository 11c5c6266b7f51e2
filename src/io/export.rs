//! CSV export for estimate reports.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::report::EstimateReport;

/// Schema v1 column header for CSV report export.
const HEADER: &str = "slot,units,power_kw,hours,energy_kwh";

/// Exports an estimate report to a CSV file at the given path.
///
/// Writes a header row, one data row per slot, and a final `total` row
/// carrying the rounded grand total. Produces deterministic output for
/// identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(report: &EstimateReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(report, buf)
}

/// Writes an estimate report as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(report: &EstimateReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // One row per slot
    for s in &report.slots {
        wtr.write_record(&[
            s.title.clone(),
            s.units.to_string(),
            format!("{:.4}", s.power_kw),
            format!("{:.2}", s.hours),
            format!("{:.4}", s.energy_kwh),
        ])?;
    }

    // Grand total row
    wtr.write_record(&[
        "total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", report.total_kwh),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEFAULT_HOURS, DEFAULT_POWER_KW, default_slot_configs};

    fn default_report() -> EstimateReport {
        let configs = default_slot_configs();
        EstimateReport::from_inputs(&configs, &DEFAULT_POWER_KW, &DEFAULT_HOURS)
            .expect("default inputs are well-formed")
    }

    #[test]
    fn header_matches_schema_v1() {
        let mut buf = Vec::new();
        write_csv(&default_report(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(first_line, "slot,units,power_kw,hours,energy_kwh");
    }

    #[test]
    fn row_count_matches_slot_count_plus_total() {
        let mut buf = Vec::new();
        write_csv(&default_report(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 6 slots + 1 total
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn total_row_carries_rounded_total() {
        let mut buf = Vec::new();
        write_csv(&default_report(), &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();
        let last = output.lines().last().unwrap_or("");
        assert_eq!(last, "total,,,,468.31");
    }

    #[test]
    fn deterministic_output() {
        let report = default_report();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&report, &mut buf1).ok();
        write_csv(&report, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let mut buf = Vec::new();
        write_csv(&default_report(), &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(5));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            row_count += 1;
        }
        // 6 slots + total
        assert_eq!(row_count, 7);
    }
}
