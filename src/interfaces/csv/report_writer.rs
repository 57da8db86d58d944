use crate::domain::ports::ReportSerializer;
use crate::domain::report::Report;
use crate::error::{Result, TallyError};
use std::io::Write;

/// Writes a report as a spreadsheet-friendly CSV table.
///
/// Layout: a header row, one row per entry, a blank separator row, then a
/// `TOTAL` row carrying the sum in the amount column.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    currency: String,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a new `ReportWriter`. `currency` names the amount column.
    pub fn new(sink: W, currency: &str) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            currency: currency.trim().to_string(),
        }
    }

    pub fn write_report(&mut self, report: &Report) -> Result<()> {
        let amount_header = format!("Amount ({})", self.currency);
        self.writer.write_record(["No", "Item", amount_header.as_str()])?;

        for row in &report.rows {
            self.writer.write_record([
                row.position.to_string(),
                row.label.clone(),
                row.amount.to_string(),
            ])?;
        }

        self.writer.write_record(["", "", ""])?;
        self.writer
            .write_record(["", "TOTAL", report.total.to_string().as_str()])?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and hands back the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| TallyError::IoError(e.into_error()))
    }
}

/// Serializes a report into an in-memory CSV document.
pub fn report_to_csv(report: &Report, currency: &str) -> Result<Vec<u8>> {
    let mut writer = ReportWriter::new(Vec::new(), currency);
    writer.write_report(report)?;
    writer.into_inner()
}

/// `ReportSerializer` producing the CSV layout written by `ReportWriter`.
pub struct CsvReportSerializer {
    currency: String,
}

impl CsvReportSerializer {
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
        }
    }
}

impl ReportSerializer for CsvReportSerializer {
    fn serialize(&self, report: &Report) -> Result<Vec<u8>> {
        report_to_csv(report, &self.currency)
    }
}
