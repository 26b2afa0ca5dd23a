use crate::domain::outcome::{OutcomeRow, RunReport};
use crate::error::Result;
use std::io::Write;

/// Writes one CSV line per record outcome, in roster order.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_report(&mut self, report: &RunReport) -> Result<()> {
        if report.outcomes.is_empty() {
            self.writer
                .write_record(["employee_id", "name", "email", "status", "detail"])?;
        }
        for outcome in &report.outcomes {
            self.writer.serialize(OutcomeRow::from(outcome))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
