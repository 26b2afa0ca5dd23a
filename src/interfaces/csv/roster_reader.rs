use crate::domain::employee::EmployeeRecord;
use crate::error::Result;
use crate::interfaces::roster::RosterBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a roster exported as CSV.
///
/// Fields are trimmed and rows may be ragged; missing trailing cells read as blank.
pub struct CsvRosterReader<R: Read> {
    reader: csv::Reader<R>,
}

impl CsvRosterReader<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> CsvRosterReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads every row; the first bad row aborts the load.
    pub fn records(mut self) -> Result<Vec<EmployeeRecord>> {
        let builder = RosterBuilder::from_headers(self.reader.headers()?.iter())?;

        let mut records = Vec::new();
        for (index, row) in self.reader.records().enumerate() {
            let row = row?;
            let cells: Vec<&str> = row.iter().collect();
            // Header is spreadsheet row 1.
            if let Some(record) = builder.build(index + 2, &cells)? {
                records.push(record);
            }
        }
        Ok(records)
    }
}
