use crate::domain::employee::EmployeeRecord;
use crate::error::{PayrollError, Result};
use crate::interfaces::roster::RosterBuilder;
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

/// Reads a roster from the first worksheet of an Excel or OpenDocument workbook.
pub struct WorkbookRosterReader {
    range: Range<Data>,
}

impl WorkbookRosterReader {
    pub fn open(path: &Path) -> Result<Self> {
        let spreadsheet_error = |source| PayrollError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        };

        let mut workbook = open_workbook_auto(path).map_err(spreadsheet_error)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                PayrollError::InvalidRoster(format!("{} contains no worksheets", path.display()))
            })?
            .map_err(spreadsheet_error)?;

        Ok(Self::from_range(range))
    }

    pub fn from_range(range: Range<Data>) -> Self {
        Self { range }
    }

    /// Reads every row below the header; the first bad row aborts the load.
    pub fn records(self) -> Result<Vec<EmployeeRecord>> {
        // `Range` starts at the first used cell, which need not be A1.
        let first_row = self.range.start().map(|(row, _)| row as usize).unwrap_or(0);

        let mut rows = self.range.rows();
        let Some(header) = rows.next() else {
            return Err(PayrollError::InvalidRoster("worksheet is empty".to_string()));
        };
        let headers: Vec<String> = header.iter().map(cell_text).collect();
        let builder = RosterBuilder::from_headers(&headers)?;

        let mut records = Vec::new();
        for (index, row) in rows.enumerate() {
            let cells: Vec<String> = row.iter().map(cell_text).collect();
            if let Some(record) = builder.build(first_row + index + 2, &cells)? {
                records.push(record);
            }
        }
        Ok(records)
    }
}

/// Cell contents as the operator would read them.
///
/// Whole numbers drop the fractional part so a numeric employee id of 1001
/// reads as `1001`, not `1001.0`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}
