//! Roster loading.
//!
//! Both the CSV and the workbook readers reduce the input to a header row and
//! rows of trimmed cell text; [`RosterBuilder`] turns those into
//! [`EmployeeRecord`]s. A single bad row fails the whole load.

use crate::domain::employee::EmployeeRecord;
use crate::domain::money::Money;
use crate::error::{PayrollError, Result};
use crate::interfaces::columns::ColumnMap;
use crate::interfaces::csv::roster_reader::CsvRosterReader;
use crate::interfaces::spreadsheet::workbook_reader::WorkbookRosterReader;
use std::path::Path;

pub const EMPLOYEE_ID: &str = "EMPLOYEE ID";
pub const NAME: &str = "NAME";
pub const EMAIL: &str = "EMAIL";
pub const BASIC_PAY: &str = "BASIC PAY";
pub const ALLOWANCE: &str = "ALLOWANCE";
pub const DEDUCTIONS: &str = "DEDUCTIONS";

pub const REQUIRED_COLUMNS: [&str; 6] = [EMPLOYEE_ID, NAME, EMAIL, BASIC_PAY, ALLOWANCE, DEDUCTIONS];

/// Reads the whole roster at `path`, choosing the reader by file extension.
///
/// `.csv` files go through the CSV reader; everything else is treated as a
/// workbook and the first worksheet is read.
pub fn load_roster(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let records = if is_csv {
        CsvRosterReader::from_path(path)?.records()?
    } else {
        WorkbookRosterReader::open(path)?.records()?
    };

    tracing::info!(path = %path.display(), employees = records.len(), "roster loaded");
    Ok(records)
}

/// Converts rows of cell text into employee records.
#[derive(Debug, Clone)]
pub struct RosterBuilder {
    positions: [usize; 6],
}

impl RosterBuilder {
    pub fn from_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = ColumnMap::from_headers(headers);
        let positions = columns.require(&REQUIRED_COLUMNS).map_err(|missing| {
            PayrollError::InvalidRoster(format!("missing required column(s): {}", missing.join(", ")))
        })?;

        let positions: [usize; 6] = positions
            .try_into()
            .map_err(|_| PayrollError::InvalidRoster("column lookup failed".to_string()))?;
        Ok(Self { positions })
    }

    /// Builds the record for one data row.
    ///
    /// `row_number` is the 1-based row as the operator sees it in the
    /// spreadsheet, used in error messages. Returns `Ok(None)` for a row whose
    /// cells are all blank.
    pub fn build<S: AsRef<str>>(&self, row_number: usize, cells: &[S]) -> Result<Option<EmployeeRecord>> {
        if cells.iter().all(|cell| cell.as_ref().trim().is_empty()) {
            return Ok(None);
        }

        let [id_at, name_at, email_at, basic_at, allowance_at, deductions_at] = self.positions;
        let cell = |index: usize| cells.get(index).map(|c| c.as_ref().trim()).unwrap_or("");

        let employee_id = cell(id_at);
        if employee_id.is_empty() {
            return Err(PayrollError::InvalidRoster(format!(
                "row {row_number}: {EMPLOYEE_ID} is blank"
            )));
        }

        let amount = |index: usize, label: &str| {
            Money::parse_amount(cell(index)).map_err(|e| {
                PayrollError::InvalidRoster(format!(
                    "row {row_number} (employee {employee_id}): {label}: {e}"
                ))
            })
        };

        Ok(Some(EmployeeRecord {
            employee_id: employee_id.to_string(),
            name: cell(name_at).to_string(),
            email: cell(email_at).to_string(),
            basic_pay: amount(basic_at, BASIC_PAY)?,
            allowance: amount(allowance_at, ALLOWANCE)?,
            deductions: amount(deductions_at, DEDUCTIONS)?,
        }))
    }
}
