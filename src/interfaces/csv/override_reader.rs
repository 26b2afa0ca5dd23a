use crate::domain::money::Money;
use crate::domain::overrides::DeductionOverrides;
use crate::error::{PayrollError, Result};
use crate::interfaces::columns::ColumnMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const EMPLOYEE_ID: &str = "EMPLOYEE ID";
const DEDUCTIONS: &str = "DEDUCTIONS";

/// Reads a deduction override table: one `employee id, deductions` pair per row.
pub struct OverrideReader<R: Read> {
    reader: csv::Reader<R>,
}

impl OverrideReader<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            PayrollError::InvalidOverrides(format!("cannot open {}: {e}", path.display()))
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> OverrideReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn overrides(mut self) -> Result<DeductionOverrides> {
        let columns = ColumnMap::from_headers(self.reader.headers()?.iter());
        let [id_at, deductions_at]: [usize; 2] = columns
            .require(&[EMPLOYEE_ID, DEDUCTIONS])
            .map_err(|missing| {
                PayrollError::InvalidOverrides(format!("missing column(s): {}", missing.join(", ")))
            })?
            .try_into()
            .map_err(|_| PayrollError::InvalidOverrides("column lookup failed".to_string()))?;

        let mut overrides = DeductionOverrides::new();
        for (index, row) in self.reader.records().enumerate() {
            let row = row?;
            let row_number = index + 2;
            let employee_id = row.get(id_at).unwrap_or("");
            let raw_amount = row.get(deductions_at).unwrap_or("");
            if employee_id.is_empty() && raw_amount.is_empty() {
                continue;
            }
            if employee_id.is_empty() {
                return Err(PayrollError::InvalidOverrides(format!(
                    "row {row_number}: {EMPLOYEE_ID} is blank"
                )));
            }

            let deductions = Money::parse_amount(raw_amount).map_err(|e| {
                PayrollError::InvalidOverrides(format!("row {row_number} (employee {employee_id}): {e}"))
            })?;
            overrides.insert(employee_id, deductions);
        }
        Ok(overrides)
    }
}

/// Loads the override table at `path`.
pub fn load_overrides(path: &Path) -> Result<DeductionOverrides> {
    let overrides = OverrideReader::from_path(path)?.overrides()?;
    tracing::info!(path = %path.display(), overrides = overrides.len(), "deduction overrides loaded");
    Ok(overrides)
}
