use super::money::Money;
use serde::Serialize;

/// One row of the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    /// Unique identifier; also the key of the rendered payslip's file name.
    pub employee_id: String,
    pub name: String,
    /// Recipient address. May be blank on the roster, in which case dispatch fails for this row.
    pub email: String,
    pub basic_pay: Money,
    pub allowance: Money,
    pub deductions: Money,
}

impl EmployeeRecord {
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}
