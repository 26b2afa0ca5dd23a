use super::employee::EmployeeRecord;
use super::money::Money;
use std::collections::HashMap;

/// Replacement deductions keyed by employee identifier.
///
/// Applied to a record before its net pay is calculated, so the rendered
/// payslip shows the overridden figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeductionOverrides {
    by_employee: HashMap<String, Money>,
}

impl DeductionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries for the same identifier replace earlier ones.
    pub fn insert(&mut self, employee_id: impl AsRef<str>, deductions: Money) {
        self.by_employee
            .insert(employee_id.as_ref().trim().to_string(), deductions);
    }

    pub fn get(&self, employee_id: &str) -> Option<Money> {
        self.by_employee.get(employee_id.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_employee.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_employee.is_empty()
    }

    pub fn apply(&self, record: &EmployeeRecord) -> EmployeeRecord {
        let mut record = record.clone();
        if let Some(deductions) = self.get(&record.employee_id) {
            record.deductions = deductions;
        }
        record
    }
}

impl<S: AsRef<str>> FromIterator<(S, Money)> for DeductionOverrides {
    fn from_iter<T: IntoIterator<Item = (S, Money)>>(iter: T) -> Self {
        let mut overrides = Self::new();
        for (employee_id, deductions) in iter {
            overrides.insert(employee_id, deductions);
        }
        overrides
    }
}
