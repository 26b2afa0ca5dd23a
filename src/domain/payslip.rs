use super::employee::EmployeeRecord;
use super::money::Money;
use crate::error::{PayrollError, Result};

/// Net pay: basic pay plus allowance minus deductions.
///
/// There is no floor at zero; a negative net is returned as-is. Fails only when
/// the result does not fit in a `Decimal`.
pub fn net_pay(basic_pay: Money, allowance: Money, deductions: Money) -> Result<Money> {
    basic_pay
        .checked_add(allowance)
        .and_then(|gross| gross.checked_sub(deductions))
        .ok_or_else(|| {
            PayrollError::Calculation(format!(
                "net pay of {basic_pay} + {allowance} - {deductions} is out of range"
            ))
        })
}

/// A roster record together with its computed net pay.
#[derive(Debug, Clone, PartialEq)]
pub struct Payslip {
    pub record: EmployeeRecord,
    pub net: Money,
}

impl Payslip {
    pub fn new(record: EmployeeRecord) -> Result<Self> {
        let net = net_pay(record.basic_pay, record.allowance, record.deductions)?;
        Ok(Self { record, net })
    }

    pub fn employee_id(&self) -> &str {
        &self.record.employee_id
    }
}
