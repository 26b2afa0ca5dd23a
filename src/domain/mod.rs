pub mod employee;
pub mod mail;
pub mod money;
pub mod outcome;
pub mod overrides;
pub mod payslip;
pub mod ports;
