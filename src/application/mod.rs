//! Application layer: the per-record payroll flow.
//!
//! [`payroll::PayrollRun`] walks the roster in order, rendering each payslip
//! and handing it to the [`dispatcher::Dispatcher`] for delivery.

pub mod dispatcher;
pub mod payroll;
