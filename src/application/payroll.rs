use crate::application::dispatcher::Dispatcher;
use crate::config::DEFAULT_DELAY_MS;
use crate::domain::employee::EmployeeRecord;
use crate::domain::outcome::{DeliveryStatus, RecordOutcome, RunReport};
use crate::domain::overrides::DeductionOverrides;
use crate::domain::payslip::Payslip;
use crate::domain::ports::PayslipRendererBox;
use std::time::Duration;

/// Renders and emails a payslip for every record of a roster.
///
/// Records are handled strictly one after another in roster order. Each record
/// ends with an outcome whatever happens to it; a failure never stops the run.
/// A document that was rendered stays on disk even if its delivery fails.
pub struct PayrollRun {
    renderer: PayslipRendererBox,
    dispatcher: Dispatcher,
    overrides: DeductionOverrides,
    delay: Duration,
}

impl PayrollRun {
    /// Creates a run with no deduction overrides and the default pause between records.
    pub fn new(renderer: PayslipRendererBox, dispatcher: Dispatcher) -> Self {
        Self {
            renderer,
            dispatcher,
            overrides: DeductionOverrides::new(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    pub fn with_overrides(mut self, overrides: DeductionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Pause between two consecutive records, to go easy on the mail server.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn run(&self, roster: &[EmployeeRecord]) -> RunReport {
        let mut report = RunReport::default();

        for (index, record) in roster.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            report.push(self.process_record(record).await);
        }

        tracing::info!(
            employees = roster.len(),
            sent = report.sent(),
            skipped = report.skipped(),
            failed = report.failed(),
            "payroll run finished"
        );
        report
    }

    /// Override, calculate, render and dispatch a single record.
    pub async fn process_record(&self, record: &EmployeeRecord) -> RecordOutcome {
        let payslip = match Payslip::new(self.overrides.apply(record)) {
            Ok(payslip) => payslip,
            Err(e) => {
                tracing::error!(
                    employee_id = %record.employee_id,
                    name = %record.name,
                    error = %e,
                    "net pay calculation failed"
                );
                return RecordOutcome::new(
                    record,
                    None,
                    DeliveryStatus::Failed {
                        reason: e.to_string(),
                    },
                );
            }
        };

        let document = match self.renderer.render(&payslip) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(
                    employee_id = %record.employee_id,
                    name = %record.name,
                    error = %e,
                    "payslip rendering failed"
                );
                return RecordOutcome::new(
                    &payslip.record,
                    None,
                    DeliveryStatus::Failed {
                        reason: e.to_string(),
                    },
                );
            }
        };

        let status = self.dispatcher.dispatch(&payslip.record, &document).await;
        RecordOutcome::new(&payslip.record, Some(document), status)
    }
}
