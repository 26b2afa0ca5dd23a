use super::employee::EmployeeRecord;
use serde::Serialize;
use std::path::PathBuf;

/// What happened to one record's payslip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Skipped { reason: String },
    Failed { reason: String },
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Skipped { .. } => "skipped",
            DeliveryStatus::Failed { .. } => "failed",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DeliveryStatus::Sent => "",
            DeliveryStatus::Skipped { reason } | DeliveryStatus::Failed { reason } => reason,
        }
    }
}

/// The final state of one roster record after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    /// Set when rendering succeeded, whether or not the mail went out.
    pub document: Option<PathBuf>,
    pub status: DeliveryStatus,
}

impl RecordOutcome {
    pub fn new(record: &EmployeeRecord, document: Option<PathBuf>, status: DeliveryStatus) -> Self {
        Self {
            employee_id: record.employee_id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            document,
            status,
        }
    }
}

/// Flat view of a [`RecordOutcome`] used for the CSV report.
#[derive(Debug, Serialize)]
pub struct OutcomeRow<'a> {
    pub employee_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub status: &'a str,
    pub detail: &'a str,
}

impl<'a> From<&'a RecordOutcome> for OutcomeRow<'a> {
    fn from(outcome: &'a RecordOutcome) -> Self {
        Self {
            employee_id: &outcome.employee_id,
            name: &outcome.name,
            email: &outcome.email,
            status: outcome.status.label(),
            detail: outcome.status.detail(),
        }
    }
}

/// Outcomes of every record in roster order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub outcomes: Vec<RecordOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: RecordOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn sent(&self) -> usize {
        self.count(|s| matches!(s, DeliveryStatus::Sent))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, DeliveryStatus::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, DeliveryStatus::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&DeliveryStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.status)).count()
    }
}
