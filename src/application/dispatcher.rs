use crate::domain::employee::EmployeeRecord;
use crate::domain::mail::{MailAttachment, OutgoingMail};
use crate::domain::outcome::DeliveryStatus;
use crate::domain::ports::MailerBox;
use std::path::Path;

pub const SUBJECT: &str = "Your Monthly Payslip";
pub const BODY: &str = "Hi there,\n\nPlease find your payslip attached.\n\nRegards,\nPayroll Team";
pub const ATTACHMENT_CONTENT_TYPE: &str = "application/pdf";

/// Emails rendered payslips to their employees, one message per record.
///
/// Never returns an error: every problem is folded into the
/// [`DeliveryStatus`] for that record so the caller can move on.
pub struct Dispatcher {
    mailer: MailerBox,
}

impl Dispatcher {
    pub fn new(mailer: MailerBox) -> Self {
        Self { mailer }
    }

    pub async fn dispatch(&self, record: &EmployeeRecord, document: &Path) -> DeliveryStatus {
        let status = self.try_dispatch(record, document).await;

        match &status {
            DeliveryStatus::Sent => tracing::info!(
                employee_id = %record.employee_id,
                name = %record.name,
                email = %record.email,
                "payslip sent"
            ),
            DeliveryStatus::Skipped { reason } => tracing::warn!(
                employee_id = %record.employee_id,
                name = %record.name,
                email = %record.email,
                %reason,
                "payslip skipped"
            ),
            DeliveryStatus::Failed { reason } => tracing::error!(
                employee_id = %record.employee_id,
                name = %record.name,
                email = %record.email,
                %reason,
                "payslip delivery failed"
            ),
        }
        status
    }

    async fn try_dispatch(&self, record: &EmployeeRecord, document: &Path) -> DeliveryStatus {
        match tokio::fs::try_exists(document).await {
            Ok(true) => {}
            Ok(false) => {
                return DeliveryStatus::Skipped {
                    reason: format!("payslip not found at {}", document.display()),
                };
            }
            Err(e) => {
                return DeliveryStatus::Failed {
                    reason: format!("cannot access {}: {e}", document.display()),
                };
            }
        }

        if !record.has_email() {
            return DeliveryStatus::Failed {
                reason: "no email address recorded".to_string(),
            };
        }

        let content = match tokio::fs::read(document).await {
            Ok(content) => content,
            Err(e) => {
                return DeliveryStatus::Failed {
                    reason: format!("cannot read {}: {e}", document.display()),
                };
            }
        };

        let filename = document
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}_payslip.pdf", record.employee_id));

        let mail = OutgoingMail {
            to: record.email.trim().to_string(),
            subject: SUBJECT.to_string(),
            body: BODY.to_string(),
            attachment: MailAttachment {
                filename,
                content_type: ATTACHMENT_CONTENT_TYPE.to_string(),
                content,
            },
        };

        match self.mailer.send(mail).await {
            Ok(()) => DeliveryStatus::Sent,
            Err(e) => DeliveryStatus::Failed { reason: e.to_string() },
        }
    }
}
