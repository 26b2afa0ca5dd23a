use crate::domain::mail::OutgoingMail;
use crate::domain::ports::Mailer;
use crate::error::{PayrollError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A mailer that keeps messages in memory instead of delivering them.
///
/// Backs `--dry-run`. Recipients registered with [`InMemoryMailer::fail_for`]
/// are rejected with the given reason, which lets a run be exercised against
/// authentication or delivery failures without a mail server.
#[derive(Default, Clone)]
pub struct InMemoryMailer {
    outbox: Arc<RwLock<Vec<OutgoingMail>>>,
    failures: HashMap<String, String>,
}

impl InMemoryMailer {
    /// Creates a mailer with an empty outbox that accepts every recipient.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_for(mut self, recipient: impl Into<String>, reason: impl Into<String>) -> Self {
        self.failures.insert(recipient.into(), reason.into());
        self
    }

    /// Messages accepted so far, in send order.
    pub async fn outbox(&self) -> Vec<OutgoingMail> {
        self.outbox.read().await.clone()
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<()> {
        if let Some(reason) = self.failures.get(&mail.to) {
            return Err(PayrollError::Mail(reason.clone()));
        }
        tracing::debug!(to = %mail.to, attachment = %mail.attachment.filename, "message kept in memory");
        self.outbox.write().await.push(mail);
        Ok(())
    }
}
