use super::mail::OutgoingMail;
use super::payslip::Payslip;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Turns a payslip into a document on disk and returns where it was written.
pub trait PayslipRenderer: Send + Sync {
    fn render(&self, payslip: &Payslip) -> Result<PathBuf>;
}

/// Delivers one message. The sender identity belongs to the implementation.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<()>;
}

pub type PayslipRendererBox = Box<dyn PayslipRenderer>;
pub type MailerBox = Box<dyn Mailer>;
