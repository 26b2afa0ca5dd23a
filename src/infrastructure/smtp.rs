use crate::config::SmtpSettings;
use crate::domain::mail::OutgoingMail;
use crate::domain::ports::Mailer;
use crate::error::{PayrollError, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Sends mail through an authenticated SMTP submission server using STARTTLS.
///
/// The sender mailbox and credentials are fixed when the mailer is built.
/// Building does not connect; the first connection happens on the first send.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| PayrollError::Config(format!("SMTP_HOST {:?}: {e}", settings.host)))?
            .port(settings.port)
            .timeout(Some(settings.timeout))
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: settings.from.clone(),
        })
    }
}

/// Builds the MIME message: a plain-text part followed by the attachment.
pub fn build_message(from: &Mailbox, mail: &OutgoingMail) -> Result<Message> {
    let to: Mailbox = mail
        .to
        .parse()
        .map_err(|e| PayrollError::Mail(format!("invalid recipient address {:?}: {e}", mail.to)))?;
    let content_type = ContentType::parse(&mail.attachment.content_type)
        .map_err(|e| PayrollError::Mail(format!("invalid attachment content type: {e}")))?;

    let attachment = Attachment::new(mail.attachment.filename.clone())
        .body(mail.attachment.content.clone(), content_type);

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(mail.subject.clone())
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(mail.body.clone()))
                .singlepart(attachment),
        )
        .map_err(|e| PayrollError::Mail(format!("failed to build message: {e}")))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<()> {
        let message = build_message(&self.from, &mail)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| PayrollError::Mail(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mail::MailAttachment;

    fn mail(to: &str) -> OutgoingMail {
        OutgoingMail {
            to: to.to_string(),
            subject: "Your Monthly Payslip".to_string(),
            body: "Hi there,\n\nPlease find your payslip attached.".to_string(),
            attachment: MailAttachment {
                filename: "A001_payslip.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                content: b"%PDF-1.3 fake".to_vec(),
            },
        }
    }

    #[test]
    fn test_build_message_carries_attachment_name() {
        let from: Mailbox = "Payroll <payroll@example.com>".parse().unwrap();
        let message = build_message(&from, &mail("a@x.com")).unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).into_owned();

        assert!(raw.contains("To: a@x.com"));
        assert!(raw.contains("Subject: Your Monthly Payslip"));
        assert!(raw.contains("Content-Disposition: attachment"));
        assert!(raw.contains("A001_payslip.pdf"));
        assert!(raw.contains("application/pdf"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let from: Mailbox = "payroll@example.com".parse().unwrap();
        let err = build_message(&from, &mail("not-an-address")).unwrap_err();
        assert!(matches!(err, PayrollError::Mail(_)));
    }
}
