/// A file attached to an outgoing message.
#[derive(Debug, Clone, PartialEq)]
pub struct MailAttachment {
    /// Carried in the attachment's content-disposition.
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// One plain-text message with a single attachment, addressed to one recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment: MailAttachment,
}
