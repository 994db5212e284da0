//! Mail delivery
//!
//! Sends the finished CSV as an SMTP attachment, once, after the crawl
//! completes. By then the file is already persisted, so a delivery failure
//! costs only the email.

use crate::error::{Error, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::path::Path;
use tracing::info;

/// SMTP settings for delivering the results file
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay hostname, e.g. `smtp.gmail.com`
    pub smtp_host: String,
    /// SMTP submission port
    pub smtp_port: u16,
    /// Login username
    pub username: String,
    /// Login password (an app password for most providers)
    pub password: String,
    /// Sender address
    pub sender: String,
    /// Recipient address
    pub recipient: String,
}

/// Email the results file as an attachment
pub fn send_results(config: &MailConfig, csv_path: &Path) -> Result<()> {
    let contents = std::fs::read(csv_path)?;
    let filename = csv_path
        .file_name()
        .map_or_else(|| "jobs.csv".to_string(), |n| n.to_string_lossy().into_owned());

    let sender: Mailbox = config
        .sender
        .parse()
        .map_err(|e| Error::mail(format!("invalid sender address: {e}")))?;
    let recipient: Mailbox = config
        .recipient
        .parse()
        .map_err(|e| Error::mail(format!("invalid recipient address: {e}")))?;

    let csv_type =
        ContentType::parse("text/csv").map_err(|e| Error::mail(format!("content type: {e}")))?;
    let attachment = Attachment::new(filename).body(contents, csv_type);

    let email = Message::builder()
        .from(sender)
        .to(recipient)
        .subject("Updated jobs file")
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(
                    "The updated job listings are attached.".to_string(),
                ))
                .singlepart(attachment),
        )
        .map_err(|e| Error::mail(format!("failed to build message: {e}")))?;

    let mailer = SmtpTransport::starttls_relay(&config.smtp_host)
        .map_err(|e| Error::mail(format!("relay setup failed: {e}")))?
        .port(config.smtp_port)
        .credentials(Credentials::new(
            config.username.clone(),
            config.password.clone(),
        ))
        .build();

    mailer
        .send(&email)
        .map_err(|e| Error::mail(format!("send failed: {e}")))?;

    info!(recipient = %config.recipient, "results file emailed");
    Ok(())
}
