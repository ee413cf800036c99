//! Email delivery of the weekly report.
//!
//! Credentials come from the environment (EMAIL_USER / EMAIL_PASSWORD);
//! the recipient comes from config. Delivery failure is the caller's to
//! log and never unwinds the already-written report.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub fn send_report(path: &Path, config: &crate::types::Config) -> Result<()> {
    let Some(recipient) = config.recipient.as_deref().filter(|r| !r.is_empty()) else {
        println!("No report recipient configured. Skipping email.");
        return Ok(());
    };

    let sender = env::var("EMAIL_USER").context("EMAIL_USER not set")?;
    let password = env::var("EMAIL_PASSWORD").context("EMAIL_PASSWORD not set")?;

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("report.csv")
        .to_string();
    let content = fs::read(path).with_context(|| format!("Failed to read report {:?}", path))?;

    let email = Message::builder()
        .from(sender.parse().context("Invalid sender address")?)
        .to(recipient.parse().context("Invalid recipient address")?)
        .subject("Weekly CSV Report")
        .multipart(
            MultiPart::mixed()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body("Please find attached the latest CSV file.".to_string()),
                )
                .singlepart(
                    Attachment::new(filename).body(content, ContentType::parse("text/csv")?),
                ),
        )?;

    let mailer = SmtpTransport::starttls_relay(&config.smtp_host)?
        .port(config.smtp_port)
        .credentials(Credentials::new(sender, password))
        .build();

    mailer.send(&email)?;
    println!("Email sent successfully!");
    Ok(())
}
