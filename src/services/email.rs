//! Email service for sending quotes and invoices to clients

use lettre::{
    message::{header::ContentType, Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};
use std::str::FromStr;

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
    format::format_currency,
    models::document::Document,
    models::enums::DocumentType,
};

#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send a rendered document to the client
    pub async fn send_document(&self, to: &str, document: &Document, html: &str) -> AppResult<()> {
        let company = &document.company_details.name;

        let (subject, body) = match document.doc_type {
            DocumentType::Quote => (
                format!("Votre devis {}", document.number),
                format!(
                    r#"Bonjour {name},

Veuillez trouver ci-joint votre devis {number} d'un montant de {total}.

Ce devis est valable 30 jours.

Cordialement,
{company}
"#,
                    name = document.client_details.name,
                    number = document.number,
                    total = format_currency(document.total_amount),
                    company = company,
                ),
            ),
            DocumentType::Invoice => (
                format!("Votre facture {}", document.number),
                format!(
                    r#"Bonjour {name},

Veuillez trouver ci-joint votre facture {number} d'un montant de {total}.

Cordialement,
{company}
"#,
                    name = document.client_details.name,
                    number = document.number,
                    total = format_currency(document.total_amount),
                    company = company,
                ),
            ),
        };

        self.send_email(to, &subject, &body, html).await
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str, html: &str) -> AppResult<()> {
        let from_name = self
            .config
            .smtp_from_name
            .as_deref()
            .unwrap_or("Raiatea Rental");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.smtp_from))
            .map_err(|e| AppError::Internal(format!("Invalid from address: {}", e)))?;

        let to_mailbox = Mailbox::from_str(to)
            .map_err(|e| AppError::Validation(format!("Invalid recipient address: {}", e)))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html.to_string()),
                    ),
            )
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))?;

        let mailer_builder = if self.config.smtp_use_tls {
            SmtpTransport::starttls_relay(&self.config.smtp_host)
                .map_err(|e| AppError::Internal(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
        }
        .port(self.config.smtp_port);

        let mailer_builder = if let (Some(username), Some(password)) = (
            &self.config.smtp_username,
            &self.config.smtp_password,
        ) {
            mailer_builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            mailer_builder
        };

        let mailer = mailer_builder.build();

        mailer
            .send(&email)
            .map_err(|e| AppError::Internal(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
