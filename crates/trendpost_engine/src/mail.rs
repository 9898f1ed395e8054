use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSendmailTransport, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use trendpost_logging::{pipeline_info, pipeline_warn};

use crate::deliver::{Transport, TransportError};

const SENDER_DISPLAY_NAME: &str = "GitHub Trends";

/// Submits the report through the local sendmail client.
pub struct SendmailMailer {
    sender: String,
}

impl SendmailMailer {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for SendmailMailer {
    fn name(&self) -> &str {
        "local sendmail"
    }

    async fn attempt_send(
        &self,
        recipient: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), TransportError> {
        let message = build_message(&self.sender, recipient, subject, html)?;
        let transport = AsyncSendmailTransport::<Tokio1Executor>::new();
        transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|err| TransportError::Send(err.to_string()))
    }
}

/// Transport security mode of one SMTP submission endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS-wrapped connection from the first byte (conventionally port 465).
    Implicit,
    /// Plaintext connection upgraded with STARTTLS (conventionally port 587).
    StartTls,
}

#[derive(Debug, Clone)]
pub struct SmtpProvider {
    pub name: &'static str,
    pub host: &'static str,
    pub port: u16,
    pub tls: TlsMode,
}

/// Submission endpoints tried in order by [`SmtpMailer`].
pub fn default_providers() -> Vec<SmtpProvider> {
    vec![
        SmtpProvider {
            name: "Gmail",
            host: "smtp.gmail.com",
            port: 465,
            tls: TlsMode::Implicit,
        },
        SmtpProvider {
            name: "Outlook",
            host: "smtp-mail.outlook.com",
            port: 587,
            tls: TlsMode::StartTls,
        },
    ]
}

/// Submits the report over SMTP, trying provider configurations in order.
/// A provider failure is logged with its name and the next one is tried.
pub struct SmtpMailer {
    sender: String,
    password: String,
    providers: Vec<SmtpProvider>,
}

impl SmtpMailer {
    pub fn new(sender: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            password: password.into(),
            providers: default_providers(),
        }
    }

    pub fn with_providers(mut self, providers: Vec<SmtpProvider>) -> Self {
        self.providers = providers;
        self
    }

    fn build_transport(
        &self,
        provider: &SmtpProvider,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, TransportError> {
        let credentials = Credentials::new(self.sender.clone(), self.password.clone());
        let builder = match provider.tls {
            TlsMode::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(provider.host),
            TlsMode::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(provider.host)
            }
        }
        .map_err(|err| TransportError::Send(err.to_string()))?;

        Ok(builder
            .port(provider.port)
            .credentials(credentials)
            .build())
    }
}

#[async_trait::async_trait]
impl Transport for SmtpMailer {
    fn name(&self) -> &str {
        "SMTP"
    }

    async fn attempt_send(
        &self,
        recipient: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), TransportError> {
        let message = build_message(&self.sender, recipient, subject, html)?;

        for provider in &self.providers {
            pipeline_info!("Attempting to send email using {}...", provider.name);
            let transport = match self.build_transport(provider) {
                Ok(transport) => transport,
                Err(err) => {
                    pipeline_warn!("Error with {}: {err}", provider.name);
                    continue;
                }
            };
            match transport.send(message.clone()).await {
                Ok(_) => {
                    pipeline_info!("Email sent successfully via {}!", provider.name);
                    return Ok(());
                }
                Err(err) => {
                    pipeline_warn!("Error with {}: {err}", provider.name);
                }
            }
        }

        Err(TransportError::Send(
            "all SMTP providers rejected the submission".to_string(),
        ))
    }
}

fn build_message(
    sender: &str,
    recipient: &str,
    subject: &str,
    html: &str,
) -> Result<Message, TransportError> {
    let from: Mailbox = format!("{SENDER_DISPLAY_NAME} <{sender}>")
        .parse()
        .map_err(|err| TransportError::Message(format!("invalid sender address: {err}")))?;
    let to: Mailbox = recipient
        .parse()
        .map_err(|err| TransportError::Message(format!("invalid recipient address: {err}")))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(html.to_string())
        .map_err(|err| TransportError::Message(err.to_string()))
}
