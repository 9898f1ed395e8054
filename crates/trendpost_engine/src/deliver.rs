use std::path::Path;

use thiserror::Error;
use trendpost_logging::{pipeline_info, pipeline_warn};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not build message: {0}")]
    Message(String),
    #[error("send failed: {0}")]
    Send(String),
}

/// One delivery mechanism capable of sending the rendered report.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    fn name(&self) -> &str;

    async fn attempt_send(
        &self,
        recipient: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), TransportError>;
}

/// Tries transports in priority order and stops at the first success.
///
/// Never errors: exhausting every transport yields `false` plus remediation
/// log lines, so the caller can log and continue.
pub struct Dispatcher {
    transports: Vec<Box<dyn Transport>>,
}

impl Dispatcher {
    pub fn new(transports: Vec<Box<dyn Transport>>) -> Self {
        Self { transports }
    }

    pub async fn deliver(
        &self,
        recipient: &str,
        subject: &str,
        html: &str,
        artifact: Option<&Path>,
    ) -> bool {
        for transport in &self.transports {
            match transport.attempt_send(recipient, subject, html).await {
                Ok(()) => {
                    pipeline_info!("Report sent successfully via {}!", transport.name());
                    return true;
                }
                Err(err) => {
                    pipeline_warn!("Error sending via {}: {err}", transport.name());
                }
            }
        }

        pipeline_warn!("All delivery methods failed");
        pipeline_info!("To fix delivery issues:");
        pipeline_info!("1. Check if a local mail client is properly configured");
        pipeline_info!("2. Verify your email credentials in the .env file");
        pipeline_info!("3. Check if your antivirus or firewall is blocking email");
        if let Some(path) = artifact {
            pipeline_info!("Report is still saved at: {}", path.display());
        }
        false
    }
}
