use std::time::Duration;

use thiserror::Error;
use trendpost_logging::{pipeline_debug, pipeline_error};

use crate::types::Item;

/// Fallback insight text when batch summarization fails. The rendered
/// report always carries something in the insight slot.
pub const BATCH_FALLBACK: &str = "AI summary unavailable at the moment.";

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("summarizer network error: {0}")]
    Network(String),
    #[error("summarizer rejected the request: {0}")]
    Api(String),
    #[error("summarizer returned a malformed response: {0}")]
    Malformed(String),
}

/// Black-box text summarization capability.
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str, max_tokens: u32) -> Result<String, SummarizeError>;
}

#[derive(Debug, Clone)]
pub struct EnrichSettings {
    pub item_max_tokens: u32,
    pub batch_max_tokens: u32,
    /// Delay inserted after every per-item summarizer call to pace requests.
    pub pacing: Duration,
}

impl Default for EnrichSettings {
    fn default() -> Self {
        Self {
            item_max_tokens: 150,
            batch_max_tokens: 200,
            pacing: Duration::from_secs(1),
        }
    }
}

/// Attaches generated summaries to items and produces the batch insight.
///
/// Enrichment never fails the pipeline: a per-item failure leaves that
/// item's `summary` absent, a batch failure yields [`BATCH_FALLBACK`].
pub struct Enricher {
    summarizer: Box<dyn Summarizer>,
    settings: EnrichSettings,
}

impl Enricher {
    pub fn new(summarizer: Box<dyn Summarizer>, settings: EnrichSettings) -> Self {
        Self {
            summarizer,
            settings,
        }
    }

    /// Attempts to attach a summary to one item, then paces before the
    /// caller's next call.
    pub async fn enrich_item(&self, item: &mut Item) {
        let prompt = item_prompt(item);
        match self
            .summarizer
            .summarize(&prompt, self.settings.item_max_tokens)
            .await
        {
            Ok(summary) => {
                pipeline_debug!("Summary attached for {}", item.name);
                item.summary = Some(summary);
            }
            Err(err) => {
                pipeline_error!("Error getting summary for {}: {}", item.name, err);
            }
        }
        tokio::time::sleep(self.settings.pacing).await;
    }

    /// Summarizes the whole batch; always returns usable insight text.
    pub async fn summarize_batch(&self, items: &[Item]) -> String {
        let prompt = batch_prompt(items);
        match self
            .summarizer
            .summarize(&prompt, self.settings.batch_max_tokens)
            .await
        {
            Ok(summary) => summary,
            Err(err) => {
                pipeline_error!("Error getting batch summary: {err}");
                BATCH_FALLBACK.to_string()
            }
        }
    }
}

fn item_prompt(item: &Item) -> String {
    format!(
        "Analyze this GitHub repository and provide a comprehensive yet concise summary (2-3 sentences):\n\
         Name: {name}\n\
         Description: {description}\n\
         Language: {language}\n\
         Stars: {stars}\n\
         \n\
         Focus on:\n\
         1. Main purpose and unique features\n\
         2. Technical significance\n\
         3. Potential impact or use cases",
        name = item.name,
        description = item.description,
        language = item.language,
        stars = item.stars,
    )
}

fn batch_prompt(items: &[Item]) -> String {
    let listing = items
        .iter()
        .map(|item| {
            format!(
                "• {} ({}): {} [Stars: {}]",
                item.name, item.language, item.description, item.stars
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze these trending GitHub repositories and provide a very concise summary (max 3-4 sentences):\n\
         \n\
         {listing}\n\
         \n\
         Focus on:\n\
         1. Most notable project(s)\n\
         2. Common technologies/themes\n\
         3. Any significant trends"
    )
}
