use chrono::{DateTime, Local};
use trendpost_logging::{pipeline_error, pipeline_info, pipeline_warn};

use crate::archive::Archiver;
use crate::config::Config;
use crate::deliver::{Dispatcher, Transport};
use crate::enrich::{EnrichSettings, Enricher};
use crate::extract::{Extractor, TrendingExtractor};
use crate::fetch::{FetchSettings, Fetcher, PageFetcher, TRENDING_URL};
use crate::groq::GroqSummarizer;
use crate::mail::{SendmailMailer, SmtpMailer};
use crate::render::render_report;

/// One run of the whole pipeline: fetch, extract, enrich, render, archive,
/// deliver. All component failures are caught and logged here; only a fetch
/// or extract failure aborts the run.
pub struct Pipeline {
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn Extractor>,
    enricher: Enricher,
    archiver: Archiver,
    dispatcher: Dispatcher,
    source_url: String,
}

impl Pipeline {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        extractor: Box<dyn Extractor>,
        enricher: Enricher,
        archiver: Archiver,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            enricher,
            archiver,
            dispatcher,
            source_url: TRENDING_URL.to_string(),
        }
    }

    /// Wires the production components from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let summarizer = GroqSummarizer::new(config.groq_api_key.clone());
        let enrich_settings = EnrichSettings {
            pacing: config.enrich_pacing,
            ..EnrichSettings::default()
        };
        let transports: Vec<Box<dyn Transport>> = vec![
            Box::new(SendmailMailer::new(config.email_user.clone())),
            Box::new(SmtpMailer::new(
                config.email_user.clone(),
                config.email_password.clone(),
            )),
        ];

        Self::new(
            Box::new(PageFetcher::new(FetchSettings::default())),
            Box::new(TrendingExtractor),
            Enricher::new(Box::new(summarizer), enrich_settings),
            Archiver::new(config.output_dir.clone()),
            Dispatcher::new(transports),
        )
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Executes one run. Never propagates an error; the run's outcome is
    /// visible through the logs and the archived artifact.
    pub async fn run_once(&self, recipient: &str) {
        pipeline_info!("Starting GitHub trending report run");

        let page = match self.fetcher.fetch(&self.source_url).await {
            Ok(page) => page,
            Err(err) => {
                pipeline_error!("Error fetching trending page: {err}");
                return;
            }
        };

        let mut items = match self.extractor.extract(&page) {
            Ok(items) => items,
            Err(err) => {
                pipeline_error!("Error extracting trending entries: {err}");
                return;
            }
        };
        pipeline_info!("Extracted {} trending entries", items.len());

        for item in &mut items {
            self.enricher.enrich_item(item).await;
        }
        let batch_summary = self.enricher.summarize_batch(&items).await;

        let now = Local::now();
        let report = render_report(&items, Some(&batch_summary), now);

        let artifact = match self.archiver.archive(&report, now.date_naive()) {
            Ok(path) => {
                pipeline_info!("Report archived at: {}", path.display());
                Some(path)
            }
            Err(err) => {
                // Delivery still gets its chance with the in-memory report.
                pipeline_error!("Error archiving report: {err}");
                None
            }
        };

        let subject = report_subject(now);
        let delivered = self
            .dispatcher
            .deliver(recipient, &subject, &report, artifact.as_deref())
            .await;

        if delivered {
            pipeline_info!("Run completed successfully");
        } else {
            pipeline_warn!("Run completed without delivery");
        }
    }
}

pub fn report_subject(at: DateTime<Local>) -> String {
    format!("📊 GitHub Trending Report - {}", at.format("%B %d, %Y"))
}
