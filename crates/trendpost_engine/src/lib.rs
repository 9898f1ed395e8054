//! Trendpost engine: the fetch → extract → enrich → render → deliver pipeline.
mod archive;
mod config;
mod deliver;
mod enrich;
mod extract;
mod fetch;
mod groq;
mod mail;
mod pipeline;
mod render;
mod types;

pub use archive::{ensure_output_dir, Archiver, PersistError};
pub use config::{Config, ConfigError};
pub use deliver::{Dispatcher, Transport, TransportError};
pub use enrich::{EnrichSettings, Enricher, SummarizeError, Summarizer, BATCH_FALLBACK};
pub use extract::{ExtractError, Extractor, TrendingExtractor, MAX_ITEMS};
pub use fetch::{FetchError, FetchFailure, FetchSettings, Fetcher, PageFetcher, TRENDING_URL};
pub use groq::GroqSummarizer;
pub use mail::{default_providers, SendmailMailer, SmtpMailer, SmtpProvider, TlsMode};
pub use pipeline::{report_subject, Pipeline};
pub use render::{escape_html, render_report};
pub use types::{Item, NO_DESCRIPTION, NO_LANGUAGE, NO_STARS};
