use std::env;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveTime;
use thiserror::Error;

const REQUIRED_VARS: [&str; 3] = ["GROQ_API_KEY", "EMAIL_USER", "EMAIL_PASSWORD"];

const DEFAULT_OUTPUT_DIR: &str = "summaries";
const DEFAULT_FIRE_TIME: &str = "09:00";
const DEFAULT_PACING_SECS: u64 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: &'static str, message: String },
}

/// Process configuration, loaded once at startup and passed by reference.
///
/// Required: `GROQ_API_KEY`, `EMAIL_USER`, `EMAIL_PASSWORD`. Optional with
/// defaults: `RECIPIENT_EMAIL` (defaults to the sender), `SUMMARIES_DIR`,
/// `DAILY_FIRE_TIME` (`HH:MM` local), `ENRICH_PACING_SECS`.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub email_user: String,
    pub email_password: String,
    pub recipient: String,
    pub output_dir: PathBuf,
    pub fire_time: NaiveTime,
    pub enrich_pacing: Duration,
}

impl Config {
    /// Reads configuration from the environment. Every missing required
    /// variable is collected so the startup error names all of them.
    pub fn from_env() -> Result<Self, ConfigError> {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| env::var(name).map(|v| v.is_empty()).unwrap_or(true))
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv(missing.join(", ")));
        }

        let groq_api_key = env::var("GROQ_API_KEY").unwrap_or_default();
        let email_user = env::var("EMAIL_USER").unwrap_or_default();
        let email_password = env::var("EMAIL_PASSWORD").unwrap_or_default();

        let recipient = env::var("RECIPIENT_EMAIL").unwrap_or_else(|_| email_user.clone());
        let output_dir = env::var("SUMMARIES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let fire_time_raw =
            env::var("DAILY_FIRE_TIME").unwrap_or_else(|_| DEFAULT_FIRE_TIME.to_string());
        let fire_time = NaiveTime::parse_from_str(&fire_time_raw, "%H:%M").map_err(|err| {
            ConfigError::InvalidValue {
                name: "DAILY_FIRE_TIME",
                message: err.to_string(),
            }
        })?;

        let enrich_pacing = match env::var("ENRICH_PACING_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|err| {
                ConfigError::InvalidValue {
                    name: "ENRICH_PACING_SECS",
                    message: err.to_string(),
                }
            })?),
            Err(_) => Duration::from_secs(DEFAULT_PACING_SECS),
        };

        Ok(Self {
            groq_api_key,
            email_user,
            email_password,
            recipient,
            output_dir,
            fire_time,
            enrich_pacing,
        })
    }
}
