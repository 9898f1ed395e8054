//! Daily GitHub trending report mailer.
//!
//! Loads configuration, runs the report pipeline once at startup, then
//! fires it again at the configured local time every day until interrupted.

mod schedule;

use std::path::Path;

use trendpost_engine::{Config, Pipeline};
use trendpost_logging::{pipeline_error, pipeline_info};

const LOG_FILE: &str = "./trendpost.log";

#[tokio::main]
async fn main() {
    trendpost_logging::initialize(Path::new(LOG_FILE));

    // A missing .env file is fine; the environment may carry everything.
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            pipeline_error!("{err}");
            return;
        }
    };

    let pipeline = Pipeline::from_config(&config);
    pipeline_info!("GitHub Trending Mailer started. Press Ctrl+C to exit.");

    // One immediate run, then the daily schedule. Runs are awaited in this
    // single loop, so they never overlap.
    pipeline.run_once(&config.recipient).await;
    loop {
        schedule::wait_for_next_fire(config.fire_time).await;
        pipeline.run_once(&config.recipient).await;
    }
}
