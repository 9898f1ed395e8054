//! Wall-clock trigger for the daily run.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveTime};

/// How often the waiting loop re-checks the clock.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Time remaining until the next local occurrence of `fire_time`.
///
/// A fire time that already passed today rolls over to tomorrow.
pub fn until_next_fire(now: DateTime<Local>, fire_time: NaiveTime) -> Duration {
    let now_naive = now.naive_local();
    let mut target = now_naive.date().and_time(fire_time);
    if target <= now_naive {
        target += chrono::Duration::days(1);
    }
    (target - now_naive).to_std().unwrap_or(Duration::ZERO)
}

/// Sleeps in [`POLL_INTERVAL`] slices until the next fire instant.
pub async fn wait_for_next_fire(fire_time: NaiveTime) {
    loop {
        let remaining = until_next_fire(Local::now(), fire_time);
        if remaining.is_zero() {
            return;
        }
        tokio::time::sleep(remaining.min(POLL_INTERVAL)).await;
        if remaining <= POLL_INTERVAL {
            return;
        }
    }
}
