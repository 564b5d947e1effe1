//! Daily trigger: sleep until the configured HH:MM UTC, run, repeat.

use crate::config::config;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

/// Parse the configured trigger time. A malformed value is fatal at
/// process start, before the first sleep.
pub fn parse_trigger(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .with_context(|| format!("Invalid schedule time {:?}, expected HH:MM", value))
}

/// Next occurrence of `trigger` (UTC) strictly after `now`. At the exact
/// trigger instant the run is considered already started, so the next one
/// is tomorrow.
pub fn next_run(trigger: NaiveTime, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive().and_time(trigger).and_utc();
    if today > now {
        today
    } else {
        today + TimeDelta::days(1)
    }
}

/// Scheduled mode: one forecast pass per day at the configured time.
pub async fn run_daily() -> Result<()> {
    let trigger = parse_trigger(&config().schedule)?;

    loop {
        let now = Utc::now();
        let at = next_run(trigger, now);
        let wait = (at - now).to_std().unwrap_or_default();

        log::info!("Next forecast run at {}", at.format("%Y-%m-%d %H:%M UTC"));
        tokio::time::sleep(wait).await;

        if let Err(err) = crate::run::run_once().await {
            log::error!("Scheduled run failed: {:#}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_trigger() {
        assert_eq!(
            parse_trigger("06:30").unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_trigger_rejects_garbage() {
        assert!(parse_trigger("6h30").is_err());
        assert!(parse_trigger("25:00").is_err());
        assert!(parse_trigger("").is_err());
    }

    #[test]
    fn test_next_run_later_today() {
        let trigger = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 4, 0, 0).unwrap();

        assert_eq!(
            next_run(trigger, now),
            Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_next_run_already_past_rolls_to_tomorrow() {
        let trigger = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

        assert_eq!(
            next_run(trigger, now),
            Utc.with_ymd_and_hms(2024, 3, 2, 6, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_next_run_at_exact_trigger_rolls_to_tomorrow() {
        let trigger = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap();

        assert_eq!(
            next_run(trigger, now),
            Utc.with_ymd_and_hms(2024, 3, 2, 6, 30, 0).unwrap()
        );
    }
}
