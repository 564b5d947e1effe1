//! Balloon trajectory forecast source.
//!
//! Fetches trajectory predictions from the Wyoming balloon-trajectory CGI
//! and extracts the predicted landing point from the returned HTML. The
//! service renders its output as preformatted text blocks; the second
//! block holds whitespace-delimited trajectory rows and its last row is
//! the landing point.

use crate::models::{ForecastWindow, TrajectoryPoint};
use anyhow::{Context, Result};
use chrono::{DateTime, Days, NaiveDate, Utc};
use scraper::{Html, Selector};

/// Nominal daily launch hour (UTC) used in every trajectory request,
/// regardless of the actual launch schedule.
pub const LAUNCH_HOUR_UTC: u32 = 6;

/// Forecast offsets requested each run: today's launch, +24h, +48h.
const FORECAST_OFFSETS_H: [i64; 3] = [0, 24, 48];

/// Build the three lookup descriptors for a run starting at `now`.
///
/// The service encodes the window as a GFS forecast hour, which for this
/// endpoint is numerically equal to the offset.
pub fn forecast_windows(now: DateTime<Utc>) -> Vec<ForecastWindow> {
    FORECAST_OFFSETS_H
        .iter()
        .map(|&offset| {
            let target = now.date_naive() + Days::new((offset / 24) as u64);
            ForecastWindow {
                offset_hours: offset,
                code: offset as u32,
                label: format!("Launch +{}h ({})", offset, target.format("%Y-%m-%d")),
            }
        })
        .collect()
}

/// Trajectory source wrapping an HTTP client.
pub struct TrajectorySource {
    client: reqwest::Client,
}

impl TrajectorySource {
    /// Create a source. `accept_invalid_certs` disables TLS certificate
    /// verification for the trajectory service only, and is warn-logged.
    pub fn new(accept_invalid_certs: bool) -> Result<Self> {
        if accept_invalid_certs {
            log::warn!("TLS certificate verification is disabled for trajectory requests");
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Build the request URL for one forecast window.
    ///
    /// `TIME` is the launch timestamp as `YYYYMMDDHH` with the hour fixed
    /// to [`LAUNCH_HOUR_UTC`]; `FCST` is the window code.
    pub fn build_url(
        base: &str,
        launch_date: NaiveDate,
        window: &ForecastWindow,
        launch_lat: f64,
        launch_lon: f64,
        ceiling_m: f64,
    ) -> String {
        format!(
            "{}?TIME={}{:02}&FCST={}&LAT={}&LON={}&TOP={}&OUTPUT=list",
            base,
            launch_date.format("%Y%m%d"),
            LAUNCH_HOUR_UTC,
            window.code,
            launch_lat,
            launch_lon,
            ceiling_m,
        )
    }

    /// Fetch one forecast page and extract its landing point.
    ///
    /// Transport and HTTP-status failures are errors; an unexpected page
    /// shape is not, and surfaces as an invalid (NaN) point instead.
    pub async fn fetch_landing_point(&self, url: &str) -> Result<TrajectoryPoint> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to request trajectory forecast")?;

        match response.status() {
            reqwest::StatusCode::OK => {}
            status => {
                return Err(anyhow::anyhow!(
                    "Trajectory request failed with status: {}",
                    status
                ));
            }
        }

        let html = response
            .text()
            .await
            .context("Failed to read trajectory response body")?;

        Ok(extract_landing_point(&html))
    }
}

/// Extract the predicted landing point from a trajectory page.
///
/// Takes the second `<pre>` block, its last non-empty line, and reads the
/// second/third/fourth whitespace-delimited fields as latitude, longitude
/// and altitude. Missing blocks or unparsable fields yield NaN; callers
/// treat a NaN coordinate as "skip this window".
pub fn extract_landing_point(html: &str) -> TrajectoryPoint {
    let doc = Html::parse_document(html);
    let pre = Selector::parse("pre").expect("CSS selector should be valid");

    let blocks: Vec<_> = doc.select(&pre).collect();
    if blocks.len() < 2 {
        return TrajectoryPoint::invalid();
    }

    let text = blocks[1].text().collect::<String>();
    let last_row = match text.lines().rev().find(|line| !line.trim().is_empty()) {
        Some(line) => line,
        None => return TrajectoryPoint::invalid(),
    };

    let fields: Vec<&str> = last_row.split_whitespace().collect();
    let field = |index: usize| -> f64 {
        fields
            .get(index)
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    };

    TrajectoryPoint {
        lat: field(1),
        lon: field(2),
        altitude_m: field(3),
    }
}
