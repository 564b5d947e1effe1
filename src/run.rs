//! The single linear pass: three forecast windows, fetched sequentially,
//! folded into one emailed report.

use crate::config::config;
use crate::forecast::{forecast_windows, TrajectorySource};
use crate::models::LandingReport;
use crate::{email, geo, maps, report, water};
use anyhow::Result;
use chrono::Utc;

pub async fn run_once() -> Result<()> {
    let cfg = config();
    let source = TrajectorySource::new(cfg.accept_invalid_certs)?;
    let client = reqwest::Client::new();

    let now = Utc::now();
    let launch_date = now.date_naive();
    let mut reports = Vec::new();

    for window in forecast_windows(now) {
        let url = TrajectorySource::build_url(
            &cfg.trajectory_url,
            launch_date,
            &window,
            cfg.launch_lat,
            cfg.launch_lon,
            cfg.ceiling_m,
        );

        log::debug!(
            "Requesting {} (offset {}h): {}",
            window.label,
            window.offset_hours,
            url
        );

        let point = match source.fetch_landing_point(&url).await {
            Ok(point) => point,
            Err(err) => {
                log::warn!("Forecast fetch failed for {}: {:#}", window.label, err);
                continue;
            }
        };

        if !point.is_valid() {
            log::warn!("No landing point could be extracted for {}", window.label);
            continue;
        }

        let distance_km = geo::haversine_km(cfg.base_lat, cfg.base_lon, point.lat, point.lon);
        let is_water = water::is_water(&client, &cfg.onwater_token, point.lat, point.lon).await;
        let classification = report::classify(is_water, distance_km, cfg.max_distance_km);

        log::info!(
            "{}: landing ({:.4}, {:.4}), {:.1} km from base, {}",
            window.label,
            point.lat,
            point.lon,
            distance_km,
            classification.label()
        );

        reports.push(LandingReport {
            label: window.label,
            map_link: maps::map_link(point.lat, point.lon),
            map_image_url: maps::static_map_url(&cfg.mapbox_token, point.lat, point.lon),
            point,
            distance_km,
            classification,
        });
    }

    let subject = report::subject(&reports);
    let html = report::render_html(&reports);

    if let Err(err) = email::send_report(&client, &subject, &html).await {
        log::error!("Failed to send forecast report: {:#}", err);
    }

    Ok(())
}
