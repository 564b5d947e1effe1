//! Water/land classification via the OnWater API.

use anyhow::{Context, Result};
use serde::Deserialize;

const ONWATER_BASE_URL: &str = "https://api.onwater.io/api/v1/results";

#[derive(Debug, Deserialize)]
struct WaterResponse {
    water: bool,
}

/// Classify a coordinate as water or land.
///
/// Fails open: on any transport or decode error the point is reported as
/// land, so a classification outage flags the site for human review
/// instead of silently dropping it.
pub async fn is_water(client: &reqwest::Client, token: &str, lat: f64, lon: f64) -> bool {
    let url = format!("{}/{},{}?access_token={}", ONWATER_BASE_URL, lat, lon, token);

    match fetch_classification(client, &url).await {
        Ok(water) => water,
        Err(err) => {
            log::warn!(
                "Water classification failed for ({}, {}), assuming land: {:#}",
                lat,
                lon,
                err
            );
            false
        }
    }
}

async fn fetch_classification(client: &reqwest::Client, url: &str) -> Result<bool> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to request water classification")?;

    if !response.status().is_success() {
        anyhow::bail!(
            "Water classification failed with status: {}",
            response.status()
        );
    }

    let body = response
        .text()
        .await
        .context("Failed to read water classification body")?;

    parse_response(&body)
}

fn parse_response(body: &str) -> Result<bool> {
    let parsed: WaterResponse =
        serde_json::from_str(body).context("Failed to decode water classification response")?;
    Ok(parsed.water)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_water_true() {
        let body = r#"{"query": "35.5,-80.2", "water": true, "lat": 35.5, "lon": -80.2}"#;
        assert!(parse_response(body).unwrap());
    }

    #[test]
    fn test_parse_water_false() {
        let body = r#"{"water": false}"#;
        assert!(!parse_response(body).unwrap());
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(parse_response("<html>rate limited</html>").is_err());
    }

    #[test]
    fn test_parse_missing_field_is_error() {
        assert!(parse_response(r#"{"status": "ok"}"#).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        // Nothing listens on port 9; the connection is refused immediately.
        let client = reqwest::Client::new();
        let result = fetch_classification(&client, "http://127.0.0.1:9/results/1,1").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_classification_failure_yields_land() {
        // Route every request through a dead local proxy so the lookup
        // fails deterministically without touching the network.
        let client = reqwest::Client::builder()
            .proxy(reqwest::Proxy::all("http://127.0.0.1:9").unwrap())
            .build()
            .unwrap();

        assert!(!is_water(&client, "token", 35.5, -80.2).await);
    }
}
