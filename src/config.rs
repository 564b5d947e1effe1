use once_cell::sync::Lazy;
use serde::Deserialize;

/// University of Wyoming balloon trajectory CGI endpoint.
fn default_trajectory_url() -> String {
    "https://weather.uwyo.edu/cgi-bin/balloon_traj".to_string()
}

/// Daily trigger time, HH:MM UTC.
fn default_schedule() -> String {
    "06:30".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub launch_lat: f64,
    pub launch_lon: f64,
    /// Balloon ceiling altitude in meters, sent to the trajectory service.
    pub ceiling_m: f64,
    /// Recovery base, the reference point for the distance check.
    pub base_lat: f64,
    pub base_lon: f64,
    pub max_distance_km: f64,
    /// Comma-separated report recipients.
    pub recipients: String,
    pub email_from: String,
    #[serde(default)]
    pub resend_api_key: String,
    #[serde(default)]
    pub onwater_token: String,
    pub mapbox_token: String,
    #[serde(default = "default_trajectory_url")]
    pub trajectory_url: String,
    /// Skip TLS certificate verification on trajectory requests. The
    /// upstream service serves a certificate we cannot always validate;
    /// opting in is explicit and warn-logged.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

impl Config {
    pub fn recipient_list(&self) -> Vec<String> {
        self.recipients
            .split(',')
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect()
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    envy::prefixed("LANDFALL_")
        .from_env::<Config>()
        .expect("Missing landfall config. Required env vars: LANDFALL_LAUNCH_LAT, LANDFALL_LAUNCH_LON, LANDFALL_CEILING_M, LANDFALL_BASE_LAT, LANDFALL_BASE_LON, LANDFALL_MAX_DISTANCE_KM, LANDFALL_RECIPIENTS, LANDFALL_EMAIL_FROM, LANDFALL_MAPBOX_TOKEN")
});

pub fn config() -> &'static Config {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_list_splits_and_trims() {
        let cfg = Config {
            launch_lat: 0.0,
            launch_lon: 0.0,
            ceiling_m: 30000.0,
            base_lat: 0.0,
            base_lon: 0.0,
            max_distance_km: 100.0,
            recipients: "a@example.com, b@example.com ,,c@example.com".to_string(),
            email_from: "landfall@example.com".to_string(),
            resend_api_key: String::new(),
            onwater_token: String::new(),
            mapbox_token: String::new(),
            trajectory_url: default_trajectory_url(),
            accept_invalid_certs: false,
            schedule: default_schedule(),
        };

        assert_eq!(
            cfg.recipient_list(),
            vec!["a@example.com", "b@example.com", "c@example.com"]
        );
    }
}
