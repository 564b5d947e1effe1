use anyhow::Result;
use serde::Serialize;

use crate::config::config;

#[derive(Serialize)]
struct ResendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

/// Send the forecast report to the configured recipients using the Resend
/// API. Fire-and-forget: the caller logs failures and does not retry.
pub async fn send_report(client: &reqwest::Client, subject: &str, html: &str) -> Result<()> {
    let cfg = config();

    // In dev mode without API key, just log the report
    if cfg.resend_api_key.is_empty() {
        log::info!(
            "DEV MODE: would send \"{}\" to {}",
            subject,
            cfg.recipients
        );
        log::debug!("Report body:\n{}", html);
        return Ok(());
    }

    let request = ResendEmailRequest {
        from: cfg.email_from.clone(),
        to: cfg.recipient_list(),
        subject: subject.to_string(),
        html: html.to_string(),
    };

    let response = client
        .post("https://api.resend.com/emails")
        .header("Authorization", format!("Bearer {}", cfg.resend_api_key))
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let error_text = response.text().await.unwrap_or_default();
        anyhow::bail!("Failed to send email: {}", error_text);
    }

    log::info!("Forecast report sent to {}", cfg.recipients);
    Ok(())
}
