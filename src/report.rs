//! Report assembly: classification rule, subject line and HTML body.

use crate::models::{Classification, LandingReport};

/// A landing site is positive when it is on land and within recovery range
/// of the base. The boundary is inclusive: exactly `max_distance_km` away
/// still counts.
pub fn classify(is_water: bool, distance_km: f64, max_distance_km: f64) -> Classification {
    if !is_water && distance_km <= max_distance_km {
        Classification::Positive
    } else {
        Classification::Negative
    }
}

/// Subject line; differs depending on whether any window is positive so
/// the verdict is readable from the inbox list.
pub fn subject(reports: &[LandingReport]) -> String {
    let positives = reports
        .iter()
        .filter(|r| r.classification == Classification::Positive)
        .count();

    if positives > 0 {
        format!(
            "Balloon landing forecast: {} recoverable landing site(s) predicted",
            positives
        )
    } else {
        "Balloon landing forecast: no recoverable landing site predicted".to_string()
    }
}

/// HTML body: one fragment per surviving window. Windows whose extraction
/// failed were never turned into a `LandingReport` and are simply absent.
pub fn render_html(reports: &[LandingReport]) -> String {
    let mut body = String::from(
        r#"<div style="font-family: sans-serif; max-width: 640px; margin: 0 auto; padding: 20px;">
            <h1 style="color: #1e293b; font-size: 24px; margin-bottom: 16px;">Balloon landing forecast</h1>"#,
    );

    if reports.is_empty() {
        body.push_str(
            r#"<p style="color: #475569;">No trajectory forecast could be retrieved for any window.</p>"#,
        );
    }

    for report in reports {
        body.push_str(&render_fragment(report));
    }

    body.push_str("</div>");
    body
}

fn render_fragment(report: &LandingReport) -> String {
    let verdict_color = match report.classification {
        Classification::Positive => "#15803d",
        Classification::Negative => "#b91c1c",
    };

    // Altitude is informational and may be NaN when its column failed to
    // parse; leave the line out rather than rendering "NaN m".
    let altitude_line = if report.point.altitude_m.is_nan() {
        String::new()
    } else {
        format!(
            r#"<p style="color: #475569; margin: 4px 0;">Final altitude: {:.0} m</p>"#,
            report.point.altitude_m
        )
    };

    format!(
        r#"<div style="border-top: 1px solid #e2e8f0; padding: 16px 0;">
            <h2 style="color: #0f172a; font-size: 18px; margin-bottom: 8px;">{label}</h2>
            <p style="color: #475569; margin: 4px 0;">Predicted landing:
                <a href="{map_link}">{lat:.4}, {lon:.4}</a></p>
            <p style="color: #475569; margin: 4px 0;">Distance from base: {distance:.1} km</p>
            {altitude_line}
            <p style="color: {verdict_color}; font-weight: bold; margin: 4px 0;">Result: {verdict}</p>
            <img src="{map_image}" alt="Map of predicted landing site" style="border-radius: 8px; max-width: 100%;">
        </div>"#,
        label = report.label,
        map_link = report.map_link,
        lat = report.point.lat,
        lon = report.point.lon,
        distance = report.distance_km,
        altitude_line = altitude_line,
        verdict_color = verdict_color,
        verdict = report.classification.label(),
        map_image = report.map_image_url,
    )
}
