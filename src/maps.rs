//! Map URL construction for the report. No runtime calls; the static
//! image is fetched by the recipient's mail client.

const OSM_ZOOM: u32 = 11;

const STATIC_ZOOM: u32 = 10;
const STATIC_WIDTH: u32 = 600;
const STATIC_HEIGHT: u32 = 400;

/// Interactive map link with a marker on the predicted landing point.
pub fn map_link(lat: f64, lon: f64) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={}&mlon={}#map={}/{}/{}",
        lat, lon, OSM_ZOOM, lat, lon
    )
}

/// Mapbox Static Images URL for embedding in the report.
///
/// Mapbox takes lon,lat order.
pub fn static_map_url(token: &str, lat: f64, lon: f64) -> String {
    format!(
        "https://api.mapbox.com/styles/v1/mapbox/streets-v12/static/{},{},{},0/{}x{}?access_token={}",
        lon, lat, STATIC_ZOOM, STATIC_WIDTH, STATIC_HEIGHT, token
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_link() {
        assert_eq!(
            map_link(35.5, -80.2),
            "https://www.openstreetmap.org/?mlat=35.5&mlon=-80.2#map=11/35.5/-80.2"
        );
    }

    #[test]
    fn test_static_map_url_uses_lon_lat_order() {
        let url = static_map_url("pk.test", 35.5, -80.2);
        assert_eq!(
            url,
            "https://api.mapbox.com/styles/v1/mapbox/streets-v12/static/-80.2,35.5,10,0/600x400?access_token=pk.test"
        );
    }
}
