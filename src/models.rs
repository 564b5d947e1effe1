/// One of the three daily trajectory lookups.
#[derive(Clone, Debug)]
pub struct ForecastWindow {
    /// Offset from the nominal launch time, in hours.
    pub offset_hours: i64,
    /// Forecast-hour code expected by the trajectory service.
    pub code: u32,
    /// Human label carrying the target calendar date, used as the report
    /// section header.
    pub label: String,
}

/// Predicted landing point parsed from the trajectory HTML. Fields are NaN
/// when the corresponding column could not be parsed.
#[derive(Clone, Copy, Debug)]
pub struct TrajectoryPoint {
    pub lat: f64,
    pub lon: f64,
    pub altitude_m: f64,
}

impl TrajectoryPoint {
    pub fn invalid() -> Self {
        Self {
            lat: f64::NAN,
            lon: f64::NAN,
            altitude_m: f64::NAN,
        }
    }

    /// A point is usable when both coordinates parsed. Altitude is
    /// informational only and may still be NaN.
    pub fn is_valid(&self) -> bool {
        !self.lat.is_nan() && !self.lon.is_nan()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Land, and within recovery range of the base.
    Positive,
    Negative,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Positive => "positive",
            Classification::Negative => "negative",
        }
    }
}

/// Per-window outcome of one run. Exists only for the duration of the run;
/// nothing is persisted.
#[derive(Clone, Debug)]
pub struct LandingReport {
    pub label: String,
    pub point: TrajectoryPoint,
    pub distance_km: f64,
    pub classification: Classification,
    pub map_link: String,
    pub map_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_point_is_not_valid() {
        assert!(!TrajectoryPoint::invalid().is_valid());
    }

    #[test]
    fn test_point_with_nan_coordinate_is_not_valid() {
        let p = TrajectoryPoint {
            lat: 45.0,
            lon: f64::NAN,
            altitude_m: 0.0,
        };
        assert!(!p.is_valid());
    }

    #[test]
    fn test_point_with_nan_altitude_is_still_valid() {
        let p = TrajectoryPoint {
            lat: 45.0,
            lon: 6.0,
            altitude_m: f64::NAN,
        };
        assert!(p.is_valid());
    }
}
