use serde::{Deserialize, Serialize};

/// A pair of decimal-degree coordinates.
///
/// No range checking happens here or anywhere downstream: out-of-range
/// values are passed through to the upstream weather service and any
/// resulting upstream error surfaces as a network failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Approximate location resolved from the caller's public IP.
///
/// City and country are display-only hints; the geolocation service may
/// omit either.
#[derive(Debug, Clone)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl ResolvedLocation {
    /// Human-friendly label, preferring "city, country" when both are known.
    pub fn display_label(&self) -> String {
        let lat = self.coordinates.latitude;
        let lon = self.coordinates.longitude;
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => {
                format!("approx. location: {city}, {country} (lat {lat:.4}, lon {lon:.4})")
            }
            _ => format!("approx. location (lat {lat:.4}, lon {lon:.4})"),
        }
    }
}

/// A current weather observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature in Celsius.
    pub temperature_c: f64,
    /// Wind speed in meters per second.
    pub wind_speed_mps: f64,
    /// WMO weather code.
    pub weather_code: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_city_and_country() {
        let loc = ResolvedLocation {
            coordinates: Coordinates::new(40.4, -3.7),
            city: Some("Madrid".into()),
            country: Some("Spain".into()),
        };
        assert_eq!(
            loc.display_label(),
            "approx. location: Madrid, Spain (lat 40.4000, lon -3.7000)"
        );
    }

    #[test]
    fn label_falls_back_to_coordinates() {
        let loc = ResolvedLocation {
            coordinates: Coordinates::new(40.4, -3.7),
            city: Some("Madrid".into()),
            country: None,
        };
        assert_eq!(loc.display_label(), "approx. location (lat 40.4000, lon -3.7000)");

        let loc = ResolvedLocation {
            coordinates: Coordinates::new(-33.9, 151.2),
            city: None,
            country: None,
        };
        assert_eq!(loc.display_label(), "approx. location (lat -33.9000, lon 151.2000)");
    }
}
