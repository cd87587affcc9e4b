//! Plain-text rendering of a weather observation.

use crate::model::WeatherObservation;

/// Human-readable label for a WMO weather interpretation code.
///
/// Codes outside the table render as `Unknown` rather than leaking the raw
/// number.
pub fn condition_label(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1..=3 => "Mainly clear / partly cloudy",
        45..=48 => "Fog / Depositing rime",
        51..=55 | 61..=65 | 80..=82 => "Drizzle / Rain",
        56..=67 => "Freezing rain / Sleet",
        71..=77 | 85..=86 => "Snow / Snow showers",
        95..=99 => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Multi-line summary of an observation at a labelled location.
pub fn render(location: &str, obs: &WeatherObservation) -> String {
    let location = if location.trim().is_empty() {
        "your location"
    } else {
        location
    };

    format!(
        "{location}:\n  Temperature: {:.1} C\n  Wind: {:.1} m/s\n  Condition: {}",
        obs.temperature_c,
        obs.wind_speed_mps,
        condition_label(obs.weather_code),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(code: i32) -> WeatherObservation {
        WeatherObservation {
            temperature_c: 23.46,
            wind_speed_mps: 3.14,
            weather_code: code,
        }
    }

    #[test]
    fn labels_follow_wmo_table() {
        assert_eq!(condition_label(0), "Clear sky");
        assert_eq!(condition_label(2), "Mainly clear / partly cloudy");
        assert_eq!(condition_label(45), "Fog / Depositing rime");
        assert_eq!(condition_label(61), "Drizzle / Rain");
        assert_eq!(condition_label(82), "Drizzle / Rain");
        assert_eq!(condition_label(56), "Freezing rain / Sleet");
        assert_eq!(condition_label(66), "Freezing rain / Sleet");
        assert_eq!(condition_label(75), "Snow / Snow showers");
        assert_eq!(condition_label(86), "Snow / Snow showers");
        assert_eq!(condition_label(95), "Thunderstorm");
        assert_eq!(condition_label(42), "Unknown");
        assert_eq!(condition_label(-1), "Unknown");
    }

    #[test]
    fn renders_rounded_values_and_label() {
        let out = render("Madrid, Spain", &observation(0));

        assert_eq!(
            out,
            "Madrid, Spain:\n  Temperature: 23.5 C\n  Wind: 3.1 m/s\n  Condition: Clear sky"
        );
    }

    #[test]
    fn blank_location_falls_back_to_generic_label() {
        let out = render("   ", &observation(95));
        assert!(out.starts_with("your location:\n"));
        assert!(out.ends_with("Condition: Thunderstorm"));
    }
}
