use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, error};

use crate::errors::{CliError, Result};
use crate::model::{Coordinates, WeatherObservation};

use super::{WeatherProvider, truncate_body};

/// Current-weather lookup against the Open-Meteo forecast endpoint. No API
/// key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: Url,
}

impl OpenMeteoClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    weathercode: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<OmCurrentWeather>,
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current(&self, coordinates: Coordinates) -> Result<WeatherObservation> {
        debug!(
            lat = coordinates.latitude,
            lon = coordinates.longitude,
            "requesting current weather"
        );

        let res = self
            .http
            .get(self.base_url.clone())
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                let message = format!("open-meteo network error: {e}");
                error!("{message}");
                CliError::network_with_source(message, e)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            let message = format!("open-meteo network error: {e}");
            error!("{message}");
            CliError::network_with_source(message, e)
        })?;

        if !status.is_success() {
            let message = format!(
                "open-meteo HTTP error: status {status}: {}",
                truncate_body(&body),
            );
            error!("{message}");
            return Err(CliError::network(message));
        }

        parse_payload(&body)
    }
}

fn parse_payload(body: &str) -> Result<WeatherObservation> {
    if body.trim().is_empty() {
        return Err(CliError::unknown("open-meteo returned empty current_weather"));
    }

    let payload: OmForecastResponse = serde_json::from_str(body).map_err(|e| {
        let message = format!("open-meteo network error: {e}");
        CliError::network_with_source(message, e)
    })?;

    let Some(current) = payload.current_weather else {
        return Err(CliError::unknown("open-meteo returned empty current_weather"));
    };

    let (Some(temperature), Some(windspeed), Some(weathercode)) =
        (current.temperature, current.windspeed, current.weathercode)
    else {
        return Err(CliError::unknown("open-meteo returned incomplete current_weather"));
    };

    Ok(WeatherObservation {
        temperature_c: temperature,
        wind_speed_mps: windspeed,
        weather_code: weathercode,
    })
}
