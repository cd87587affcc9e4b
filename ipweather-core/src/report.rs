use tracing::debug;

use crate::config::Config;
use crate::errors::Result;
use crate::http::build_client;
use crate::model::Coordinates;
use crate::present;
use crate::provider::ipapi::IpApiClient;
use crate::provider::openmeteo::OpenMeteoClient;
use crate::provider::{LocationProvider, WeatherProvider};

/// Sequences the two upstream calls: resolve a location (unless the caller
/// supplied one), then fetch the current weather there. Failures
/// short-circuit, so the weather provider is never contacted when location
/// resolution fails.
#[derive(Debug)]
pub struct WeatherReporter {
    location: Box<dyn LocationProvider>,
    weather: Box<dyn WeatherProvider>,
}

impl WeatherReporter {
    pub fn new(location: Box<dyn LocationProvider>, weather: Box<dyn WeatherProvider>) -> Self {
        Self { location, weather }
    }

    /// Wire up the concrete ip-api.com and Open-Meteo clients over one shared
    /// HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let http = build_client(config)?;
        let ip_geo = config.endpoints.ip_geo_url()?;
        let open_meteo = config.endpoints.open_meteo_url()?;

        Ok(Self::new(
            Box::new(IpApiClient::new(http.clone(), ip_geo)),
            Box::new(OpenMeteoClient::new(http, open_meteo)),
        ))
    }

    /// Produce the rendered weather summary. `coords` skips IP geolocation
    /// entirely when present.
    pub async fn report(&self, coords: Option<Coordinates>) -> Result<String> {
        let (coordinates, label) = match coords {
            Some(c) => {
                let label = format!(
                    "selected location (lat {:.4}, lon {:.4})",
                    c.latitude, c.longitude
                );
                (c, label)
            }
            None => {
                let resolved = self.location.resolve().await?;
                (resolved.coordinates, resolved.display_label())
            }
        };
        debug!(%label, "coordinates selected");

        let observation = self.weather.current(coordinates).await?;

        Ok(present::render(&label, &observation))
    }
}
