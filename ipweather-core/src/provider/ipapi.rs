use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, error};

use crate::errors::{CliError, Result};
use crate::model::{Coordinates, ResolvedLocation};

use super::{LocationProvider, truncate_body};

/// Geolocation lookup against ip-api.com. A single unauthenticated GET to
/// the base URL locates the caller's public IP.
#[derive(Debug, Clone)]
pub struct IpApiClient {
    http: Client,
    base_url: Url,
}

impl IpApiClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[derive(Debug, Deserialize)]
struct IpGeoResponse {
    status: Option<String>,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    country: Option<String>,
}

#[async_trait]
impl LocationProvider for IpApiClient {
    async fn resolve(&self) -> Result<ResolvedLocation> {
        debug!(url = %self.base_url, "resolving approximate location");

        let res = self.http.get(self.base_url.clone()).send().await.map_err(|e| {
            let message = format!("ip-geo network error: {e}");
            error!("{message}");
            CliError::network_with_source(message, e)
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            let message = format!("ip-geo network error: {e}");
            error!("{message}");
            CliError::network_with_source(message, e)
        })?;

        if !status.is_success() {
            let message = format!(
                "ip-geo HTTP error: status {status}: {}",
                truncate_body(&body),
            );
            error!("{message}");
            return Err(CliError::network(message));
        }

        parse_payload(&body)
    }
}

/// Payload validation is separate from the transport so it can be exercised
/// without a socket.
fn parse_payload(body: &str) -> Result<ResolvedLocation> {
    if body.trim().is_empty() {
        return Err(CliError::unknown("ip-geo returned empty response"));
    }

    let payload: IpGeoResponse = serde_json::from_str(body).map_err(|e| {
        let message = format!("ip-geo network error: {e}");
        CliError::network_with_source(message, e)
    })?;

    let succeeded = payload
        .status
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case("success"));
    if !succeeded {
        let upstream = payload.message.as_deref().unwrap_or("ip-geo returned failure");
        return Err(CliError::network(format!("ip-geo failed: {upstream}")));
    }

    let (Some(lat), Some(lon)) = (payload.lat, payload.lon) else {
        return Err(CliError::unknown("ip-geo returned invalid coordinates"));
    };

    Ok(ResolvedLocation {
        coordinates: Coordinates::new(lat, lon),
        city: payload.city,
        country: payload.country,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExitCode;

    #[test]
    fn parses_successful_payload() {
        let body = r#"{
            "status": "success",
            "lat": 40.4165,
            "lon": -3.7026,
            "city": "Madrid",
            "country": "Spain",
            "query": "83.56.0.1"
        }"#;

        let loc = parse_payload(body).unwrap();
        assert_eq!(loc.coordinates.latitude, 40.4165);
        assert_eq!(loc.coordinates.longitude, -3.7026);
        assert_eq!(loc.city.as_deref(), Some("Madrid"));
        assert_eq!(loc.country.as_deref(), Some("Spain"));
    }

    #[test]
    fn success_status_is_case_insensitive() {
        let body = r#"{"status": "SUCCESS", "lat": 1.0, "lon": 2.0}"#;

        let loc = parse_payload(body).unwrap();
        assert_eq!(loc.city, None);
        assert_eq!(loc.country, None);
    }

    #[test]
    fn failure_status_carries_upstream_message() {
        let body = r#"{"status": "fail", "message": "private range"}"#;

        let err = parse_payload(body).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Network);
        assert_eq!(err.to_string(), "ip-geo failed: private range");
    }

    #[test]
    fn failure_status_without_message_uses_fallback() {
        let body = r#"{"status": "fail"}"#;

        let err = parse_payload(body).unwrap_err();
        assert_eq!(err.to_string(), "ip-geo failed: ip-geo returned failure");
    }

    #[test]
    fn missing_status_is_treated_as_failure() {
        let err = parse_payload(r#"{"lat": 1.0, "lon": 2.0}"#).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Network);
    }

    #[test]
    fn missing_coordinates_are_unknown_category() {
        let body = r#"{"status": "success", "lat": 40.4165}"#;

        let err = parse_payload(body).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Unknown);
        assert_eq!(err.to_string(), "ip-geo returned invalid coordinates");
    }

    #[test]
    fn blank_body_is_unknown_category() {
        for body in ["", "   \n"] {
            let err = parse_payload(body).unwrap_err();
            assert_eq!(err.exit_code(), ExitCode::Unknown);
            assert_eq!(err.to_string(), "ip-geo returned empty response");
        }
    }

    #[test]
    fn malformed_json_is_network_category() {
        let err = parse_payload("<html>gateway</html>").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Network);
        assert!(err.to_string().starts_with("ip-geo network error:"));
    }
}
