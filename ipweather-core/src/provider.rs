use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::Result;
use crate::model::{Coordinates, ResolvedLocation, WeatherObservation};

pub mod ipapi;
pub mod openmeteo;

/// Resolves an approximate location without any user input, typically from
/// the machine's public IP address.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn resolve(&self) -> Result<ResolvedLocation>;
}

/// Fetches the current weather observation for a pair of coordinates.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, coordinates: Coordinates) -> Result<WeatherObservation>;
}

/// Upstream error bodies can be arbitrarily large, keep only a short snippet.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn short_body_kept_verbatim() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn long_body_truncated_with_ellipsis() {
        let body = "x".repeat(500);
        let snippet = truncate_body(&body);
        assert_eq!(snippet.len(), 203);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = format!("{}é{}", "x".repeat(199), "y".repeat(100));
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("..."));
        assert!(snippet.is_char_boundary(snippet.len() - 3));
    }
}
