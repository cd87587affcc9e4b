//! Core library for the `ipweather` CLI.
//!
//! This crate defines:
//! - Configuration (timeouts, upstream endpoints) and the shared HTTP client
//! - IP geolocation and current-weather provider clients
//! - The reporter sequencing the two calls
//! - The failure taxonomy mapping every error to a stable process exit code
//!
//! It is used by `ipweather-cli`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod errors;
pub mod http;
pub mod model;
pub mod present;
pub mod provider;
pub mod report;

pub use config::Config;
pub use errors::{CliError, ExitCode, classify, user_message};
pub use model::{Coordinates, ResolvedLocation, WeatherObservation};
pub use provider::{LocationProvider, WeatherProvider};
pub use report::WeatherReporter;
