use clap::{Parser, Subcommand};

use ipweather_core::{CliError, Config, Coordinates, WeatherReporter};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "ipweather",
    version,
    about = "Current weather for your approximate (IP-derived) location"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current weather, locating you by public IP unless
    /// coordinates are given.
    Weather {
        /// Latitude in decimal degrees. Requires --lon.
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude in decimal degrees. Requires --lat.
        #[arg(long)]
        lon: Option<f64>,
    },

    /// Print the application version.
    Version,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Weather { lat, lon } => {
                let coords = pair_coordinates(lat, lon)?;
                let config = Config::load()?;
                let reporter = WeatherReporter::from_config(&config)?;
                let summary = reporter.report(coords).await?;
                println!("{summary}");
            }
            Command::Version => {
                println!("ipweather {}", env!("CARGO_PKG_VERSION"));
            }
        }

        Ok(())
    }
}

/// Coordinates only make sense as a pair. A lone `--lat` or `--lon` is
/// rejected here, before any network call happens, so the failure stays in
/// the validation category.
fn pair_coordinates(
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<Option<Coordinates>, CliError> {
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => Ok(Some(Coordinates::new(latitude, longitude))),
        (None, None) => Ok(None),
        _ => Err(CliError::validation("--lat and --lon must be provided together")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipweather_core::ExitCode;

    #[test]
    fn full_pair_is_accepted() {
        let coords = pair_coordinates(Some(40.0), Some(-3.0)).unwrap().unwrap();
        assert_eq!(coords.latitude, 40.0);
        assert_eq!(coords.longitude, -3.0);
    }

    #[test]
    fn absent_pair_falls_back_to_resolution() {
        assert!(pair_coordinates(None, None).unwrap().is_none());
    }

    #[test]
    fn partial_pair_is_a_validation_failure() {
        for (lat, lon) in [(Some(40.0), None), (None, Some(-3.0))] {
            let err = pair_coordinates(lat, lon).unwrap_err();
            assert_eq!(err.exit_code(), ExitCode::Validation);
            assert_eq!(err.to_string(), "--lat and --lon must be provided together");
        }
    }

    #[test]
    fn weather_subcommand_accepts_partial_flags_at_parse_time() {
        // The pairing rule is enforced after parsing so the failure carries
        // the validation exit code instead of clap's own.
        let cli = Cli::try_parse_from(["ipweather", "weather", "--lat", "40.0"]).unwrap();
        match cli.command {
            Command::Weather { lat, lon } => {
                assert_eq!(lat, Some(40.0));
                assert_eq!(lon, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn version_subcommand_parses() {
        let cli = Cli::try_parse_from(["ipweather", "version"]).unwrap();
        assert!(matches!(cli.command, Command::Version));
    }
}
