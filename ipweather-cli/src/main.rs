//! Binary crate for the `ipweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring up the core reporter
//! - Mapping any escaped failure to a stable process exit code

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ipweather_core::{classify, user_message};

mod cli;

#[tokio::main]
async fn main() {
    init_tracing();
    info!(version = env!("CARGO_PKG_VERSION"), "starting ipweather");

    let cmd = cli::Cli::parse();
    if let Err(err) = cmd.run().await {
        let code = classify(&err);
        eprintln!("ERROR: {}", user_message(&err));
        error!(code = code.code(), category = code.label(), "exiting after failure");
        std::process::exit(code.code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
