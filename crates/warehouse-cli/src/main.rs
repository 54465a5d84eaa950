//! warehouse - fetch data warehouse collections from the command line.
//!
//! This is a thin wrapper over the `warehouse-auth` library: it acquires a
//! token with application or user credentials and prints the body of one
//! collection request.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use warehouse_auth::HttpConfig;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let http = HttpConfig::default()
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_user_agent(concat!("warehouse-cli/", env!("WAREHOUSE_VERSION")));

    match commands::handle(cli.command, http).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
