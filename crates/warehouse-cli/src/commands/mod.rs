//! Subcommand implementations.

pub mod app;
pub mod user;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::debug;
use warehouse_auth::{
    DEFAULT_AUTHORITY, DEFAULT_RESOURCE, HttpConfig, TokenRequest, WarehouseFlow, WarehouseUrl,
};

use crate::cli::Commands;
use crate::output;

/// Where to read from, shared by both subcommands.
#[derive(Args)]
pub struct TargetArgs {
    /// Data warehouse URL for your tenant (see the Azure portal)
    #[arg(long, env = "WAREHOUSE_URL")]
    pub warehouse_url: String,

    /// Entity collection to fetch
    #[arg(long, default_value = "dates")]
    pub collection: String,

    /// Audience URI the token is requested for
    #[arg(long, default_value = DEFAULT_RESOURCE)]
    pub resource: String,

    /// Identity provider base URL
    #[arg(long, default_value = DEFAULT_AUTHORITY)]
    pub authority: String,

    /// Pretty-print the body when it is JSON
    #[arg(long)]
    pub pretty: bool,
}

pub async fn handle(command: Commands, http: HttpConfig) -> Result<()> {
    match command {
        Commands::App(args) => app::run(args, http).await,
        Commands::User(args) => user::run(args, http).await,
    }
}

/// Run a flow with a prepared token request and print the body.
async fn fetch_and_print(request: TokenRequest, target: &TargetArgs, http: HttpConfig) -> Result<()> {
    let warehouse = WarehouseUrl::new(&target.warehouse_url).context("Invalid warehouse URL")?;

    output::field("Token endpoint", request.token_endpoint.as_str());
    output::field("Collection", &target.collection);
    eprintln!("{}", "Requesting access token...".dimmed());

    debug!(timeout = ?http.timeout, %warehouse, "Starting flow");
    let mut flow = WarehouseFlow::new(&http).context("Failed to set up HTTP client")?;
    let body = match flow.run(request, &warehouse, &target.collection).await {
        Ok(body) => body,
        Err(err) => {
            let message = format!("Failed to fetch '{}' [{}]", target.collection, err.kind());
            return Err(anyhow::Error::new(err).context(message));
        }
    };

    if target.pretty
        && let Ok(value) = serde_json::from_str::<serde_json::Value>(&body)
    {
        output::json_pretty(&value)?;
    } else {
        output::body(&body);
    }

    Ok(())
}
