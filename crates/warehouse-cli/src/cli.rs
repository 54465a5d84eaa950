//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{app::AppArgs, user::UserArgs};

// Not Debug: the subcommand arguments carry secrets.

/// Fetch data warehouse collections using OAuth2 credentials.
#[derive(Parser)]
#[command(name = "warehouse")]
#[command(author, version = env!("WAREHOUSE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Request timeout in seconds, applied to each HTTP request
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authenticate as an application (client-credentials grant)
    App(AppArgs),

    /// Authenticate as a user (resource-owner password grant)
    User(UserArgs),
}
