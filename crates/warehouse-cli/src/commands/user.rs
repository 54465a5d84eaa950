//! User (resource-owner password) command implementation.

use anyhow::{Context, Result};
use clap::Args;
use warehouse_auth::{Credentials, HttpConfig, Secret, TokenEndpoint, TokenRequest};

use super::TargetArgs;

#[derive(Args)]
pub struct UserArgs {
    /// Application ID of the native app registered in the directory
    #[arg(long)]
    pub application_id: String,

    /// Email address of the user to authenticate as
    #[arg(long)]
    pub username: String,

    /// Password of the user
    #[arg(long, env = "WAREHOUSE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(flatten)]
    pub target: TargetArgs,
}

pub async fn run(args: UserArgs, http: HttpConfig) -> Result<()> {
    let UserArgs {
        application_id,
        username,
        password,
        target,
    } = args;

    // The user's tenant is not known up front.
    let endpoint = TokenEndpoint::common(&target.authority).context("Invalid token endpoint")?;
    let password = Secret::from_optional(password)
        .context("No password given (use --password or WAREHOUSE_PASSWORD)")?;

    let request = TokenRequest::new(
        endpoint,
        target.resource.clone(),
        Credentials::user(application_id, username, password),
    );

    super::fetch_and_print(request, &target, http).await
}
