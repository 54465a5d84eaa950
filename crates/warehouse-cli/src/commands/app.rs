//! App-only (client-credentials) command implementation.

use anyhow::{Context, Result};
use clap::Args;
use warehouse_auth::{Credentials, HttpConfig, Secret, TokenEndpoint, TokenRequest};

use super::TargetArgs;

#[derive(Args)]
pub struct AppArgs {
    /// Application ID of the web app registered in the directory
    #[arg(long)]
    pub application_id: String,

    /// Domain of the tenant, e.g. "contoso.com"
    #[arg(long)]
    pub tenant: String,

    /// Application secret
    #[arg(long, env = "WAREHOUSE_APP_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    #[command(flatten)]
    pub target: TargetArgs,
}

pub async fn run(args: AppArgs, http: HttpConfig) -> Result<()> {
    let AppArgs {
        application_id,
        tenant,
        secret,
        target,
    } = args;

    let endpoint =
        TokenEndpoint::for_tenant(&target.authority, &tenant).context("Invalid token endpoint")?;
    let secret = Secret::from_optional(secret)
        .context("No application secret given (use --secret or WAREHOUSE_APP_SECRET)")?;

    let request = TokenRequest::new(
        endpoint,
        target.resource.clone(),
        Credentials::app(application_id, secret),
    );

    super::fetch_and_print(request, &target, http).await
}
