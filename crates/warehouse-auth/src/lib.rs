//! warehouse-auth - OAuth2 token acquisition for data warehouse clients
//!
//! This library obtains a bearer access token from an identity provider,
//! using either application credentials (client-credentials grant) or a
//! user's name and password (resource-owner password grant), and uses it to
//! read entity collections from a data warehouse REST endpoint.
//!
//! Secrets live in a zeroizing [`Secret`] that is wiped as soon as the token
//! request completes. Nothing is cached between runs.
//!
//! # Example
//!
//! ```no_run
//! use warehouse_auth::{
//!     Credentials, HttpConfig, Secret, TokenEndpoint, TokenRequest, WarehouseFlow, WarehouseUrl,
//!     DEFAULT_AUTHORITY,
//! };
//!
//! # async fn example() -> Result<(), warehouse_auth::Error> {
//! let password = Secret::from_optional(std::env::var("WAREHOUSE_PASSWORD").ok())?;
//! let request = TokenRequest::new(
//!     TokenEndpoint::common(DEFAULT_AUTHORITY)?,
//!     "https://api.manage.microsoft.com/",
//!     Credentials::user("8d699e29-3b54-4c6a-91cc-e537b4680fed", "admin@contoso.com", password),
//! );
//! let warehouse = WarehouseUrl::new("https://fef.msua01.manage.microsoft.com/ReportingService/DataWarehouseFEService?api-version=beta")?;
//!
//! let mut flow = WarehouseFlow::new(&HttpConfig::default())?;
//! let body = flow.run(request, &warehouse, "dates").await?;
//! println!("{}", body);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod authority;
pub mod config;
pub mod error;
pub mod flow;
pub mod types;
pub mod warehouse;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credentials, Secret};
pub use authority::{AcquireToken, TokenAcquirer, TokenRequest};
pub use config::HttpConfig;
pub use error::{Error, ErrorKind};
pub use flow::{FlowState, WarehouseFlow};
pub use types::{COMMON_TENANT, DEFAULT_AUTHORITY, TokenEndpoint, WarehouseUrl};
pub use warehouse::WarehouseClient;

/// Audience URI of the Intune data warehouse API.
pub const DEFAULT_RESOURCE: &str = "https://api.manage.microsoft.com/";

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
