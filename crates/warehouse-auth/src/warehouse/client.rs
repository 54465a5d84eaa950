//! Bearer-authenticated HTTP client for the data warehouse.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::auth::AccessToken;
use crate::config::HttpConfig;
use crate::error::{Error, InvalidInputError};
use crate::types::WarehouseUrl;

/// HTTP client for authenticated warehouse reads.
///
/// Response bodies are returned as text whatever the status code;
/// interpreting the status is left to the caller.
#[derive(Debug, Clone)]
pub struct WarehouseClient {
    client: reqwest::Client,
}

impl WarehouseClient {
    /// Create a new warehouse client.
    pub fn new(config: &HttpConfig) -> Result<Self, Error> {
        Ok(Self {
            client: config.build_client()?,
        })
    }

    /// Fetch an entity collection, e.g. `dates`, from the warehouse.
    #[instrument(skip(self, base, token), fields(%collection))]
    pub async fn get_collection(
        &self,
        base: &WarehouseUrl,
        collection: &str,
        token: &AccessToken,
    ) -> Result<String, Error> {
        let url = base.collection_url(collection)?;
        self.get(url, token).await
    }

    /// Make an authenticated GET request and return the body.
    #[instrument(skip(self, token), fields(%url))]
    pub async fn get(&self, url: Url, token: &AccessToken) -> Result<String, Error> {
        debug!("Warehouse GET");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, Self::auth_header(token)?)
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "Warehouse response");
        if !status.is_success() {
            warn!(status = status.as_u16(), "Warehouse returned a non-success status");
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Warehouse body received");
        Ok(body)
    }

    /// Create the `Authorization: Bearer` header value.
    fn auth_header(token: &AccessToken) -> Result<HeaderValue, Error> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(|_| {
            InvalidInputError::Other {
                message: "access token contains characters not allowed in a header".to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}
