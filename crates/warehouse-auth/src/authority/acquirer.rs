//! Token acquisition over HTTP.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument, trace, warn};
use zeroize::Zeroizing;

use crate::auth::{AccessToken, Credentials};
use crate::config::HttpConfig;
use crate::error::{AuthError, Error, ProviderError};
use crate::types::TokenEndpoint;

use super::endpoints::{TokenErrorResponse, TokenResponse};

/// A single token request.
///
/// Consumed by [`AcquireToken::fetch`], so a request (and the secret inside
/// it) is used for exactly one exchange.
#[derive(Debug)]
pub struct TokenRequest {
    pub token_endpoint: TokenEndpoint,
    /// Audience URI of the API the token is for.
    pub resource: String,
    pub credentials: Credentials,
}

impl TokenRequest {
    pub fn new(
        token_endpoint: TokenEndpoint,
        resource: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            token_endpoint,
            resource: resource.into(),
            credentials,
        }
    }
}

/// Exchanges credentials for an access token.
#[async_trait]
pub trait AcquireToken: Send + Sync {
    /// Perform one token exchange.
    ///
    /// Implementations must release the request's secret before returning,
    /// on success and on failure.
    async fn fetch(&self, request: TokenRequest) -> Result<AccessToken, Error>;
}

/// Token acquirer that posts form-encoded grants to the token endpoint.
///
/// Every call is a fresh exchange: nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct TokenAcquirer {
    client: reqwest::Client,
}

impl TokenAcquirer {
    /// Create a new token acquirer.
    pub fn new(config: &HttpConfig) -> Result<Self, Error> {
        Ok(Self {
            client: config.build_client()?,
        })
    }

    /// Handle a token endpoint response, parsing the token or error.
    async fn handle_response(&self, response: reqwest::Response) -> Result<AccessToken, Error> {
        let status = response.status();
        trace!(status = %status, "token endpoint response");

        if !status.is_success() {
            let error = self.parse_error_response(response).await;
            warn!(status = error.status, error = ?error.error, "Token request rejected");
            return Err(AuthError::Rejected(error).into());
        }

        let body = Zeroizing::new(response.text().await?);
        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::InvalidTokenResponse {
                reason: format!(
                    "malformed token document at line {} column {}",
                    e.line(),
                    e.column()
                ),
            })?;

        if let Some(token_type) = parsed.token_type.as_deref()
            && !token_type.eq_ignore_ascii_case("bearer")
        {
            warn!(token_type, "Unexpected token type, using token as bearer");
        }

        Ok(parsed.into_access_token(Utc::now())?)
    }

    /// Parse an OAuth2 error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();

        match response.json::<TokenErrorResponse>().await {
            Ok(body) => ProviderError::new(status, body.error, body.error_description),
            Err(_) => ProviderError::new(status, None, None),
        }
    }
}

#[async_trait]
impl AcquireToken for TokenAcquirer {
    #[instrument(
        skip(self, request),
        fields(
            endpoint = %request.token_endpoint,
            grant_type = request.credentials.grant_type(),
        )
    )]
    async fn fetch(&self, request: TokenRequest) -> Result<AccessToken, Error> {
        let TokenRequest {
            token_endpoint,
            resource,
            credentials,
        } = request;

        debug!(
            application_id = credentials.application_id(),
            username = credentials.username(),
            %resource,
            "Requesting access token"
        );

        let sent = {
            let form = credentials.form_fields(&resource);
            self.client
                .post(token_endpoint.as_url().clone())
                .form(&form)
                .send()
                .await
        };

        // The exchange is over either way; wipe before looking at the result.
        credentials.release();

        let token = self.handle_response(sent?).await?;
        debug!(expires_at = ?token.expires_at(), "Access token acquired");
        Ok(token)
    }
}
