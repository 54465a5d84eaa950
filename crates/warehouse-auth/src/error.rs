//! Error types for the warehouse-auth library.
//!
//! Every failure maps onto one of three kinds: invalid input, an
//! authentication rejection by the identity provider, or a transport failure
//! at either endpoint. Variants never carry secret material.

use std::fmt;
use thiserror::Error;

/// The unified error type for warehouse-auth operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing input (absent secret, bad URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The identity provider refused to issue a token.
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("network error: {0}")]
    Transport(#[from] TransportError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    AuthenticationFailed,
    NetworkError,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) => ErrorKind::InvalidArgument,
            Error::Auth(_) => ErrorKind::AuthenticationFailed,
            Error::Transport(_) => ErrorKind::NetworkError,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::AuthenticationFailed => "AuthenticationFailed",
            ErrorKind::NetworkError => "NetworkError",
        };
        f.write_str(name)
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The response body could not be read.
    #[error("failed to read response body: {message}")]
    Body { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            TransportError::Timeout { message }
        } else if err.is_connect() {
            TransportError::Connection { message }
        } else if err.is_body() || err.is_decode() {
            TransportError::Body { message }
        } else {
            TransportError::Http { message }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint answered with a non-success status.
    #[error("{0}")]
    Rejected(ProviderError),

    /// The token endpoint answered 2xx but without a usable token.
    #[error("invalid token response: {reason}")]
    InvalidTokenResponse { reason: String },
}

/// Error details returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    /// HTTP status code.
    pub status: u16,
    /// OAuth2 error code (e.g. `invalid_client`), if present.
    pub error: Option<String>,
    /// Human-readable description from the provider, if present.
    pub description: Option<String>,
}

impl ProviderError {
    /// Create a new provider error.
    pub fn new(status: u16, error: Option<String>, description: Option<String>) -> Self {
        Self {
            status,
            error,
            description,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref description) = self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A secret (client secret or password) was not supplied.
    #[error("secret must not be absent")]
    MissingSecret,

    /// Invalid token endpoint URL.
    #[error("invalid token endpoint '{value}': {reason}")]
    TokenEndpoint { value: String, reason: String },

    /// Invalid warehouse URL.
    #[error("invalid warehouse URL '{value}': {reason}")]
    WarehouseUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let err: Error = InvalidInputError::MissingSecret.into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: Error = AuthError::InvalidTokenResponse {
            reason: "missing access_token".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);

        let err: Error = TransportError::Connection {
            message: "refused".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::NetworkError);
    }

    #[test]
    fn provider_error_display() {
        let err = ProviderError::new(
            401,
            Some("invalid_client".to_string()),
            Some("AADSTS7000215: Invalid client secret is provided.".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "HTTP 401 [invalid_client]: AADSTS7000215: Invalid client secret is provided."
        );

        let bare = ProviderError::new(400, None, None);
        assert_eq!(bare.to_string(), "HTTP 400");
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(ErrorKind::NetworkError.to_string(), "NetworkError");
        assert_eq!(
            ErrorKind::AuthenticationFailed.to_string(),
            "AuthenticationFailed"
        );
    }
}
