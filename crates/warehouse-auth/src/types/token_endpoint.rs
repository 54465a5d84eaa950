//! Token endpoint URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Identity provider used when no authority is given.
pub const DEFAULT_AUTHORITY: &str = "https://login.windows.net";

/// Tenant segment for users whose tenant is not known in advance.
pub const COMMON_TENANT: &str = "common";

/// A validated OAuth2 token endpoint URL.
///
/// # Example
///
/// ```
/// use warehouse_auth::TokenEndpoint;
///
/// let endpoint = TokenEndpoint::for_tenant("https://login.windows.net", "contoso.com").unwrap();
/// assert_eq!(endpoint.as_str(), "https://login.windows.net/contoso.com/oauth2/token");
///
/// let common = TokenEndpoint::common("https://login.windows.net").unwrap();
/// assert_eq!(common.as_str(), "https://login.windows.net/common/oauth2/token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenEndpoint(Url);

impl TokenEndpoint {
    /// Create a token endpoint from a full URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::TokenEndpoint {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        if let Some(reason) = super::endpoint_problem(&url) {
            return Err(InvalidInputError::TokenEndpoint {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into());
        }

        Ok(Self(url))
    }

    /// The token endpoint of a specific tenant, e.g. `contoso.com`.
    pub fn for_tenant(authority: impl AsRef<str>, tenant: &str) -> Result<Self, Error> {
        let authority = authority.as_ref();
        if tenant.is_empty() || tenant.contains(['/', '?', '#']) {
            return Err(InvalidInputError::TokenEndpoint {
                value: authority.to_string(),
                reason: format!("invalid tenant '{}'", tenant),
            }
            .into());
        }

        Self::new(format!(
            "{}/{}/oauth2/token",
            authority.trim_end_matches('/'),
            tenant
        ))
    }

    /// The shared endpoint used when the user's tenant is not known.
    pub fn common(authority: impl AsRef<str>) -> Result<Self, Error> {
        Self::for_tenant(authority, COMMON_TENANT)
    }

    /// Returns the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for TokenEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenEndpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
