//! Token endpoint response types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::auth::AccessToken;
use crate::error::AuthError;

/// Successful token endpoint response.
///
/// Every field is optional at the serde level so that a missing token is
/// reported as an invalid response rather than a parse failure.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, deserialize_with = "seconds")]
    pub expires_in: Option<i64>,
    #[serde(default, deserialize_with = "seconds")]
    pub expires_on: Option<i64>,
}

impl TokenResponse {
    /// Convert into an [`AccessToken`], resolving expiry against `now`.
    ///
    /// An absolute `expires_on` wins over a relative `expires_in`.
    pub fn into_access_token(self, now: DateTime<Utc>) -> Result<AccessToken, AuthError> {
        let value = self
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::InvalidTokenResponse {
                reason: "missing access_token".to_string(),
            })?;

        let expires_at = self
            .expires_on
            .and_then(|on| DateTime::from_timestamp(on, 0))
            .or_else(|| {
                self.expires_in
                    .and_then(Duration::try_seconds)
                    .and_then(|d| now.checked_add_signed(d))
            });

        Ok(match expires_at {
            Some(at) => AccessToken::with_expiry(value, at),
            None => AccessToken::new(value),
        })
    }
}

/// Error body of a rejected token request (RFC 6749 section 5.2).
#[derive(Debug, Deserialize)]
pub(crate) struct TokenErrorResponse {
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Read seconds from a JSON number or a numeric string.
///
/// Expiry is informational, so anything unreadable becomes `None` instead of
/// failing the whole response.
fn seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(whole_seconds)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_seconds))
        }
        _ => None,
    })
}

fn whole_seconds(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up, so the upper bound is exclusive
    (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then(|| f.trunc() as i64)
}
