//! Zeroizing secret holder for client secrets and passwords.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, InvalidInputError};

/// A client secret or user password.
///
/// The value is fixed at construction and there is no API to change it.
/// The backing buffer is overwritten with zeros when the secret is
/// [released](Secret::release) or dropped, so a secret moved into a
/// token request is wiped on every exit path of that request.
///
/// # Security
///
/// - Not `Clone`: each secret has exactly one owner
/// - Never shown in Debug output, and has no Display impl
///
/// # Example
///
/// ```
/// use warehouse_auth::Secret;
///
/// let secret = Secret::new("hunter2");
/// assert_eq!(secret.expose_secret(), "hunter2");
/// secret.release();
/// ```
#[derive(ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    /// Create a secret from a plain string.
    pub fn new(plain: impl Into<String>) -> Self {
        Self(plain.into())
    }

    /// Create a secret from a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::MissingSecret`] when `plain` is `None`.
    pub fn from_optional<S: Into<String>>(plain: Option<S>) -> Result<Self, Error> {
        plain
            .map(Self::new)
            .ok_or_else(|| InvalidInputError::MissingSecret.into())
    }

    /// Returns the secret value.
    ///
    /// # Security
    ///
    /// Use this only when constructing the token request body.
    /// Never log or display this value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Wipe the secret now rather than waiting for it to go out of scope.
    pub fn release(mut self) {
        self.wipe();
    }

    fn wipe(&mut self) {
        self.0.zeroize();
    }
}

// Hide secret value in Debug output
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&"[REDACTED]").finish()
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
