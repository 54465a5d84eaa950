//! Credentials for the two supported OAuth2 grants.

use std::fmt;

use super::secret::Secret;

/// Credentials presented to the token endpoint.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use warehouse_auth::Credentials;
///
/// let app = Credentials::app("8d699e29-3b54-4c6a-91cc-e537b4680fed", "client-secret");
/// assert_eq!(app.application_id(), "8d699e29-3b54-4c6a-91cc-e537b4680fed");
/// assert_eq!(app.grant_type(), "client_credentials");
/// ```
pub enum Credentials {
    /// Confidential-client credentials (client-credentials grant).
    App {
        application_id: String,
        secret: Secret,
    },

    /// End-user credentials (resource-owner password grant).
    ///
    /// The application id identifies a public client and is not secret.
    User {
        application_id: String,
        username: String,
        secret: Secret,
    },
}

impl Credentials {
    /// Credentials for an application authenticating as itself.
    pub fn app(application_id: impl Into<String>, secret: impl Into<Secret>) -> Self {
        Credentials::App {
            application_id: application_id.into(),
            secret: secret.into(),
        }
    }

    /// Credentials for a user signing in through a public application.
    pub fn user(
        application_id: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<Secret>,
    ) -> Self {
        Credentials::User {
            application_id: application_id.into(),
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Returns the application (client) id.
    pub fn application_id(&self) -> &str {
        match self {
            Credentials::App { application_id, .. } | Credentials::User { application_id, .. } => {
                application_id
            }
        }
    }

    /// Returns the username for user credentials.
    pub fn username(&self) -> Option<&str> {
        match self {
            Credentials::App { .. } => None,
            Credentials::User { username, .. } => Some(username),
        }
    }

    /// Returns the OAuth2 `grant_type` these credentials are exchanged with.
    pub fn grant_type(&self) -> &'static str {
        match self {
            Credentials::App { .. } => "client_credentials",
            Credentials::User { .. } => "password",
        }
    }

    /// Build the form fields for the token request.
    ///
    /// The returned pairs borrow the secret; drop them before releasing it.
    pub(crate) fn form_fields<'a>(&'a self, resource: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut fields = vec![("grant_type", self.grant_type())];
        match self {
            Credentials::App {
                application_id,
                secret,
            } => {
                fields.push(("client_id", application_id.as_str()));
                fields.push(("client_secret", secret.expose_secret()));
            }
            Credentials::User {
                application_id,
                username,
                secret,
            } => {
                fields.push(("client_id", application_id.as_str()));
                fields.push(("username", username.as_str()));
                fields.push(("password", secret.expose_secret()));
            }
        }
        fields.push(("resource", resource));
        fields
    }

    /// Wipe the secret held by these credentials.
    pub fn release(self) {
        match self {
            Credentials::App { secret, .. } | Credentials::User { secret, .. } => secret.release(),
        }
    }
}

// Intentionally hide secret in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::App { application_id, .. } => f
                .debug_struct("App")
                .field("application_id", application_id)
                .field("secret", &"[REDACTED]")
                .finish(),
            Credentials::User {
                application_id,
                username,
                ..
            } => f
                .debug_struct("User")
                .field("application_id", application_id)
                .field("username", username)
                .field("secret", &"[REDACTED]")
                .finish(),
        }
    }
}
