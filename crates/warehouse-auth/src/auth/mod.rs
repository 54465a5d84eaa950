//! Authentication primitives.
//!
//! Secrets, the credentials that carry them, and the access tokens they are
//! exchanged for.

mod credentials;
mod secret;
mod tokens;

pub use credentials::Credentials;
pub use secret::Secret;
pub use tokens::AccessToken;
