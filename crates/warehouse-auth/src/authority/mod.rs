//! Identity provider token endpoint client.
//!
//! This module exchanges [`Credentials`](crate::Credentials) for an
//! [`AccessToken`](crate::AccessToken) with a single form-encoded POST.

mod acquirer;
mod endpoints;

pub use acquirer::{AcquireToken, TokenAcquirer, TokenRequest};
