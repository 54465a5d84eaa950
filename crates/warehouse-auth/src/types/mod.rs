//! Validated URL types for the token and warehouse endpoints.

mod token_endpoint;
mod warehouse_url;

pub use token_endpoint::{COMMON_TENANT, DEFAULT_AUTHORITY, TokenEndpoint};
pub use warehouse_url::WarehouseUrl;

use url::Url;

/// Check that a URL can serve as an HTTP endpoint.
///
/// Returns the reason it cannot, or `None` when it is acceptable.
fn endpoint_problem(url: &Url) -> Option<&'static str> {
    // Must be absolute
    if url.cannot_be_a_base() {
        return Some("must be an absolute URL");
    }

    // Must be HTTPS (or HTTP for localhost)
    let scheme = url.scheme();
    let is_localhost = url
        .host_str()
        .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

    if scheme != "https" && !(scheme == "http" && is_localhost) {
        return Some("must use HTTPS (HTTP allowed only for localhost)");
    }

    // Must have a host
    if url.host_str().is_none() {
        return Some("must have a host");
    }

    None
}
