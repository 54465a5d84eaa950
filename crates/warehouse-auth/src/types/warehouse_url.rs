//! Warehouse base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated data warehouse base URL.
///
/// The query string is kept as given, so an `api-version` parameter on the
/// base URL applies to every collection request.
///
/// # Example
///
/// ```
/// use warehouse_auth::WarehouseUrl;
///
/// let base = WarehouseUrl::new(
///     "https://fef.msua01.manage.microsoft.com/ReportingService/DataWarehouseFEService?api-version=beta",
/// ).unwrap();
/// assert_eq!(
///     base.collection_url("dates").unwrap().as_str(),
///     "https://fef.msua01.manage.microsoft.com/ReportingService/DataWarehouseFEService/dates?api-version=beta",
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WarehouseUrl(Url);

impl WarehouseUrl {
    /// Create a new warehouse URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::WarehouseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        if let Some(reason) = super::endpoint_problem(&url) {
            return Err(InvalidInputError::WarehouseUrl {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into());
        }

        Ok(Self(url))
    }

    /// Returns the URL of a named entity collection.
    ///
    /// `"/" + collection` is appended to the base path, with exactly one
    /// slash between the two. A trailing slash on the name is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection name is empty or contains a `.` or
    /// `..` segment, which would resolve outside the base path.
    pub fn collection_url(&self, collection: &str) -> Result<Url, Error> {
        let name = collection.trim_start_matches('/');
        if name.is_empty() {
            return Err(collection_error("collection name must not be empty"));
        }
        if name.split(['/', '\\']).any(is_dot_segment) {
            return Err(collection_error(
                "collection name must not contain '.' or '..' segments",
            ));
        }

        let mut url = self.0.clone();
        let path = format!("{}/{}", url.path().trim_end_matches('/'), name);
        url.set_path(&path);
        Ok(url)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for WarehouseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WarehouseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn collection_error(message: &str) -> Error {
    InvalidInputError::Other {
        message: message.to_string(),
    }
    .into()
}

/// Segments the URL parser collapses, percent-encoded forms included.
fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn appends_collection_with_single_slash() {
        let base = WarehouseUrl::new("https://host/service").unwrap();
        assert_eq!(
            base.collection_url("dates").unwrap().as_str(),
            "https://host/service/dates"
        );
    }

    #[test]
    fn no_double_slash_after_trailing_slash() {
        let base = WarehouseUrl::new("https://host/service/").unwrap();
        assert_eq!(
            base.collection_url("dates").unwrap().as_str(),
            "https://host/service/dates"
        );

        let root = WarehouseUrl::new("https://host").unwrap();
        assert_eq!(
            root.collection_url("/dates").unwrap().as_str(),
            "https://host/dates"
        );
    }

    #[test]
    fn keeps_query_string() {
        let base = WarehouseUrl::new("https://host/service?api-version=beta").unwrap();
        let url = base.collection_url("devices").unwrap();
        assert_eq!(url.path(), "/service/devices");
        assert_eq!(url.query(), Some("api-version=beta"));
    }

    #[test]
    fn rejects_empty_collection() {
        let base = WarehouseUrl::new("https://host/service").unwrap();
        assert!(base.collection_url("").is_err());
        assert!(base.collection_url("/").is_err());
    }

    #[test]
    fn rejects_dot_segments() {
        let base = WarehouseUrl::new("https://host/service?api-version=beta").unwrap();
        for name in ["..", ".", "x/../y", "dates/.", "%2e%2E", ".%2e/x", "x\\..\\y"] {
            let err = base.collection_url(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{}", name);
        }
    }

    #[test]
    fn dots_inside_names_are_allowed() {
        let base = WarehouseUrl::new("https://host/service").unwrap();
        assert_eq!(
            base.collection_url("v1.2").unwrap().path(),
            "/service/v1.2"
        );
        assert_eq!(
            base.collection_url("...").unwrap().path(),
            "/service/..."
        );
    }

    #[test]
    fn keeps_trailing_slash_on_name() {
        let base = WarehouseUrl::new("https://host/service").unwrap();
        assert_eq!(
            base.collection_url("dates/").unwrap().as_str(),
            "https://host/service/dates/"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(WarehouseUrl::new("http://host/service").is_err());
    }

    #[test]
    fn valid_localhost_http() {
        let base = WarehouseUrl::new("http://localhost:2583/api").unwrap();
        assert_eq!(base.as_url().host_str(), Some("localhost"));
    }
}
