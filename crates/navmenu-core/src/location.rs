use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::options::BuildOptions;

/// Current router location.
///
/// Only `pathname` feeds the bookmark link; `search` and `hash` are kept
/// so the location can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub hash: String,
}

impl Location {
    /// Location with a bare path and no query or fragment.
    pub fn from_path(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: String::new(),
            hash: String::new(),
        }
    }

    /// Parse a location string such as `/Patient/123?tab=history#top`.
    ///
    /// Absolute URLs are accepted; their authority is discarded.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        Self::parse_with(input, &BuildOptions::default())
    }

    pub fn parse_with(input: &str, opts: &BuildOptions) -> Result<Self, ConfigError> {
        let url = Url::options()
            .base_url(Some(&opts.base_url))
            .parse(input)
            .map_err(|source| ConfigError::InvalidLocation {
                input: input.to_string(),
                source,
            })?;

        Ok(Self {
            pathname: url.path().to_string(),
            search: url.query().map(|q| format!("?{q}")).unwrap_or_default(),
            hash: url.fragment().map(|f| format!("#{f}")).unwrap_or_default(),
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_query_and_fragment() {
        let loc = Location::parse("/Patient/123?tab=history#top").unwrap();
        assert_eq!(loc.pathname, "/Patient/123");
        assert_eq!(loc.search, "?tab=history");
        assert_eq!(loc.hash, "#top");
        assert_eq!(loc.to_string(), "/Patient/123?tab=history#top");
    }

    #[test]
    fn empty_input_is_root() {
        let loc = Location::parse("").unwrap();
        assert_eq!(loc, Location::from_path("/"));
    }

    #[test]
    fn absolute_url_drops_authority() {
        let loc = Location::parse("https://elsewhere.example/Observation/9").unwrap();
        assert_eq!(loc.pathname, "/Observation/9");
        assert!(loc.search.is_empty());
    }

    #[test]
    fn relative_path_is_rooted() {
        let loc = Location::parse("Practitioner").unwrap();
        assert_eq!(loc.pathname, "/Practitioner");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Location::parse("http://host:99999/x").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLocation { .. }));
    }
}
