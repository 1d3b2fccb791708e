//! Issue queries and the location values they filter by.

/// A location the API can resolve to a congressional district.
///
/// The API takes a single `address` parameter, so coordinates are
/// rendered as `"lat,lon"` and free-form addresses (street address,
/// city, zip) pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Address(String),
    Coordinates { lat: f64, lon: f64 },
}

impl Location {
    pub fn address_value(&self) -> String {
        match self {
            Location::Address(addr) => addr.clone(),
            Location::Coordinates { lat, lon } => format!("{lat},{lon}"),
        }
    }
}

/// Which slice of the issues list to request.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueQuery {
    /// Every issue, including inactive ones.
    All,
    /// Issues relevant near a location. With no location the API
    /// returns its default, unfiltered set.
    Nearby(Option<Location>),
}

impl IssueQuery {
    /// The query-string pair for this variant, if any.
    pub fn query_pair(&self) -> Option<(&'static str, String)> {
        match self {
            IssueQuery::All => Some(("inactive", "true".to_string())),
            IssueQuery::Nearby(Some(location)) => Some(("address", location.address_value())),
            IssueQuery::Nearby(None) => None,
        }
    }
}
