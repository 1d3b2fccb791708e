//! Response types for the issues endpoint.

use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::types::Issue;

/// The decoded `/issues/` payload: the issues plus the location the
/// server resolved the address filter to.
#[derive(Deserialize, Debug, Clone)]
pub struct IssuesList {
    pub issues: Vec<Issue>,
    #[serde(rename = "normalizedLocation", default)]
    pub normalized_location: String,
    #[serde(rename = "splitDistrict", default)]
    pub split_district: bool,
    #[serde(rename = "invalidAddress", default)]
    pub invalid_address: bool,
}

/// Status and headers of the response a list was decoded from.
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    pub status: u16,
    pub headers: HeaderMap,
}

/// A successful fetch: the decoded list and the response it came from.
#[derive(Debug, Clone)]
pub struct FetchedIssues {
    pub list: IssuesList,
    pub meta: ResponseMetadata,
}
