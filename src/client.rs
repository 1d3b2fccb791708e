use log::{debug, warn};
use reqwest::Client;
use reqwest::StatusCode;
use url::Url;

use crate::error::{FiveCallsError, Result};
use crate::query::IssueQuery;
use crate::responses::{FetchedIssues, IssuesList, ResponseMetadata};

const API_ENDPOINT: &str = "https://5calls.org";

pub struct FiveCallsClient {
    http: Client,
    base: Url,
}

impl FiveCallsClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(API_ENDPOINT)
    }

    /// Build a client against a non-default endpoint, e.g. a staging
    /// server or a local test server.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let base = Url::parse(endpoint).map_err(|e| FiveCallsError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        Ok(Self {
            http: Client::new(),
            base,
        })
    }

    /// The `/issues/` URL for a query. Same query, same URL.
    pub fn issues_url(&self, query: &IssueQuery) -> Url {
        let mut url = self.base.clone();
        url.set_path("/issues/");

        if let Some((key, value)) = query.query_pair() {
            url.query_pairs_mut().append_pair(key, &value);
        }

        url
    }

    /// Fetch the issues list in a single GET. No retries: the outcome
    /// of the one attempt is the outcome of the call.
    pub async fn fetch_issues(&self, query: &IssueQuery) -> Result<FetchedIssues> {
        let url = self.issues_url(query);
        debug!("Fetching issues from {url}");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("Error fetching issues: {e}");
            e
        })?;

        let status = response.status();
        let meta = ResponseMetadata {
            status: status.as_u16(),
            headers: response.headers().clone(),
        };
        debug!("HTTP {}", meta.status);

        if status != StatusCode::OK {
            warn!("Received HTTP {} from issues endpoint", meta.status);
            return Err(FiveCallsError::UnexpectedStatus {
                status: meta.status,
            });
        }

        let body = response.text().await?;
        let list: IssuesList = serde_json::from_str(&body).map_err(|e| {
            warn!("Error parsing issues: {e}");
            FiveCallsError::Decode { source: e }
        })?;

        debug!(
            "Returned {} issues with normalized location: {}",
            list.issues.len(),
            list.normalized_location
        );

        Ok(FetchedIssues { list, meta })
    }
}
