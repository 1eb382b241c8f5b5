use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::config::AgentConfig;
use crate::error::{AgentError, Result};
use crate::places::types::{PlaceDetails, PlaceDetailsResponse, TextSearchResponse};

/// Google reports these in-body statuses as non-errors.
const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Trait for places clients, enabling mocking in tests.
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Run a text search, returning place identifiers in API order.
    /// An empty result list is not an error.
    async fn text_search(&self, query: &str) -> Result<Vec<String>>;

    /// Fetch the raw details of a single place.
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails>;
}

/// Client for the Google Places web service.
///
/// Constructed unconditionally, even with an empty key; authentication
/// failures then surface as `PlacesStatus` (`REQUEST_DENIED`) on first use.
///
/// NOTE: Do NOT derive `Debug` on this struct — `api_key` would be exposed.
pub struct GooglePlacesClient {
    http: reqwest::Client,
    api_key: String,
    api_base_url: String,
}

impl GooglePlacesClient {
    pub fn new(config: &AgentConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AgentError::Http)?;

        Ok(Self {
            http,
            api_key: config.maps_api_key.clone(),
            api_base_url: config.maps_api_base_url.clone(),
        })
    }

    fn check_status(status: &str, error_message: Option<String>) -> Result<()> {
        if status == STATUS_OK || status == STATUS_ZERO_RESULTS {
            return Ok(());
        }
        Err(AgentError::PlacesStatus {
            status: status.to_string(),
            message: error_message.unwrap_or_default(),
        })
    }

    async fn check_http(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status().as_u16();
        if status != 200 {
            let message = resp.text().await.unwrap_or_default();
            return Err(AgentError::PlacesApiError { status, message });
        }
        Ok(resp)
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    async fn text_search(&self, query: &str) -> Result<Vec<String>> {
        let url = format!("{}/maps/api/place/textsearch/json", self.api_base_url);

        debug!(query, "places text search");

        let resp = self
            .http
            .get(&url)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .send()
            .await?;
        let resp = Self::check_http(resp).await?;

        let search: TextSearchResponse = resp
            .json()
            .await
            .map_err(|e| AgentError::PlacesApiError {
                status: 200,
                message: format!("malformed text-search response: {e}"),
            })?;
        Self::check_status(&search.status, search.error_message)?;

        Ok(search
            .results
            .into_iter()
            .map(|result| result.place_id)
            .collect())
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let url = format!("{}/maps/api/place/details/json", self.api_base_url);

        debug!(place_id, "place details fetch");

        let resp = self
            .http
            .get(&url)
            .query(&[("place_id", place_id), ("key", self.api_key.as_str())])
            .send()
            .await?;
        let resp = Self::check_http(resp).await?;

        let details: PlaceDetailsResponse =
            resp.json()
                .await
                .map_err(|e| AgentError::PlacesApiError {
                    status: 200,
                    message: format!("malformed place-details response: {e}"),
                })?;
        Self::check_status(&details.status, details.error_message)?;

        Ok(details.result.unwrap_or_default())
    }
}

/// Test utilities for the places client.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock places client backed by fixed search results and a
    /// place-id → details map.
    pub struct MockPlacesClient {
        search_results: Vec<String>,
        details: HashMap<String, PlaceDetails>,
        queries: Mutex<Vec<String>>,
    }

    impl MockPlacesClient {
        pub fn new(
            search_results: Vec<String>,
            details: HashMap<String, PlaceDetails>,
        ) -> Self {
            Self {
                search_results,
                details,
                queries: Mutex::new(Vec::new()),
            }
        }

        pub fn empty() -> Self {
            Self::new(Vec::new(), HashMap::new())
        }

        /// Queries received by `text_search`, in order.
        pub fn received_queries(&self) -> Vec<String> {
            self.queries
                .lock()
                .map(|queries| queries.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl PlacesClient for MockPlacesClient {
        async fn text_search(&self, query: &str) -> Result<Vec<String>> {
            if let Ok(mut queries) = self.queries.lock() {
                queries.push(query.to_string());
            }
            Ok(self.search_results.clone())
        }

        async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
            self.details
                .get(place_id)
                .cloned()
                .ok_or_else(|| AgentError::PlacesStatus {
                    status: "NOT_FOUND".into(),
                    message: format!("no mock details for {place_id}"),
                })
        }
    }
}
