use tracing::{debug, info};

use crate::config::AgentConfig;
use crate::error::Result;
use crate::llm::{prompt, schema, LlmClient, LlmRequest};
use crate::places::PlacesClient;
use crate::types::{PlaceInfo, Recommendation, Recommendations, RequestSpecifics};

/// Upper bound on the returned recommendation list. The prompt instructs
/// the model to stay within it; the list is truncated here regardless.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// The recommendation agent.
///
/// Linear flow: parse the free-text request, run a places text search,
/// fetch details per place identifier in order, then ask the LLM to rank
/// the collected candidates against the user's criteria.
pub struct Agent<'a, C: LlmClient, P: PlacesClient> {
    llm: &'a C,
    places: &'a P,
    config: &'a AgentConfig,
}

impl<'a, C: LlmClient, P: PlacesClient> Agent<'a, C, P> {
    pub fn new(llm: &'a C, places: &'a P, config: &'a AgentConfig) -> Self {
        Self {
            llm,
            places,
            config,
        }
    }

    /// Parse a free-text search request into structured specifics.
    pub async fn parse_user_search_request(
        &self,
        user_request: &str,
    ) -> Result<RequestSpecifics> {
        let request = LlmRequest {
            system: prompt::build_parse_request_system_prompt().to_string(),
            user: prompt::build_parse_request_prompt(user_request),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self.llm.complete(&request).await?;
        let specifics: RequestSpecifics =
            schema::REQUEST_SPECIFICS.parse_response(&response.content)?;

        info!(
            location = %specifics.location,
            search_type = %specifics.search_type,
            criteria = %specifics.criteria,
            "parsed user request"
        );

        Ok(specifics)
    }

    /// Run the full pipeline and return at most [`MAX_RECOMMENDATIONS`]
    /// ranked recommendations.
    pub async fn get_top_recommendations(
        &self,
        user_request: &str,
    ) -> Result<Vec<Recommendation>> {
        let specifics = self.parse_user_search_request(user_request).await?;

        let query = specifics.search_query();
        let place_ids = self.places.text_search(&query).await?;
        info!(query = %query, places = place_ids.len(), "places search complete");

        if place_ids.is_empty() {
            return Ok(Vec::new());
        }

        // One details fetch per identifier, sequentially, order preserved.
        let mut place_infos = Vec::with_capacity(place_ids.len());
        for place_id in &place_ids {
            let details = self.places.place_details(place_id).await?;
            place_infos.push(PlaceInfo::from_details(&details, &self.config.maps_api_key));
        }

        let recommendations = self
            .rank_recommendations(&specifics.criteria, &place_infos)
            .await?;
        info!(count = recommendations.len(), "recommendations ready");

        Ok(recommendations)
    }

    /// Ask the LLM to rank the collected candidates against the criteria.
    async fn rank_recommendations(
        &self,
        criteria: &str,
        place_infos: &[PlaceInfo],
    ) -> Result<Vec<Recommendation>> {
        let places_json = serde_json::to_string(place_infos)?;

        let request = LlmRequest {
            system: prompt::build_recommendations_system_prompt().to_string(),
            user: prompt::build_recommendations_prompt(criteria, &places_json),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(candidates = place_infos.len(), "ranking request");

        let response = self.llm.complete(&request).await?;
        let mut ranked: Recommendations =
            schema::RECOMMENDATIONS.parse_response(&response.content)?;

        ranked.recommendations.truncate(MAX_RECOMMENDATIONS);
        Ok(ranked.recommendations)
    }
}
