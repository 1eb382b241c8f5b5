use serde::{Deserialize, Serialize};

/// Structured search parameters extracted from a free-text request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestSpecifics {
    pub location: String,
    pub search_type: String,
    pub criteria: String,
}

impl RequestSpecifics {
    /// The text-search query: location, search type and criteria joined
    /// with single spaces, in that order.
    pub fn search_query(&self) -> String {
        format!("{} {} {}", self.location, self.search_type, self.criteria)
    }
}

/// Collected details for a single place, fed to the ranking step.
///
/// Every field is optional: `None` marks data the places API did not
/// return, as opposed to a present-but-empty value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceInfo {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub price_level: Option<i64>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub url: Option<String>,
    /// Per-weekday opening hours text, when the API reports them.
    pub opening_hours: Option<Vec<String>>,
    /// Exactly three constructed photo URLs, or `None` when fewer than
    /// three photo references were available.
    pub photo_url: Option<Vec<String>>,
}

/// A single ranked recommendation produced by the LLM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub photo_url: Vec<String>,
    pub maps_location_url: String,
    pub selection_reason: String,
    pub summary: String,
}

/// The ranked recommendation list, as the LLM returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub recommendations: Vec<Recommendation>,
}
