//! Extraction of `PlaceInfo` records from raw place details.

use crate::places::types::PlaceDetails;
use crate::types::PlaceInfo;

/// Number of photo URLs constructed per place. Fewer references than this
/// yields no photo list at all (all-or-none).
const PHOTO_COUNT: usize = 3;

const PHOTO_URL_BASE: &str = "https://maps.googleapis.com/maps/api/place/photo";

impl PlaceInfo {
    /// Fold raw details into a `PlaceInfo` record.
    ///
    /// Fields the API did not return stay `None`; present values are copied
    /// verbatim. Opening hours come from the current-opening-hours weekday
    /// text when that path exists.
    pub fn from_details(details: &PlaceDetails, maps_api_key: &str) -> Self {
        let opening_hours = details
            .current_opening_hours
            .as_ref()
            .and_then(|hours| hours.weekday_text.clone());

        let photo_url = photo_urls(details, maps_api_key);

        Self {
            name: details.name.clone(),
            formatted_address: details.formatted_address.clone(),
            price_level: details.price_level,
            rating: details.rating,
            user_ratings_total: details.user_ratings_total,
            url: details.url.clone(),
            opening_hours,
            photo_url,
        }
    }
}

/// Construct the photo URL list: the first three photo references, or
/// `None` when fewer than three usable references exist. Partial lists are
/// never returned.
fn photo_urls(details: &PlaceDetails, maps_api_key: &str) -> Option<Vec<String>> {
    let photos = details.photos.as_ref()?;

    let references: Vec<&String> = photos
        .iter()
        .take(PHOTO_COUNT)
        .filter_map(|photo| photo.photo_reference.as_ref())
        .collect();

    if references.len() < PHOTO_COUNT {
        return None;
    }

    Some(
        references
            .into_iter()
            .map(|reference| {
                format!("{PHOTO_URL_BASE}?maxwidth=400&photoreference={reference}&key={maps_api_key}")
            })
            .collect(),
    )
}
