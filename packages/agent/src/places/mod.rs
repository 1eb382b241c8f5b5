mod client;
mod details;
pub mod types;

pub use client::{GooglePlacesClient, PlacesClient};
#[cfg(any(test, feature = "test-utils"))]
pub use client::test_support::MockPlacesClient;
pub use types::PlaceDetails;
