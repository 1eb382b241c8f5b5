mod client;
pub mod prompt;
pub mod schema;

pub use client::{ChatCompletionsClient, LlmClient, LlmRequest, LlmResponse};
#[cfg(any(test, feature = "test-utils"))]
pub use client::test_support::MockLlmClient;
pub use schema::{OutputSchema, SchemaField};
