pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod places;
pub mod types;

pub use agent::{Agent, MAX_RECOMMENDATIONS};
pub use config::{AgentConfig, LlmBackend};
pub use error::{AgentError, Result};
pub use types::{PlaceInfo, Recommendation, Recommendations, RequestSpecifics};
