use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM API error (status {status}): {message}")]
    LlmApiError { status: u16, message: String },

    #[error("LLM returned empty response")]
    LlmEmptyResponse,

    #[error("failed to parse LLM response: {0}")]
    LlmResponseParse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("places API error (status {status}): {message}")]
    PlacesApiError { status: u16, message: String },

    #[error("places API returned status {status}: {message}")]
    PlacesStatus { status: String, message: String },
}

pub type Result<T> = std::result::Result<T, AgentError>;
