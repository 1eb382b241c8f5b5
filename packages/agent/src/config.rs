use crate::error::{AgentError, Result};

/// Which LLM backend the agent is bound to.
///
/// Resolved once at construction; there is no runtime fallthrough between
/// backends. Both speak the OpenAI-compatible chat completions protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    Groq,
    OpenAi,
}

impl LlmBackend {
    /// Default model identifier for this backend.
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmBackend::Groq => "llama-3.1-70b-versatile",
            LlmBackend::OpenAi => "gpt-4o-mini",
        }
    }

    /// Default API base URL for this backend.
    ///
    /// Groq serves the OpenAI wire format under the `/openai` prefix, so
    /// both backends resolve chat completions at `{base}/v1/chat/completions`.
    pub fn default_api_base_url(&self) -> &'static str {
        match self {
            LlmBackend::Groq => "https://api.groq.com/openai",
            LlmBackend::OpenAi => "https://api.openai.com",
        }
    }
}

/// Configuration for the recommendation agent.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub backend: LlmBackend,
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_api_base_url: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// May be empty; the places API then rejects the first request with
    /// REQUEST_DENIED rather than failing at construction.
    pub maps_api_key: String,
    pub maps_api_base_url: String,
}

const DEFAULT_MAPS_API_BASE_URL: &str = "https://maps.googleapis.com";

impl AgentConfig {
    /// Load configuration from environment variables.
    ///
    /// `GROQ_API_KEY` takes precedence over `OPENAI_API_KEY`; at least one
    /// must be set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through a variable lookup. `from_env` passes
    /// the process environment; tests pass a map.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let (backend, llm_api_key) = if let Some(key) = lookup("GROQ_API_KEY") {
            (LlmBackend::Groq, key)
        } else if let Some(key) = lookup("OPENAI_API_KEY") {
            (LlmBackend::OpenAi, key)
        } else {
            return Err(AgentError::Config(
                "no LLM credential: set GROQ_API_KEY or OPENAI_API_KEY".into(),
            ));
        };

        let llm_model = lookup("LLM_MODEL").unwrap_or_else(|| backend.default_model().into());

        let llm_api_base_url =
            lookup("LLM_API_BASE_URL").unwrap_or_else(|| backend.default_api_base_url().into());

        let temperature = lookup("LLM_TEMPERATURE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0);

        let max_tokens = lookup("LLM_MAX_TOKENS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(2048);

        let timeout_secs = lookup("LLM_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(120);

        let maps_api_key = lookup("GOOGLE_MAPS_API_KEY").unwrap_or_default();

        let maps_api_base_url =
            lookup("MAPS_API_BASE_URL").unwrap_or_else(|| DEFAULT_MAPS_API_BASE_URL.into());

        Ok(Self {
            backend,
            llm_api_key,
            llm_model,
            llm_api_base_url,
            temperature,
            max_tokens,
            timeout_secs,
            maps_api_key,
            maps_api_base_url,
        })
    }

    /// Create a config builder for testing.
    pub fn builder(llm_api_key: impl Into<String>) -> AgentConfigBuilder {
        let backend = LlmBackend::OpenAi;
        AgentConfigBuilder {
            backend,
            llm_api_key: llm_api_key.into(),
            llm_model: backend.default_model().into(),
            llm_api_base_url: backend.default_api_base_url().into(),
            temperature: 0.0,
            max_tokens: 2048,
            timeout_secs: 120,
            maps_api_key: String::new(),
            maps_api_base_url: DEFAULT_MAPS_API_BASE_URL.into(),
        }
    }
}

/// Builder for constructing `AgentConfig` in tests.
pub struct AgentConfigBuilder {
    backend: LlmBackend,
    llm_api_key: String,
    llm_model: String,
    llm_api_base_url: String,
    temperature: f64,
    max_tokens: u32,
    timeout_secs: u64,
    maps_api_key: String,
    maps_api_base_url: String,
}

impl AgentConfigBuilder {
    pub fn backend(mut self, backend: LlmBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn llm_model(mut self, llm_model: impl Into<String>) -> Self {
        self.llm_model = llm_model.into();
        self
    }

    pub fn llm_api_base_url(mut self, llm_api_base_url: impl Into<String>) -> Self {
        self.llm_api_base_url = llm_api_base_url.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn maps_api_key(mut self, maps_api_key: impl Into<String>) -> Self {
        self.maps_api_key = maps_api_key.into();
        self
    }

    pub fn maps_api_base_url(mut self, maps_api_base_url: impl Into<String>) -> Self {
        self.maps_api_base_url = maps_api_base_url.into();
        self
    }

    pub fn build(self) -> AgentConfig {
        AgentConfig {
            backend: self.backend,
            llm_api_key: self.llm_api_key,
            llm_model: self.llm_model,
            llm_api_base_url: self.llm_api_base_url,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout_secs: self.timeout_secs,
            maps_api_key: self.maps_api_key,
            maps_api_base_url: self.maps_api_base_url,
        }
    }
}
