use thiserror::Error;

/// Model identifier used when `LLM_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Sampling temperature for every text-generation call.
pub const MODEL_TEMPERATURE: f64 = 0.2;

/// Output-length bound for every text-generation call.
pub const MODEL_MAX_TOKENS: u64 = 2048;

/// Upper bound on reason/act/observe turns per orchestrator run.
pub const MAX_AGENT_TURNS: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Process configuration, read once at startup. A missing required variable
/// aborts the process before any listener is bound.
#[derive(Debug, Clone)]
pub struct Settings {
    pub knowledge_base_id: String,
    pub knowledge_base_region: String,
    pub materials_bucket: String,
    pub knowledge_base_url: String,
    pub knowledge_base_api_key: Option<String>,
    pub stability_api_key: Option<String>,
    pub llm_model: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds settings from any variable source. Tests drive this with maps
    /// instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| -> Result<String, ConfigError> {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(var))
        };
        let optional = |var: &'static str| -> Option<String> {
            lookup(var).filter(|value| !value.trim().is_empty())
        };

        let knowledge_base_id = required("KNOWLEDGE_BASE_ID")?;
        let knowledge_base_region = required("KNOWLEDGE_BASE_REGION")?;
        let materials_bucket = required("MATERIALS_BUCKET")?;

        let knowledge_base_url = optional("KNOWLEDGE_BASE_URL").unwrap_or_else(|| {
            format!("https://kb-runtime.{knowledge_base_region}.managed-retrieval.io")
        });

        let server_host = optional("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let server_port = optional("SERVER_PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "SERVER_PORT",
                reason: e.to_string(),
            })?;

        let cors_allowed_origins = optional("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            knowledge_base_id,
            knowledge_base_region,
            materials_bucket,
            knowledge_base_url,
            knowledge_base_api_key: optional("KNOWLEDGE_BASE_API_KEY"),
            stability_api_key: optional("STABILITY_API_KEY"),
            llm_model: optional("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            server_host,
            server_port,
            cors_allowed_origins,
        })
    }
}
