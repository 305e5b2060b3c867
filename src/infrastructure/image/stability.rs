use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ports::ImageService, DomainError};
use crate::infrastructure::config::Settings;

const STABILITY_API_URL: &str = "https://api.stability.ai";

/// Engine identifier, fixed for every generation call.
const ENGINE_ID: &str = "stable-diffusion-xl-1024-v1-0";

/// Prompt-adherence factor passed to the diffusion model.
const CFG_SCALE: f32 = 7.0;

/// Diffusion step count.
const STEPS: u32 = 30;

/// Client for the hosted text-to-image model. Fidelity parameters are fixed;
/// only the prompt varies per call. No retry, no backoff, no timeout.
pub struct StabilityImageClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    text_prompts: Vec<TextPrompt<'a>>,
    cfg_scale: f32,
    steps: u32,
    samples: u32,
}

#[derive(Debug, Serialize)]
struct TextPrompt<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    artifacts: Vec<Artifact>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    base64: String,
}

impl StabilityImageClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: STABILITY_API_URL.to_string(),
            api_key: settings.stability_api_key.clone(),
        }
    }

    fn first_artifact(response: GenerationResponse) -> Result<String, DomainError> {
        response
            .artifacts
            .into_iter()
            .next()
            .map(|artifact| artifact.base64)
            .ok_or_else(|| DomainError::external("image service returned no artifacts"))
    }
}

#[async_trait]
impl ImageService for StabilityImageClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let url = format!(
            "{}/v1/generation/{}/text-to-image",
            self.base_url, ENGINE_ID
        );

        let mut request = self.client.post(&url).json(&GenerationRequest {
            text_prompts: vec![TextPrompt { text: prompt }],
            cfg_scale: CFG_SCALE,
            steps: STEPS,
            samples: 1,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::external(format!("image service request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::external(format!(
                "image service returned {status}: {body}"
            )));
        }

        let parsed: GenerationResponse = response
            .json()
            .await
            .map_err(|e| DomainError::external(format!("image service response invalid: {e}")))?;

        Self::first_artifact(parsed)
    }
}
