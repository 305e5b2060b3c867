use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::application::IllustrationService;
use crate::domain::ToolReply;

#[derive(Debug, thiserror::Error)]
#[error("Image generator error: {0}")]
pub struct ImageGeneratorError(pub String);

#[derive(Debug, Deserialize, Serialize)]
pub struct ImageGeneratorArgs {
    pub prompt: String,
}

/// Produces an educational diagram as a base64-encoded image.
pub struct ImageGeneratorTool {
    service: Arc<IllustrationService>,
}

impl ImageGeneratorTool {
    pub fn new(service: Arc<IllustrationService>) -> Self {
        Self { service }
    }
}

impl Tool for ImageGeneratorTool {
    const NAME: &'static str = "image_generator";

    type Error = ImageGeneratorError;
    type Args = ImageGeneratorArgs;
    type Output = ToolReply;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Generate an educational diagram from a text description. Returns the \
                          image as a base64-encoded string."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "prompt": {
                        "type": "string",
                        "description": "What the diagram should show"
                    }
                },
                "required": ["prompt"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let reply = self
            .service
            .illustrate(&args.prompt)
            .await
            .map_err(|e| ImageGeneratorError(e.to_string()))?;

        Ok(ToolReply::ImageGenerator(reply))
    }
}
