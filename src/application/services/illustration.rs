use std::collections::HashMap;
use std::sync::Arc;

use tracing::instrument;

use crate::application::prompts::Prompts;
use crate::domain::{ports::ImageService, DomainError, ImageReply};

/// Produces educational diagrams through the hosted image model.
pub struct IllustrationService {
    image: Arc<dyn ImageService>,
    prompts: Arc<Prompts>,
}

impl IllustrationService {
    pub fn new(image: Arc<dyn ImageService>, prompts: Arc<Prompts>) -> Self {
        Self { image, prompts }
    }

    /// Wraps the description in the diagram framing and generates one image.
    #[instrument(skip(self))]
    pub async fn illustrate(&self, description: &str) -> Result<ImageReply, DomainError> {
        let vars = HashMap::from([("description".to_string(), description.to_string())]);
        let prompt = Prompts::render(&self.prompts.image.framing, &vars);

        let image = self.image.generate(&prompt).await?;

        Ok(ImageReply { image })
    }
}
