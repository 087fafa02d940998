//! Stateless post generation.
//!
//! [`GenerationService`] validates a description, wraps it in the generation
//! directive and forwards it to a [`TextGenerator`]. Every failure leaves the
//! service as one of `Validation`, `UpstreamEmptyResponse` or `Upstream`;
//! provider detail is logged under an incident id and never returned.

use crate::ai::TextGenerator;
use crate::models::GenerationRequest;
use crate::{prompts, Error, Result};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn TextGenerator>,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    pub async fn generate(&self, description: &str) -> Result<String> {
        self.handle(&GenerationRequest::new(description)).await
    }

    pub async fn handle(&self, request: &GenerationRequest) -> Result<String> {
        let description = request.validate()?;
        let prompt = prompts::build_prompt(description);

        match self.provider.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(chars = text.chars().count(), "Generated post");
                Ok(text)
            }
            Ok(_) | Err(Error::UpstreamEmptyResponse) => {
                warn!("Provider returned no usable text");
                Err(Error::UpstreamEmptyResponse)
            }
            Err(e) => {
                let incident = Uuid::new_v4();
                error!(%incident, "Error generating post: {}", e);
                Err(Error::Upstream)
            }
        }
    }
}
