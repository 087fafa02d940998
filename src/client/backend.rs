use crate::models::{GenerationReply, GenerationRequest, DEFAULT_SERVER_URL};
use crate::service::GenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Where a [`GenerationClient`](super::GenerationClient) sends descriptions.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, description: &str) -> Result<String>;
}

#[async_trait]
impl GenerationBackend for GenerationService {
    async fn generate(&self, description: &str) -> Result<String> {
        GenerationService::generate(self, description).await
    }
}

/// Talks to a running server over `POST /api/submit`.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::new_with_client(base_url, Client::new())
    }

    pub fn new_with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

#[async_trait]
impl GenerationBackend for HttpBackend {
    async fn generate(&self, description: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/api/submit", self.base_url))
            .json(&GenerationRequest::new(description))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach generation server: {}", e);
                e
            })?;

        let status = response.status();
        let body = response.text().await?;
        let reply: Option<GenerationReply> = serde_json::from_str(&body).ok();

        match (status, reply) {
            (StatusCode::OK, Some(GenerationReply::Success(ok))) => Ok(ok.tweet),
            (StatusCode::BAD_REQUEST, Some(GenerationReply::Failure(err))) => {
                Err(Error::Validation(err.error))
            }
            (StatusCode::BAD_REQUEST, _) => {
                Err(Error::Validation("Description is required.".to_string()))
            }
            (status, reply) => {
                tracing::error!("Generation server error (status {}): {:?}", status, reply);
                Err(Error::Upstream)
            }
        }
    }
}
