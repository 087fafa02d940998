use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::models::{Config, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_TIMEOUT_SECS};
use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;

/// Transport for Gemini's `generateContent` endpoint.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiHttpClient {
    /// `model` is a bare model ID such as `gemini-1.5-flash`; a leading
    /// `models/` is dropped.
    pub fn new(api_key: String, model: String, client: Client) -> Self {
        let model = match model.strip_prefix("models/") {
            Some(bare) => bare.to_string(),
            None => model,
        };

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &Config, client: Client) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            client,
        )
        .with_base_url(config.gemini_base_url.clone())
        .with_timeout(config.gemini_timeout)
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        tracing::debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Gemini request did not complete: {}", e))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(%status, "Gemini rejected request: {}", body);
            return Err(Error::AiProvider(format!("Gemini status {}: {}", status, body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Unreadable Gemini body ({}): {}", e, body);
            Error::AiProvider(format!("unreadable Gemini body: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_models_prefix() {
        let http = GeminiHttpClient::new(
            "key".to_string(),
            "models/gemini-1.5-flash".to_string(),
            Client::new(),
        )
        .with_base_url("http://localhost:9999/".to_string());

        assert_eq!(http.model(), "gemini-1.5-flash");
        assert_eq!(
            http.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_new_uses_default_timeout() {
        let http = GeminiHttpClient::new(String::new(), "m".to_string(), Client::new());
        assert_eq!(
            http.timeout,
            Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_from_config_carries_timeout() {
        let config = Config {
            gemini_timeout: Duration::from_secs(7),
            ..Config::default()
        };
        let http = GeminiHttpClient::from_config(&config, Client::new());
        assert_eq!(http.timeout, Duration::from_secs(7));
        assert_eq!(http.base_url, DEFAULT_GEMINI_BASE_URL);
    }
}
