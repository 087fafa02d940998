//! AI provider integration for post generation
//!
//! The rest of the crate only sees [`TextGenerator`]: one prompt in, one text
//! payload out. Gemini is the production provider; the mock is used by tests
//! and local harnesses.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiTextClient;
pub use mock::{MockReply, MockTextGenerator};

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single prompt and return the provider's text verbatim.
    ///
    /// Implementations return `Error::UpstreamEmptyResponse` when the provider
    /// answers without usable text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
