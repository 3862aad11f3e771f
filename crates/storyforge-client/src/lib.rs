mod azure;

pub use azure::{AzureConfig, AzureOpenAi};

use async_trait::async_trait;
use storyforge_core::ChatMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (connect, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The service answered 2xx but the body was not in the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Abstraction over the hosted completion service.
///
/// Route handlers program against this trait; `AzureOpenAi` is the real
/// implementation and tests substitute a stub. Each call is one blocking
/// suspension point with no retries: a single failure surfaces as a single
/// request failure.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one chat completion and return the first candidate's text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ClientError>;

    /// Issue one image generation and return the first image's URL.
    async fn generate_image(&self, prompt: &str) -> Result<String, ClientError>;
}
