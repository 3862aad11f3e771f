use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use storyforge_core::ChatMessage;

use crate::{ClientError, CompletionClient};

/// Matches the temperature used for every generation stage.
const TEMPERATURE: f64 = 0.5;

/// Connection settings for an Azure OpenAI resource.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    /// Deployment name for chat completions.
    pub chat_deployment: String,
    /// Deployment name for image generation.
    pub image_deployment: String,
    /// Upper bound on one request; a timeout surfaces as a transport error.
    pub timeout_secs: u64,
}

/// Chat-completion and image-generation client for Azure OpenAI.
pub struct AzureOpenAi {
    config: AzureConfig,
    client: Client,
}

impl AzureOpenAi {
    pub fn new(config: AzureConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn deployment_url(&self, deployment: &str, operation: &str) -> String {
        format!(
            "{}/openai/deployments/{}/{}?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            deployment,
            operation,
            self.config.api_version,
        )
    }

    async fn post(&self, url: &str, body: serde_json::Value) -> Result<String, ClientError> {
        let resp = self
            .client
            .post(url)
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionClient for AzureOpenAi {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ClientError> {
        let url = self.deployment_url(&self.config.chat_deployment, "chat/completions");
        let body = json!({
            "temperature": TEMPERATURE,
            "messages": messages,
        });
        let text = self.post(&url, body).await?;
        first_choice(&text)
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, ClientError> {
        let url = self.deployment_url(&self.config.image_deployment, "images/generations");
        let body = json!({
            "prompt": prompt,
            "n": 1,
            "quality": "standard",
        });
        let text = self.post(&url, body).await?;
        first_image_url(&text)
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Extract the first candidate's text from a chat-completion body.
fn first_choice(body: &str) -> Result<String, ClientError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Malformed(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| ClientError::Malformed("no completion content in response".into()))
}

#[derive(Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

/// Extract the first generated image's URL from an image-generation body.
fn first_image_url(body: &str) -> Result<String, ClientError> {
    let parsed: ImageResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Malformed(e.to_string()))?;
    parsed
        .data
        .into_iter()
        .next()
        .and_then(|d| d.url)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ClientError::Malformed("no image url in response".into()))
}
