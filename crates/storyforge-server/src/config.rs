use clap::Parser;
use storyforge_client::AzureConfig;

#[derive(Debug, Parser)]
#[command(name = "storyforge-server", about = "Storyforge generation server")]
pub struct ServerConfig {
    /// Bind address
    #[arg(long, env = "STORYFORGE_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Listen port
    #[arg(long, env = "STORYFORGE_PORT", default_value = "3000")]
    pub port: u16,

    /// Azure OpenAI resource endpoint, e.g. https://my-resource.openai.azure.com
    #[arg(long, env = "OPENAI_ENDPOINT")]
    pub openai_endpoint: String,

    /// API key for the Azure OpenAI resource
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// API version sent with every request
    #[arg(long, env = "OPENAI_API_VERSION", default_value = "2023-08-01-preview")]
    pub openai_api_version: String,

    /// Deployment name used for chat completions
    #[arg(long, env = "OPENAI_DEPLOYMENT")]
    pub openai_deployment: String,

    /// Deployment name used for wireframe image generation
    #[arg(long, env = "OPENAI_IMAGE_DEPLOYMENT")]
    pub openai_image_deployment: String,

    /// Upper bound on one completion request (seconds)
    #[arg(long, env = "STORYFORGE_REQUEST_TIMEOUT", default_value = "120")]
    pub request_timeout: u64,
}

impl ServerConfig {
    pub fn azure(&self) -> AzureConfig {
        AzureConfig {
            endpoint: self.openai_endpoint.clone(),
            api_key: self.openai_api_key.clone(),
            api_version: self.openai_api_version.clone(),
            chat_deployment: self.openai_deployment.clone(),
            image_deployment: self.openai_image_deployment.clone(),
            timeout_secs: self.request_timeout,
        }
    }
}
