use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use storyforge_client::AzureOpenAi;
use storyforge_server::config::ServerConfig;
use storyforge_server::InnerAppState;
use storyforge_store::MemoryStore;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    let client = AzureOpenAi::new(config.azure())?;
    let state = Arc::new(InnerAppState {
        client: Arc::new(client),
        store: Arc::new(MemoryStore::new()),
        derive_key: Arc::new(storyforge_core::default_key),
    });

    let addr = SocketAddr::new(config.bind.parse()?, config.port);
    let listener = TcpListener::bind(addr).await?;
    info!("storyforge-server listening on http://{addr}");
    info!("chat deployment: {}", config.openai_deployment);
    info!("image deployment: {}", config.openai_image_deployment);

    storyforge_server::serve(listener, state).await
}
