use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use storyforge_client::{ClientError, CompletionClient};
use storyforge_core::{ChatMessage, KeyFn};
use storyforge_store::MemoryStore;
use tokio::net::TcpListener;

use crate::routes::{build_router, InnerAppState};

/// Canned completion client: fixed replies, per-kind invocation counters,
/// and an optional always-fail mode for exercising the error path.
pub struct StubClient {
    reply: String,
    image_url: String,
    fail: bool,
    pub chat_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
}

impl StubClient {
    pub fn new(reply: &str, image_url: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            image_url: image_url.to_string(),
            fail: false,
            chat_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
        })
    }

    /// A client whose every call counts as an attempt and then fails.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: String::new(),
            image_url: String::new(),
            fail: true,
            chat_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
        })
    }

    fn failure() -> ClientError {
        ClientError::Api {
            status: 500,
            body: "stub failure".into(),
        }
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, ClientError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::failure());
        }
        Ok(self.reply.clone())
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String, ClientError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::failure());
        }
        Ok(self.image_url.clone())
    }
}

/// Router over a fresh in-memory store and the default key derivation.
pub fn test_router(client: Arc<StubClient>) -> Router {
    test_router_with_key(client, Arc::new(storyforge_core::default_key))
}

/// Router with an injected key derivation, for collision tests.
pub fn test_router_with_key(client: Arc<StubClient>, derive_key: KeyFn) -> Router {
    let state = Arc::new(InnerAppState {
        client,
        store: Arc::new(MemoryStore::new()),
        derive_key,
    });
    build_router(state)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    pub client: Arc<StubClient>,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn a server on a random port, backed by the given stub client.
pub async fn spawn_test_server(client: Arc<StubClient>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = test_router(client.clone());
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        client,
        _handle: handle,
    }
}
