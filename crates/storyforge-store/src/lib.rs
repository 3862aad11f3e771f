mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use storyforge_core::{StoryEntry, WireframeEntry};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Internal(String),
}

/// A store for generated results, keyed by the id derived from feature text.
///
/// Stories and wireframes are cached independently, keyed the same way.
/// Handlers program against this trait; `MemoryStore` is the default
/// process-lifetime implementation and a bounded or TTL-based store can be
/// swapped in without touching handler logic.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Look up the stories entry for a key.
    async fn get_stories(&self, key: &str) -> Result<Option<StoryEntry>, StoreError>;

    /// Write (create or overwrite) the stories entry for a key.
    async fn put_stories(&self, key: &str, entry: StoryEntry) -> Result<(), StoreError>;

    /// Attach generated test markup to an existing stories entry.
    /// Returns `StoreError::NotFound` if no entry exists for the key.
    async fn attach_tests(&self, key: &str, test_html: String) -> Result<(), StoreError>;

    /// Look up the wireframe entry for a key.
    async fn get_wireframe(&self, key: &str) -> Result<Option<WireframeEntry>, StoreError>;

    /// Write (create or overwrite) the wireframe entry for a key.
    async fn put_wireframe(&self, key: &str, entry: WireframeEntry) -> Result<(), StoreError>;
}
