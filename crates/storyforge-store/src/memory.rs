use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use storyforge_core::{StoryEntry, WireframeEntry};

use crate::{ResponseStore, StoreError};

/// Process-lifetime in-memory store.
///
/// Each operation takes the relevant lock for its duration only; the
/// external completion call always happens between a miss and the
/// corresponding put. Two concurrent misses for one key therefore both
/// reach the service and the second write wins, matching the behavior of
/// the unsynchronized dictionary this replaces. Entries are never evicted.
#[derive(Default)]
pub struct MemoryStore {
    stories: Mutex<HashMap<String, StoryEntry>>,
    wireframes: Mutex<HashMap<String, WireframeEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned(which: &str) -> StoreError {
        StoreError::Internal(format!("{which} lock poisoned"))
    }
}

#[async_trait]
impl ResponseStore for MemoryStore {
    async fn get_stories(&self, key: &str) -> Result<Option<StoryEntry>, StoreError> {
        let map = self
            .stories
            .lock()
            .map_err(|_| Self::lock_poisoned("stories"))?;
        Ok(map.get(key).cloned())
    }

    async fn put_stories(&self, key: &str, entry: StoryEntry) -> Result<(), StoreError> {
        let mut map = self
            .stories
            .lock()
            .map_err(|_| Self::lock_poisoned("stories"))?;
        map.insert(key.to_string(), entry);
        Ok(())
    }

    async fn attach_tests(&self, key: &str, test_html: String) -> Result<(), StoreError> {
        let mut map = self
            .stories
            .lock()
            .map_err(|_| Self::lock_poisoned("stories"))?;
        match map.get_mut(key) {
            Some(entry) => {
                entry.test_html = Some(test_html);
                Ok(())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    async fn get_wireframe(&self, key: &str) -> Result<Option<WireframeEntry>, StoreError> {
        let map = self
            .wireframes
            .lock()
            .map_err(|_| Self::lock_poisoned("wireframes"))?;
        Ok(map.get(key).cloned())
    }

    async fn put_wireframe(&self, key: &str, entry: WireframeEntry) -> Result<(), StoreError> {
        let mut map = self
            .wireframes
            .lock()
            .map_err(|_| Self::lock_poisoned("wireframes"))?;
        map.insert(key.to_string(), entry);
        Ok(())
    }
}
