//! In-process query cache.
//!
//! A guarded hash map is enough for a single-process deployment; the port
//! keeps the door open for an external cache later without touching the
//! service layer.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::ports::query_cache::{CacheError, QueryCache};

/// [`QueryCache`] backed by an in-memory map.
#[derive(Debug, Default)]
pub struct MemoryQueryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryQueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QueryCache for MemoryQueryCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), CacheError> {
        self.entries.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn invalidate_prefix(&self, prefix: &str) -> Result<(), CacheError> {
        self.entries
            .write()
            .await
            .retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}
