use crate::core::error::Result;
use crate::core::storage::KeyValueCollection;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory collection, dropped with the process.
#[derive(Clone)]
pub struct MemoryCollection {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for MemoryCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueCollection for MemoryCollection {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.inner.lock().await;
        let value = map.get(key).cloned();
        if value.is_some() {
            debug!("Memory HIT for key: {}", key);
        } else {
            debug!("Memory MISS for key: {}", key);
        }
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.inner.lock().await;
        debug!("Memory PUT for key: {}", key);
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
