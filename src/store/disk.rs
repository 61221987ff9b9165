use crate::core::error::{QuoteError, Result};
use crate::core::storage::KeyValueCollection;
use async_trait::async_trait;
use fjall::{Keyspace, PartitionHandle, PersistMode};
use tracing::debug;

/// Durable collection backed by a fjall partition. Every write is flushed
/// to disk before returning.
pub struct DiskCollection {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskCollection {
    pub fn new(keyspace: Keyspace, partition: PartitionHandle) -> Self {
        Self {
            keyspace,
            partition,
        }
    }

    fn flush(&self) -> Result<()> {
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueCollection for DiskCollection {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self.partition.get(key.as_bytes())? {
            Some(value) => {
                debug!("Disk HIT for key: {}", key);
                let text = String::from_utf8(value.to_vec()).map_err(|e| {
                    QuoteError::StorageParse(format!("value for {key} is not UTF-8: {e}"))
                })?;
                Ok(Some(text))
            }
            None => {
                debug!("Disk MISS for key: {}", key);
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.partition.insert(key.as_bytes(), value.as_bytes())?;
        self.flush()?;
        debug!("Disk PUT for key: {}", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fjall::PartitionCreateOptions;
    use tempfile::tempdir;

    fn open_collection(path: &std::path::Path) -> DiskCollection {
        let keyspace = fjall::Config::new(path).open().unwrap();
        let partition = keyspace
            .open_partition("test", PartitionCreateOptions::default())
            .unwrap();
        DiskCollection::new(keyspace, partition)
    }

    #[tokio::test]
    async fn test_disk_get_put() {
        let dir = tempdir().unwrap();
        let collection = open_collection(dir.path());

        // Initially, collection is empty
        assert!(collection.get("key1").await.unwrap().is_none());

        collection.put("key1", "[1,2,3]").await.unwrap();
        assert_eq!(
            collection.get("key1").await.unwrap().as_deref(),
            Some("[1,2,3]")
        );

        // Get a non-existent key
        assert!(collection.get("key2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_disk_put_overwrites() {
        let dir = tempdir().unwrap();
        let collection = open_collection(dir.path());

        collection.put("key1", "a").await.unwrap();
        collection.put("key1", "b").await.unwrap();
        assert_eq!(collection.get("key1").await.unwrap().as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_disk_get_rejects_non_utf8() {
        let dir = tempdir().unwrap();
        let collection = open_collection(dir.path());
        collection
            .partition
            .insert(b"key1".as_slice(), &[0xff_u8, 0xfe][..])
            .unwrap();

        let result = collection.get("key1").await;
        assert!(matches!(result, Err(QuoteError::StorageParse(_))));
    }
}
