pub mod disk;
pub mod memory;

use crate::core::error::Result;
use crate::core::storage::{KeyValueCollection, Store};
use disk::DiskCollection;
use fjall::{Keyspace, PartitionCreateOptions};
use memory::MemoryCollection;
use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, RwLock},
};
use tracing::{debug, error};

/// A thread-safe key-value store that can hold multiple collections.
///
/// Persistent collections live in a fjall keyspace; the others are kept in
/// memory and vanish with the process.
pub struct KeyValueStore {
    collections: RwLock<HashMap<String, Arc<dyn KeyValueCollection>>>,
    keyspace: Keyspace,
}

impl KeyValueStore {
    /// Opens (or creates) the keyspace under `path`.
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;
        let keyspace = fjall::Config::new(path.join("store")).open()?;
        debug!("Opened keyspace at {}", path.display());

        Ok(Self {
            collections: RwLock::new(HashMap::new()),
            keyspace,
        })
    }

    fn create_collection(&self, name: &str, persist: bool) -> Option<Arc<dyn KeyValueCollection>> {
        if !persist {
            return Some(Arc::new(MemoryCollection::new()));
        }

        match self
            .keyspace
            .open_partition(name, PartitionCreateOptions::default())
        {
            Ok(partition) => Some(Arc::new(DiskCollection::new(
                self.keyspace.clone(),
                partition,
            ))),
            Err(e) => {
                error!(error = %e, collection = name, "Failed to open partition");
                None
            }
        }
    }
}

impl Store for KeyValueStore {
    fn get_collection(
        &self,
        name: &str,
        persist: bool,
        create_if_missing: bool,
    ) -> Option<Arc<dyn KeyValueCollection>> {
        if let Ok(collections) = self.collections.read() {
            if let Some(collection) = collections.get(name) {
                return Some(Arc::clone(collection));
            }
        }

        if !create_if_missing {
            return None;
        }

        let mut collections = self.collections.write().ok()?;
        // Another caller may have created it between the two locks
        if let Some(collection) = collections.get(name) {
            return Some(Arc::clone(collection));
        }
        let collection = self.create_collection(name, persist)?;
        collections.insert(name.to_string(), Arc::clone(&collection));
        Some(collection)
    }
}
