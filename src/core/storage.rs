//! Key-value storage abstractions backing the quote store.

use super::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Collection holding the durable mirror of the quote list.
pub const DURABLE_COLLECTION: &str = "local";
/// Collection living only for the current session.
pub const SESSION_COLLECTION: &str = "session";

pub const QUOTES_KEY: &str = "quotes";
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";
pub const LAST_QUOTE_KEY: &str = "lastQuote";

/// A named set of string values.
#[async_trait]
pub trait KeyValueCollection: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites whatever is stored under `key`.
    async fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// Hands out collections by name.
pub trait Store {
    /// Returns the collection called `name`, creating it when
    /// `create_if_missing` is set. Persistent collections survive restarts.
    fn get_collection(
        &self,
        name: &str,
        persist: bool,
        create_if_missing: bool,
    ) -> Option<Arc<dyn KeyValueCollection>>;
}
