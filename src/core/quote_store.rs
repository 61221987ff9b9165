//! The quote store: sole owner of the in-memory quote list, mirrored in full
//! to durable storage on every mutation.

use super::error::{QuoteError, Result};
use super::events::QuoteObserver;
use super::merge::merge;
use super::quote::{Quote, seed_quotes};
use super::storage::{KeyValueCollection, QUOTES_KEY};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub struct QuoteStore {
    quotes: Mutex<Vec<Quote>>,
    durable: Arc<dyn KeyValueCollection>,
    observer: Arc<dyn QuoteObserver>,
}

impl QuoteStore {
    /// Creates an empty store; call [`QuoteStore::load`] to populate it.
    pub fn new(durable: Arc<dyn KeyValueCollection>, observer: Arc<dyn QuoteObserver>) -> Self {
        Self {
            quotes: Mutex::new(Vec::new()),
            durable,
            observer,
        }
    }

    /// Creates a store and loads the persisted list into it.
    pub async fn open(
        durable: Arc<dyn KeyValueCollection>,
        observer: Arc<dyn QuoteObserver>,
    ) -> Result<Self> {
        let store = Self::new(durable, observer);
        store.load().await?;
        Ok(store)
    }

    /// Reads the mirror into memory. When the mirror is absent or unparsable
    /// the seed list is used and written back, so seeding happens once.
    pub async fn load(&self) -> Result<Vec<Quote>> {
        let mut quotes = self.quotes.lock().await;

        let loaded = match self.read_raw().await? {
            Some(raw) => match parse_quotes(&raw) {
                Ok(list) => {
                    debug!(count = list.len(), "Loaded quotes from storage");
                    Some(list)
                }
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable stored quotes");
                    None
                }
            },
            None => None,
        };

        let list = match loaded {
            Some(list) => list,
            None => {
                let seed = seed_quotes();
                self.write_mirror(&seed).await?;
                info!(count = seed.len(), "Seeded quote storage");
                seed
            }
        };

        *quotes = list.clone();
        Ok(list)
    }

    /// Reads the mirror without touching the in-memory list. Missing or
    /// malformed data is an empty list.
    pub async fn read_persisted(&self) -> Result<Vec<Quote>> {
        let Some(raw) = self.read_raw().await? else {
            return Ok(Vec::new());
        };
        match parse_quotes(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!(error = %e, "Treating unreadable stored quotes as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Raw mirror value. Bytes the backend cannot decode count as absent.
    async fn read_raw(&self) -> Result<Option<String>> {
        match self.durable.get(QUOTES_KEY).await {
            Err(QuoteError::StorageParse(e)) => {
                warn!(error = %e, "Stored quotes are not readable text");
                Ok(None)
            }
            other => other,
        }
    }

    /// Snapshot of the current list.
    pub async fn quotes(&self) -> Vec<Quote> {
        self.quotes.lock().await.clone()
    }

    /// Adds `quote` to the end of the list and rewrites the mirror. The store
    /// is left unchanged when validation or the write fails.
    pub async fn append(&self, quote: Quote) -> Result<()> {
        quote.validate()?;

        let mut quotes = self.quotes.lock().await;
        quotes.push(quote);
        if let Err(e) = self.write_mirror(&quotes).await {
            quotes.pop();
            return Err(e);
        }
        debug!(count = quotes.len(), "Appended quote");
        self.observer.on_quotes_changed(&quotes);
        Ok(())
    }

    /// Appends every entry of `imported` without deduplication. Either all
    /// entries are added or none are.
    pub async fn import(&self, imported: Vec<Quote>) -> Result<usize> {
        for quote in &imported {
            quote.validate()?;
        }

        let added = imported.len();
        let mut quotes = self.quotes.lock().await;
        let previous_len = quotes.len();
        quotes.extend(imported);
        if let Err(e) = self.write_mirror(&quotes).await {
            quotes.truncate(previous_len);
            return Err(e);
        }
        info!(added, total = quotes.len(), "Imported quotes");
        self.observer.on_quotes_changed(&quotes);
        Ok(added)
    }

    /// Overwrites the in-memory list and the mirror. Readers never observe
    /// one without the other.
    pub async fn replace(&self, list: Vec<Quote>) -> Result<()> {
        let mut quotes = self.quotes.lock().await;
        self.replace_locked(&mut quotes, list).await
    }

    /// Merges the persisted list with `remote` and replaces both copies with
    /// the result. Returns how many persisted quotes went in and how many
    /// came out.
    ///
    /// The list stays locked from read to write so a concurrent append is
    /// not lost.
    pub async fn reconcile(&self, remote: &[Quote]) -> Result<(usize, usize)> {
        let mut quotes = self.quotes.lock().await;
        let local = self.read_persisted().await?;
        let merged = merge(&local, remote);
        let merged_len = merged.len();
        self.replace_locked(&mut quotes, merged).await?;
        Ok((local.len(), merged_len))
    }

    async fn replace_locked(&self, quotes: &mut Vec<Quote>, list: Vec<Quote>) -> Result<()> {
        self.write_mirror(&list).await?;
        *quotes = list;
        debug!(count = quotes.len(), "Replaced quotes");
        self.observer.on_quotes_changed(quotes);
        Ok(())
    }

    /// Writes the full in-memory list to durable storage.
    pub async fn persist(&self) -> Result<()> {
        let quotes = self.quotes.lock().await;
        self.write_mirror(&quotes).await
    }

    async fn write_mirror(&self, quotes: &[Quote]) -> Result<()> {
        let json = serde_json::to_string(quotes)
            .map_err(|e| QuoteError::storage(format!("failed to encode quotes: {e}")))?;
        self.durable.put(QUOTES_KEY, &json).await
    }
}

fn parse_quotes(raw: &str) -> Result<Vec<Quote>> {
    serde_json::from_str(raw).map_err(|e| QuoteError::StorageParse(e.to_string()))
}
