//! Command-level operations composed from the store, the synchronizer and
//! the view state. Front ends call these and only render the results.

use super::error::Result;
use super::quote::{self, Quote};
use super::quote_store::QuoteStore;
use super::sync::{SyncReport, Synchronizer};
use super::transfer;
use super::view::ViewState;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct QuoteService {
    store: Arc<QuoteStore>,
    syncer: Arc<Synchronizer>,
    view: ViewState,
    sync_on_change: bool,
}

impl QuoteService {
    pub fn new(
        store: Arc<QuoteStore>,
        syncer: Arc<Synchronizer>,
        view: ViewState,
        sync_on_change: bool,
    ) -> Self {
        Self {
            store,
            syncer,
            view,
            sync_on_change,
        }
    }

    pub fn syncer(&self) -> Arc<Synchronizer> {
        Arc::clone(&self.syncer)
    }

    pub async fn quotes(&self) -> Vec<Quote> {
        self.store.quotes().await
    }

    /// Validates and stores a new quote, replicates it to the remote and
    /// then syncs.
    pub async fn add_quote(&self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::new(text.trim(), category.trim());
        self.store.append(quote.clone()).await?;
        self.syncer.post_quote(&quote).await;
        self.sync_after_change().await;
        Ok(quote)
    }

    /// Appends every quote in the JSON file at `path`. Returns how many were
    /// added.
    pub async fn import_file(&self, path: &Path) -> Result<usize> {
        let imported = transfer::read_quotes_file(path)?;
        let added = self.store.import(imported).await?;
        self.sync_after_change().await;
        Ok(added)
    }

    pub async fn export_file(&self, path: &Path) -> Result<usize> {
        let quotes = self.store.quotes().await;
        transfer::write_quotes_file(path, &quotes)?;
        Ok(quotes.len())
    }

    /// Picks a quote at random and remembers it for this session.
    pub async fn random_quote(&self) -> Result<Option<Quote>> {
        let quotes = self.store.quotes().await;
        let Some(picked) = quote::random_quote(&quotes).cloned() else {
            return Ok(None);
        };
        self.view.remember_last_quote(&picked).await?;
        Ok(Some(picked))
    }

    pub async fn last_quote(&self) -> Result<Option<Quote>> {
        self.view.last_quote().await
    }

    /// Quotes in `category`, or in the remembered category when `None`. The
    /// effective selection is stored and returned alongside.
    pub async fn filtered(&self, category: Option<&str>) -> Result<(String, Vec<Quote>)> {
        let selected = match category {
            Some(category) => category.to_string(),
            None => self.view.selected_category().await?,
        };
        self.view.set_selected_category(&selected).await?;

        let quotes = self.store.quotes().await;
        let matching: Vec<Quote> = quote::filter_quotes(&quotes, &selected)
            .into_iter()
            .cloned()
            .collect();
        Ok((selected, matching))
    }

    pub async fn categories(&self) -> Vec<String> {
        quote::categories(&self.store.quotes().await)
    }

    pub async fn sync_now(&self) -> Result<SyncReport> {
        self.syncer.sync_quotes_with_server().await
    }

    async fn sync_after_change(&self) {
        if !self.sync_on_change {
            debug!("Sync on change disabled");
            return;
        }
        // The change itself is already stored; a failed sync only delays it
        if let Err(e) = self.syncer.sync_quotes_with_server().await {
            warn!(error = %e, "Sync after change failed");
        }
    }
}
