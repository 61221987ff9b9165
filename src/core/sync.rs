//! Reconciling the local quote list with the remote one, on demand or on a
//! fixed schedule.

use super::error::Result;
use super::events::QuoteObserver;
use super::quote::Quote;
use super::quote_store::QuoteStore;
use super::remote::RemoteFetcher;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info};

pub const SYNC_COMPLETE_MESSAGE: &str = "Quotes synced with server!";

/// Outcome of one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub remote_count: usize,
    pub local_count: usize,
    pub merged_count: usize,
    pub synced_at: DateTime<Utc>,
}

pub struct Synchronizer {
    store: Arc<QuoteStore>,
    fetcher: Arc<dyn RemoteFetcher>,
    observer: Arc<dyn QuoteObserver>,
}

impl Synchronizer {
    pub fn new(
        store: Arc<QuoteStore>,
        fetcher: Arc<dyn RemoteFetcher>,
        observer: Arc<dyn QuoteObserver>,
    ) -> Self {
        Self {
            store,
            fetcher,
            observer,
        }
    }

    /// Fetches the remote list, merges it into the persisted one and
    /// replaces the store's contents with the result. A failed fetch merges
    /// an empty remote list, which leaves local quotes untouched.
    pub async fn sync_quotes_with_server(&self) -> Result<SyncReport> {
        let remote = self.fetcher.fetch_remote_quotes().await;
        let (local_count, merged_count) = self.store.reconcile(&remote).await?;

        let report = SyncReport {
            remote_count: remote.len(),
            local_count,
            merged_count,
            synced_at: Utc::now(),
        };
        info!(
            remote = report.remote_count,
            local = report.local_count,
            merged = report.merged_count,
            "Sync finished"
        );
        self.observer.on_sync_complete(SYNC_COMPLETE_MESSAGE);
        Ok(report)
    }

    /// Replicates a newly added quote to the remote.
    pub async fn post_quote(&self, quote: &Quote) {
        self.fetcher.post_quote(quote).await;
    }
}

/// Background task running a sync every `period`, first one after a full
/// period. Ticks of one ticker never overlap.
pub struct SyncTicker {
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl SyncTicker {
    pub fn spawn(syncer: Arc<Synchronizer>, period: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!(?period, "Sync ticker started");

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        if let Err(e) = syncer.sync_quotes_with_server().await {
                            error!(error = %e, "Periodic sync failed");
                        }
                    }
                }
            }
            debug!("Sync ticker stopped");
        });

        Self {
            shutdown: Some(shutdown_tx),
            handle,
        }
    }

    /// Stops the ticker, letting a sync already in flight finish first.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            // Receiver is gone only if the task already exited
            let _ = tx.send(());
        }
        if let Err(e) = self.handle.await {
            error!(error = %e, "Sync ticker task failed");
        }
    }
}
