//! Core quote management: the entity, storage, merging and sync

pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod merge;
pub mod quote;
pub mod quote_store;
pub mod remote;
pub mod service;
pub mod storage;
pub mod sync;
pub mod transfer;
pub mod view;

// Re-export main types for cleaner imports
pub use error::QuoteError;
pub use events::{LoggingObserver, QuoteObserver};
pub use merge::merge;
pub use quote::Quote;
pub use quote_store::QuoteStore;
pub use remote::RemoteFetcher;
pub use service::QuoteService;
pub use sync::{SyncReport, SyncTicker, Synchronizer};
