//! Remote quote source abstraction

use super::quote::Quote;
use async_trait::async_trait;

/// Category assigned to remote records, which carry none of their own.
pub const DEFAULT_REMOTE_CATEGORY: &str = "General";

/// Best-effort access to the remote quote collection. Implementations log
/// failures instead of returning them: a remote outage must never block
/// local display or addition.
#[async_trait]
pub trait RemoteFetcher: Send + Sync {
    /// Returns the remote quotes, or an empty list when the read fails.
    async fn fetch_remote_quotes(&self) -> Vec<Quote>;

    /// Sends `quote` to the remote. Fire-and-forget, never retried.
    async fn post_quote(&self, quote: &Quote);
}
