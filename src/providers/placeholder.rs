use crate::core::error::Result;
use crate::core::quote::Quote;
use crate::core::remote::{DEFAULT_REMOTE_CATEGORY, RemoteFetcher};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

/// Remote fetcher talking to a JSONPlaceholder-style `/posts` collection.
pub struct PlaceholderProvider {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RemotePost {
    title: String,
}

impl PlaceholderProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quotebook/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    /// Reads the remote posts, mapping each title to a quote.
    pub async fn try_fetch(&self) -> Result<Vec<Quote>> {
        let url = self.posts_url();
        debug!("Requesting remote quotes from {}", url);

        let posts: Vec<RemotePost> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(count = posts.len(), "Fetched quotes from server");
        Ok(posts
            .into_iter()
            .map(|post| Quote::new(post.title, DEFAULT_REMOTE_CATEGORY))
            .collect())
    }

    /// Sends one quote and returns the acknowledgement body.
    pub async fn try_post(&self, quote: &Quote) -> Result<String> {
        let url = self.posts_url();
        let ack = self
            .client
            .post(&url)
            .json(quote)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(ack)
    }
}

#[async_trait]
impl RemoteFetcher for PlaceholderProvider {
    async fn fetch_remote_quotes(&self) -> Vec<Quote> {
        match self.try_fetch().await {
            Ok(quotes) => quotes,
            Err(e) => {
                error!(error = %e, "Error fetching quotes from server");
                Vec::new()
            }
        }
    }

    async fn post_quote(&self, quote: &Quote) {
        match self.try_post(quote).await {
            Ok(ack) => debug!(response = %ack, "Posted new quote to server"),
            Err(e) => error!(error = %e, "Error posting new quote to server"),
        }
    }
}
