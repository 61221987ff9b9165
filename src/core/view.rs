//! Display state kept between interactions: the selected category filter
//! (durable) and the last displayed quote (session only).

use super::error::{QuoteError, Result};
use super::quote::{ALL_CATEGORIES, Quote};
use super::storage::{KeyValueCollection, LAST_QUOTE_KEY, SELECTED_CATEGORY_KEY};
use std::sync::Arc;
use tracing::warn;

pub struct ViewState {
    durable: Arc<dyn KeyValueCollection>,
    session: Arc<dyn KeyValueCollection>,
}

impl ViewState {
    pub fn new(durable: Arc<dyn KeyValueCollection>, session: Arc<dyn KeyValueCollection>) -> Self {
        Self { durable, session }
    }

    /// The stored filter, `"all"` when none was chosen yet.
    pub async fn selected_category(&self) -> Result<String> {
        Ok(self
            .durable
            .get(SELECTED_CATEGORY_KEY)
            .await?
            .unwrap_or_else(|| ALL_CATEGORIES.to_string()))
    }

    pub async fn set_selected_category(&self, category: &str) -> Result<()> {
        self.durable.put(SELECTED_CATEGORY_KEY, category).await
    }

    pub async fn remember_last_quote(&self, quote: &Quote) -> Result<()> {
        let json = serde_json::to_string(quote)
            .map_err(|e| QuoteError::storage(e.to_string()))?;
        self.session.put(LAST_QUOTE_KEY, &json).await
    }

    /// Quote displayed last in this session, if any.
    pub async fn last_quote(&self) -> Result<Option<Quote>> {
        let Some(raw) = self.session.get(LAST_QUOTE_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(quote) => Ok(Some(quote)),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable last quote");
                Ok(None)
            }
        }
    }
}
