//! Terminal front end: command handlers render what the core returns.

pub mod add;
pub mod setup;
pub mod show;
pub mod sync;
pub mod transfer;
pub mod ui;
pub mod watch;

use crate::core::{Quote, QuoteObserver};
use tracing::debug;

/// Prints sync completion messages to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl QuoteObserver for ConsoleObserver {
    fn on_quotes_changed(&self, quotes: &[Quote]) {
        debug!(count = quotes.len(), "Quotes changed");
    }

    fn on_sync_complete(&self, message: &str) {
        println!("{}", ui::style_text(message, ui::StyleType::Subtle));
    }
}
