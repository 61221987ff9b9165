//! Notification hooks the core calls after mutating quotes. Rendering is left
//! entirely to the implementor.

use super::quote::Quote;
use tracing::{debug, info};

pub trait QuoteObserver: Send + Sync {
    fn on_quotes_changed(&self, quotes: &[Quote]);

    fn on_sync_complete(&self, message: &str);
}

/// Observer that only writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl QuoteObserver for LoggingObserver {
    fn on_quotes_changed(&self, quotes: &[Quote]) {
        debug!(count = quotes.len(), "Quotes changed");
    }

    fn on_sync_complete(&self, message: &str) {
        info!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every notification for assertions.
    #[derive(Default)]
    pub struct RecordingObserver {
        pub changes: Mutex<Vec<Vec<Quote>>>,
        pub messages: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        pub fn change_count(&self) -> usize {
            self.changes.lock().unwrap().len()
        }

        pub fn last_change(&self) -> Option<Vec<Quote>> {
            self.changes.lock().unwrap().last().cloned()
        }

        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl QuoteObserver for RecordingObserver {
        fn on_quotes_changed(&self, quotes: &[Quote]) {
            self.changes.lock().unwrap().push(quotes.to_vec());
        }

        fn on_sync_complete(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }
}
