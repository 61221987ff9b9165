//! The quote entity and the list helpers the presentation layer builds on.

use super::error::{QuoteError, Result};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Filter value that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// A (text, category) pair. Two quotes are the same for merging when their
/// texts are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Rejects quotes with empty text or category.
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(QuoteError::validation("quote text must not be empty"));
        }
        if self.category.is_empty() {
            return Err(QuoteError::validation("quote category must not be empty"));
        }
        Ok(())
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.text, self.category)
    }
}

/// Built-in list used when durable storage holds no quotes.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only limit to our realization of tomorrow is our doubts of today.",
            "Motivation",
        ),
        Quote::new(
            "In the end, we will remember not the words of our enemies, but the silence of our friends.",
            "Leadership",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
    ]
}

/// `"all"` followed by each distinct category in first-appearance order.
pub fn categories(quotes: &[Quote]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for quote in quotes {
        if !result.contains(&quote.category) {
            result.push(quote.category.clone());
        }
    }
    result
}

pub fn filter_quotes<'a>(quotes: &'a [Quote], category: &str) -> Vec<&'a Quote> {
    if category == ALL_CATEGORIES {
        return quotes.iter().collect();
    }
    quotes.iter().filter(|q| q.category == category).collect()
}

pub fn random_quote(quotes: &[Quote]) -> Option<&Quote> {
    quotes.choose(&mut rand::thread_rng())
}
