use super::ui;
use crate::core::{QuoteError, QuoteService};
use anyhow::{Result, bail};

/// Adds a quote from user input. Empty fields are reported back instead of
/// being stored.
pub async fn run(service: &QuoteService, text: &str, category: &str) -> Result<()> {
    match service.add_quote(text, category).await {
        Ok(quote) => {
            println!(
                "{} {}",
                ui::style_text("New quote added!", ui::StyleType::Success),
                ui::render_quote(&quote)
            );
            Ok(())
        }
        Err(QuoteError::Validation(_)) => {
            bail!("Please enter both quote text and category.")
        }
        Err(e) => Err(e.into()),
    }
}
