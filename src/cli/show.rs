use super::ui;
use crate::core::{Quote, QuoteService};
use anyhow::Result;

const NO_QUOTES: &str = "No quotes available.";

pub fn format_single(quote: Option<&Quote>) -> String {
    match quote {
        Some(quote) => ui::render_quote(quote),
        None => ui::style_text(NO_QUOTES, ui::StyleType::Subtle),
    }
}

pub fn format_list(selected: &str, quotes: &[Quote]) -> String {
    let mut output = format!(
        "Category: {}\n\n",
        ui::style_text(selected, ui::StyleType::Title)
    );
    if quotes.is_empty() {
        output.push_str(&ui::style_text(
            "No quotes in this category.",
            ui::StyleType::Subtle,
        ));
    } else {
        output.push_str(&ui::quotes_table(quotes).to_string());
    }
    output
}

pub fn format_categories(categories: &[String]) -> String {
    categories.join("\n")
}

/// Shows a random quote.
pub async fn random(service: &QuoteService) -> Result<()> {
    let quote = service.random_quote().await?;
    println!("{}", format_single(quote.as_ref()));
    Ok(())
}

/// Shows the quote displayed last in this session.
pub async fn last(service: &QuoteService) -> Result<()> {
    match service.last_quote().await? {
        Some(quote) => println!("{}", ui::render_quote(&quote)),
        None => println!(
            "{}",
            ui::style_text("No quote shown yet in this session.", ui::StyleType::Subtle)
        ),
    }
    Ok(())
}

/// Lists quotes in `category`, defaulting to the remembered filter.
pub async fn list(service: &QuoteService, category: Option<&str>) -> Result<()> {
    let (selected, quotes) = service.filtered(category).await?;
    println!("{}", format_list(&selected, &quotes));
    Ok(())
}

pub async fn categories(service: &QuoteService) -> Result<()> {
    println!("{}", format_categories(&service.categories().await));
    Ok(())
}
