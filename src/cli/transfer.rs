use super::ui;
use crate::core::QuoteService;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn import(service: &QuoteService, path: &Path) -> Result<()> {
    let added = service
        .import_file(path)
        .await
        .with_context(|| format!("Failed to import quotes from {}", path.display()))?;
    println!(
        "{}",
        ui::style_text(
            &format!("Quotes imported successfully! ({added} added)"),
            ui::StyleType::Success
        )
    );
    Ok(())
}

pub async fn export(service: &QuoteService, path: &Path) -> Result<()> {
    let count = service
        .export_file(path)
        .await
        .with_context(|| format!("Failed to export quotes to {}", path.display()))?;
    println!(
        "{}",
        ui::style_text(
            &format!("Exported {count} quotes to {}", path.display()),
            ui::StyleType::Success
        )
    );
    Ok(())
}
