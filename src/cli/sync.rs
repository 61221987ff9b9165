use super::ui;
use crate::core::{QuoteService, SyncReport};
use anyhow::{Context, Result};

pub fn format_report(report: &SyncReport) -> String {
    ui::style_text(
        &format!(
            "{} remote + {} local -> {} quotes ({})",
            report.remote_count,
            report.local_count,
            report.merged_count,
            report.synced_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        ui::StyleType::Subtle,
    )
}

/// Runs one sync against the remote.
pub async fn run(service: &QuoteService) -> Result<()> {
    let spinner = ui::new_spinner("Syncing quotes with server...");
    let result = service.sync_now().await;
    spinner.finish_and_clear();

    let report = result.context("Sync failed")?;
    println!("{}", format_report(&report));
    Ok(())
}
