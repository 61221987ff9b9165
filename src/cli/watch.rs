use super::{add, show, sync, ui};
use crate::core::{QuoteService, SyncTicker};
use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "Commands: random | list [category] | categories | add <text> | <category> | last | sync | help | quit";

#[derive(Debug, PartialEq, Eq)]
pub enum WatchCommand {
    Random,
    List(Option<String>),
    Categories,
    Add { text: String, category: String },
    Last,
    Sync,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> std::result::Result<Option<WatchCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "random" | "r" => WatchCommand::Random,
        "list" | "ls" => WatchCommand::List((!rest.is_empty()).then(|| rest.to_string())),
        "categories" => WatchCommand::Categories,
        "add" => {
            let (text, category) = rest
                .split_once('|')
                .ok_or_else(|| "Usage: add <text> | <category>".to_string())?;
            WatchCommand::Add {
                text: text.trim().to_string(),
                category: category.trim().to_string(),
            }
        }
        "last" => WatchCommand::Last,
        "sync" => WatchCommand::Sync,
        "help" | "?" => WatchCommand::Help,
        "quit" | "exit" | "q" => WatchCommand::Quit,
        other => return Err(format!("Unknown command: {other}")),
    };
    Ok(Some(command))
}

async fn execute(service: &QuoteService, command: WatchCommand) -> Result<()> {
    match command {
        WatchCommand::Random => show::random(service).await,
        WatchCommand::List(category) => show::list(service, category.as_deref()).await,
        WatchCommand::Categories => show::categories(service).await,
        WatchCommand::Add { text, category } => add::run(service, &text, &category).await,
        WatchCommand::Last => show::last(service).await,
        WatchCommand::Sync => sync::run(service).await,
        WatchCommand::Help | WatchCommand::Quit => {
            println!("{HELP}");
            Ok(())
        }
    }
}

/// Runs `command` unless `interrupt` completes first. Returns `false` when
/// interrupted.
async fn execute_until<F: Future>(
    service: &QuoteService,
    command: WatchCommand,
    interrupt: F,
) -> bool {
    tokio::select! {
        _ = interrupt => {
            debug!("Interrupted during command");
            false
        }
        result = execute(service, command) => {
            if let Err(e) = result {
                eprintln!("{}", ui::style_text(&format!("{e:#}"), ui::StyleType::Error));
            }
            true
        }
    }
}

/// Interactive session: reads commands from stdin while syncing in the
/// background every `interval`. Ends on `quit`, end of input or Ctrl-C.
pub async fn run(service: &QuoteService, interval: Duration) -> Result<()> {
    let ticker = SyncTicker::spawn(service.syncer(), interval);

    println!("{}", ui::style_text(HELP, ui::StyleType::Subtle));
    show::random(service).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let result = loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted");
                break Ok(());
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => match parse_line(&line) {
                    Ok(Some(WatchCommand::Quit)) => break Ok(()),
                    Ok(Some(command)) => {
                        if !execute_until(service, command, tokio::signal::ctrl_c()).await {
                            break Ok(());
                        }
                    }
                    Ok(None) => {}
                    Err(message) => eprintln!("{}", ui::style_text(&message, ui::StyleType::Error)),
                },
                Ok(None) => break Ok(()),
                Err(e) => break Err(anyhow::Error::from(e).context("Failed to read input")),
            }
        }
    };

    ticker.shutdown().await;
    result
}
