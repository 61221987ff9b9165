pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::storage::{DURABLE_COLLECTION, SESSION_COLLECTION, Store};
use crate::core::view::ViewState;
use crate::core::{QuoteObserver, QuoteService, QuoteStore, Synchronizer};
use crate::providers::PlaceholderProvider;
use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Random,
    Last,
    List { category: Option<String> },
    Categories,
    Add { text: String, category: String },
    Import { path: PathBuf },
    Export { path: PathBuf },
    Sync,
    Watch,
}

/// Everything one process needs, constructed once at startup.
pub struct App {
    config: AppConfig,
    service: QuoteService,
    _store: KeyValueStore,
}

impl App {
    pub async fn open(config: AppConfig, observer: Arc<dyn QuoteObserver>) -> Result<Self> {
        let data_path = config.default_data_path()?;
        let kv_store = KeyValueStore::open(&data_path)
            .with_context(|| format!("Failed to open storage at {}", data_path.display()))?;

        let durable = kv_store
            .get_collection(DURABLE_COLLECTION, true, true)
            .context("Failed to open durable quote storage")?;
        let session = kv_store
            .get_collection(SESSION_COLLECTION, false, true)
            .context("Failed to open session storage")?;

        let store = Arc::new(
            QuoteStore::open(Arc::clone(&durable), Arc::clone(&observer))
                .await
                .context("Failed to load quotes")?,
        );
        let fetcher = Arc::new(
            PlaceholderProvider::new(&config.remote.base_url, config.remote.timeout())
                .context("Failed to create HTTP client")?,
        );
        let syncer = Arc::new(Synchronizer::new(Arc::clone(&store), fetcher, observer));
        let service = QuoteService::new(
            store,
            syncer,
            ViewState::new(durable, session),
            config.sync.on_change,
        );

        Ok(Self {
            config,
            service,
            _store: kv_store,
        })
    }

    pub fn service(&self) -> &QuoteService {
        &self.service
    }

    pub async fn execute(&self, command: AppCommand) -> Result<()> {
        let service = &self.service;
        match command {
            AppCommand::Random => cli::show::random(service).await,
            AppCommand::Last => cli::show::last(service).await,
            AppCommand::List { category } => cli::show::list(service, category.as_deref()).await,
            AppCommand::Categories => cli::show::categories(service).await,
            AppCommand::Add { text, category } => cli::add::run(service, &text, &category).await,
            AppCommand::Import { path } => cli::transfer::import(service, &path).await,
            AppCommand::Export { path } => cli::transfer::export(service, &path).await,
            AppCommand::Sync => cli::sync::run(service).await,
            AppCommand::Watch => cli::watch::run(service, self.config.sync.interval()).await,
        }
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Quotebook starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let app = App::open(config, Arc::new(cli::ConsoleObserver)).await?;
    app.execute(command).await
}
