use quotebook::core::config::AppConfig;
use quotebook::core::quote::seed_quotes;
use quotebook::core::{LoggingObserver, Quote};
use quotebook::{App, AppCommand};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tracing::info;

// Mock remote serving `/posts`
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const MOCK_POSTS: &str = r#"[
        {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
        {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"}
    ]"#;

    pub async fn create_mock_server(get_status: u16, posts: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(get_status).set_body_string(posts))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id": 101}"#))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

fn write_config(dir: &Path, base_url: &str, on_change: bool) -> std::path::PathBuf {
    let config_path = dir.join("config.yaml");
    let config_content = format!(
        r#"
        remote:
          base_url: {}
          timeout_secs: 5
        sync:
          interval_secs: 30
          on_change: {}
        data_path: {}
    "#,
        base_url,
        on_change,
        dir.join("data").display()
    );
    fs::write(&config_path, config_content).expect("Failed to write config file");
    config_path
}

async fn open_app(dir: &Path, base_url: &str, on_change: bool) -> App {
    let config_path = write_config(dir, base_url, on_change);
    let config = AppConfig::load_from_path(&config_path).expect("Failed to load config");
    App::open(config, Arc::new(LoggingObserver))
        .await
        .expect("Failed to open app")
}

#[test_log::test(tokio::test)]
async fn test_fresh_start_is_seeded() {
    let temp_dir = TempDir::new().unwrap();
    let app = open_app(temp_dir.path(), "http://127.0.0.1:9", false).await;

    assert_eq!(app.service().quotes().await, seed_quotes());
}

#[test_log::test(tokio::test)]
async fn test_add_posts_and_syncs_with_mock() {
    let mock_server = test_utils::create_mock_server(200, test_utils::MOCK_POSTS).await;
    let temp_dir = TempDir::new().unwrap();
    let app = open_app(temp_dir.path(), &mock_server.uri(), true).await;

    app.execute(AppCommand::Add {
        text: "Simplicity is the soul of efficiency.".to_string(),
        category: "Craft".to_string(),
    })
    .await
    .expect("Add failed");

    let quotes = app.service().quotes().await;
    info!(count = quotes.len(), "Quotes after add");
    assert_eq!(quotes.len(), 6);
    assert_eq!(quotes[0], Quote::new("sunt aut facere", "General"));
    assert_eq!(quotes[1], Quote::new("qui est esse", "General"));
    assert_eq!(&quotes[2..5], seed_quotes().as_slice());
    assert_eq!(
        quotes[5],
        Quote::new("Simplicity is the soul of efficiency.", "Craft")
    );

    let requests = mock_server.received_requests().await.unwrap();
    let posts: Vec<_> = requests
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .collect();
    assert_eq!(posts.len(), 1);
    let body: Quote = serde_json::from_slice(&posts[0].body).unwrap();
    assert_eq!(body.category, "Craft");
}

#[test_log::test(tokio::test)]
async fn test_add_rejects_empty_text() {
    let temp_dir = TempDir::new().unwrap();
    let app = open_app(temp_dir.path(), "http://127.0.0.1:9", false).await;

    let result = app
        .execute(AppCommand::Add {
            text: String::new(),
            category: "Z".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(app.service().quotes().await, seed_quotes());
}

#[test_log::test(tokio::test)]
async fn test_sync_survives_remote_outage() {
    let mock_server = test_utils::create_mock_server(503, "unavailable").await;
    let temp_dir = TempDir::new().unwrap();
    let app = open_app(temp_dir.path(), &mock_server.uri(), false).await;

    app.execute(AppCommand::Sync).await.expect("Sync failed");

    assert_eq!(app.service().quotes().await, seed_quotes());
}

#[test_log::test(tokio::test)]
async fn test_import_list_and_export() {
    let temp_dir = TempDir::new().unwrap();
    let app = open_app(temp_dir.path(), "http://127.0.0.1:9", false).await;

    let import_path = temp_dir.path().join("import.json");
    fs::write(
        &import_path,
        r#"[{"text": "Measure twice", "category": "Craft"},
            {"text": "Cut once", "category": "Craft"}]"#,
    )
    .unwrap();

    app.execute(AppCommand::Import {
        path: import_path.clone(),
    })
    .await
    .expect("Import failed");
    assert_eq!(app.service().quotes().await.len(), 5);

    app.execute(AppCommand::List {
        category: Some("Craft".to_string()),
    })
    .await
    .expect("List failed");
    let (selected, craft) = app.service().filtered(None).await.unwrap();
    assert_eq!(selected, "Craft");
    assert_eq!(craft.len(), 2);

    let export_path = temp_dir.path().join("quotes.json");
    app.execute(AppCommand::Export {
        path: export_path.clone(),
    })
    .await
    .expect("Export failed");
    let exported: Vec<Quote> =
        serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(exported, app.service().quotes().await);
}

#[test_log::test(tokio::test)]
async fn test_import_rejects_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let app = open_app(temp_dir.path(), "http://127.0.0.1:9", false).await;

    let import_path = temp_dir.path().join("broken.json");
    fs::write(&import_path, "this is not json").unwrap();

    let result = app
        .execute(AppCommand::Import { path: import_path })
        .await;

    assert!(result.is_err());
    assert_eq!(app.service().quotes().await, seed_quotes());
}

#[test_log::test(tokio::test)]
async fn test_run_command_with_config_file() {
    let mock_server = test_utils::create_mock_server(200, test_utils::MOCK_POSTS).await;
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), &mock_server.uri(), true);

    let result = quotebook::run_command(AppCommand::Sync, Some(config_path.to_str().unwrap())).await;
    assert!(
        result.is_ok(),
        "Sync command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_run_command_missing_config_fails() {
    let result =
        quotebook::run_command(AppCommand::Random, Some("/definitely/not/here.yaml")).await;
    assert!(result.is_err());
}
