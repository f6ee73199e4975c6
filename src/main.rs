use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use casuse_admin_tui::infrastructure::config::CliArgs;
use casuse_admin_tui::infrastructure::{AppConfig, KeyringSessionStore, WebsiteApiClient};
use casuse_admin_tui::presentation::WebsiteApp;

const BINARY: &str = "website-admin";
const TOKEN_ACCOUNT: &str = "website_admin_token";

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path(BINARY) {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<(WebsiteApp, Option<String>)> {
    let config = AppConfig::load(CliArgs::parse());
    let cli_token = config.token.clone();

    init_logging(&config)?;

    info!(
        version = casuse_admin_tui::VERSION,
        api = %config.api_base_url,
        "Starting website admin"
    );

    let session_store = Arc::new(KeyringSessionStore::new(TOKEN_ACCOUNT));
    let client = Arc::new(WebsiteApiClient::new(
        config.api_base_url.clone(),
        session_store.clone(),
    )?);

    let app = WebsiteApp::new(
        client.clone(),
        client,
        session_store,
        config.home_url.clone(),
    );

    Ok((app, cli_token))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let (app, cli_token) = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal, cli_token).await;

    ratatui::restore();

    result
}
