use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use signon::infrastructure::{
    AppConfig, CliArgs, LoggingNavigator, SimulatedAuthClient, StorageManager,
};
use signon::presentation::App;
use signon::presentation::theme::Theme;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
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

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let config_override = args.config.clone();

    let mut config = StorageManager::new()
        .and_then(|manager| manager.load_config(config_override.as_deref()))
        .unwrap_or_default();
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = signon::VERSION, "Starting signon");

    let theme = Theme::new(&config.theme.accent_color);
    let auth_client = Arc::new(SimulatedAuthClient::new());
    let navigator = Arc::new(LoggingNavigator::new());

    Ok(App::new(auth_client, navigator, theme))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
