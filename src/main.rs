use anyhow::{Context, Result};
use clap::Parser;
use ostack::api::ApiClient;
use ostack::cli::{Cli, LogLevel};
use ostack::commands;
use ostack::config::Config;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use url::Url;

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return None;
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("ostack started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("ostack").join("ostack.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".ostack").join("ostack.log");
    }
    PathBuf::from("ostack.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = setup_logging(cli.log_level);

    let config = Config::load();

    let endpoint = cli
        .cloud_url
        .clone()
        .or_else(|| config.effective_endpoint())
        .context(
            "No cloud endpoint configured. Set OSTACK_ENDPOINT, add it to clouds.yaml, \
             or use --cloud-url",
        )?;
    let endpoint = Url::parse(&endpoint)
        .with_context(|| format!("Invalid cloud endpoint URL: {}", endpoint))?;

    let token = cli
        .os_token
        .clone()
        .or_else(|| config.effective_token())
        .context(
            "No API token configured. Set OSTACK_TOKEN, add it to clouds.yaml, \
             or use --os-token",
        )?;

    tracing::info!("Using endpoint: {}", endpoint);

    let client = ApiClient::new(endpoint, token)?;
    commands::run(&client, cli.command, cli.json).await
}
