//! Subtitle Search Bot - Main Entry Point
//!
//! A Telegram bot that searches opensubtitles.org for a movie or TV
//! show name and replies with inline download buttons.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use teloxide::Bot;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use subtitle_search_bot::bot;
use subtitle_search_bot::config::{BotConfig, SearchConfig};
use subtitle_search_bot::search::SubtitleSearch;

/// Telegram bot for searching movie and TV subtitles.
#[derive(Parser, Debug)]
#[command(name = "subtitle_bot")]
#[command(about = "Search opensubtitles.org from Telegram")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // Load configurations
    let bot_config =
        BotConfig::from_env().context("Failed to load Telegram configuration from environment")?;

    let search_config =
        SearchConfig::from_env().context("Failed to load search configuration from environment")?;

    info!(
        "Searching against {} (timeout: {}s)",
        search_config.base_url, search_config.timeout_secs
    );

    let search = Arc::new(
        SubtitleSearch::new(&search_config).context("Failed to build the subtitle search client")?,
    );

    let bot = Bot::new(bot_config.token);

    info!("Starting subtitle bot...");
    bot::run(bot, search).await;

    info!("Bot stopped");
    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
