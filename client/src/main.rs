//! clipshare
//!
//! Terminal client for a shared clipboard feed. Post text notes or images
//! to a backend shared with other people, and copy or delete what anyone
//! has posted. The feed is re-fetched every few seconds.

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use adapters::{HttpShareStore, StagedClipboard, SystemClipboard, TerminalView};
use app::{run_session, FeedClient, Poller, RefreshTrigger};
use config::Config;
use feed::render_help;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is the feed
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clipshare=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(api = %config.api_base_url, "Starting clipshare");

    let store = HttpShareStore::new(&config.api_base_url).context("Failed to build HTTP client")?;
    let fallback = match config.copy_command.clone() {
        Some(command) => StagedClipboard::new(command),
        None => StagedClipboard::with_default_command(),
    };

    let client = Arc::new(FeedClient::new(
        Arc::new(store),
        Arc::new(SystemClipboard::detect()),
        Arc::new(fallback),
        Arc::new(TerminalView::stdout()),
    ));

    print!("{}", render_help());
    client.refresh(RefreshTrigger::Startup).await;
    let poller = Poller::start(Arc::clone(&client), config.poll_interval);

    let stdin = BufReader::new(tokio::io::stdin());
    let result = run_session(client.as_ref(), stdin, &mut std::io::stdout()).await;

    poller.stop().await;
    tracing::info!("clipshare stopped");

    result
}
