use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 21108;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the share backend, without trailing slash
    pub api_base_url: String,
    /// How often the feed is re-fetched
    pub poll_interval: Duration,
    /// Legacy copy command used when no platform clipboard is available
    pub copy_command: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = match env::var("CLIPSHARE_API_URL") {
            Ok(url) => url.trim_end_matches('/').to_string(),
            Err(_) => {
                let host = env::var("CLIPSHARE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
                let port = match env::var("CLIPSHARE_PORT") {
                    Ok(raw) => raw
                        .parse::<u16>()
                        .with_context(|| format!("CLIPSHARE_PORT is not a port: {raw}"))?,
                    Err(_) => DEFAULT_PORT,
                };
                derive_base_url(&host, port)
            }
        };

        let poll_interval_ms = match env::var("CLIPSHARE_POLL_INTERVAL_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("CLIPSHARE_POLL_INTERVAL_MS is not a number: {raw}"))?,
            Err(_) => DEFAULT_POLL_INTERVAL_MS,
        };
        if poll_interval_ms == 0 {
            anyhow::bail!("CLIPSHARE_POLL_INTERVAL_MS must be greater than zero");
        }

        let copy_command = env::var("CLIPSHARE_COPY_COMMAND")
            .ok()
            .and_then(|raw| parse_command(&raw));

        Ok(Self {
            api_base_url,
            poll_interval: Duration::from_millis(poll_interval_ms),
            copy_command,
        })
    }
}

/// Backend URL for a host. The backend always listens on the same fixed port,
/// whether the client runs on the backend machine or elsewhere on the network.
pub fn derive_base_url(host: &str, port: u16) -> String {
    let host = host.trim();
    let host = if host.is_empty() { DEFAULT_HOST } else { host };
    format!("http://{}:{}", host, port)
}

/// Split a command line on whitespace; `None` when nothing is left
fn parse_command(raw: &str) -> Option<Vec<String>> {
    let parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}
