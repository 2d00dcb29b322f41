// src/config.rs
// =============================================================================
// Runtime configuration, assembled once from the parsed CLI (which already
// folded in GITHUB_API_URL / GITHUB_TOKEN from the environment or .env).
// =============================================================================

use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

use crate::cli::Cli;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base of every API request, e.g. https://api.github.com
    pub api_base_url: Url,
    /// Personal access token; raises the rate limit when present.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
    /// Drop responses belonging to a superseded search or page change.
    pub discard_stale: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_base_url = Url::parse(&cli.api_url)
            .with_context(|| format!("Invalid API URL '{}'", cli.api_url))?;

        // Only hierarchical http(s) URLs can have /users/... appended.
        if !matches!(api_base_url.scheme(), "http" | "https") {
            bail!("API URL must use http or https: {}", api_base_url);
        }

        if cli.timeout_secs == 0 {
            bail!("--timeout-secs must be at least 1");
        }

        let token = cli
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(Self {
            api_base_url,
            token,
            timeout: Duration::from_secs(cli.timeout_secs),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            discard_stale: !cli.allow_stale,
        })
    }
}
