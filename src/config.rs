//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export BITLY_API_URL="https://api-ssl.bitly.com/v4/"
//! export BITLY_TIMEOUT_SECONDS="30"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BITLY_API_URL` - Remote API base endpoint (default: `https://api-ssl.bitly.com/v4/`)
//! - `BITLY_TIMEOUT_SECONDS` - Per-request timeout for remote calls (default: 30)
//!
//! No credentials are configured here: each incoming request brings its own
//! bearer token.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::infrastructure::bitly::DEFAULT_API_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base endpoint that relative API paths are joined onto. Always ends with `/`.
    pub bitly_api_url: String,
    /// Timeout applied to each remote request (`BITLY_TIMEOUT_SECONDS`, default: 30).
    pub bitly_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BITLY_TIMEOUT_SECONDS` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let bitly_api_url = Self::load_api_url();

        let bitly_timeout_seconds = match env::var("BITLY_TIMEOUT_SECONDS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("BITLY_TIMEOUT_SECONDS must be a number, got '{}'", v))?,
            Err(_) => 30,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            bitly_api_url,
            bitly_timeout_seconds,
        })
    }

    /// Loads the API base URL, appending a trailing `/` so joins keep the
    /// version segment.
    fn load_api_url() -> String {
        let url = env::var("BITLY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if url.ends_with('/') {
            url
        } else {
            format!("{}/", url)
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `bitly_api_url` is not an `http(s)://` URL
    /// - `bitly_timeout_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let api_url = self.api_url()?;
        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!(
                "BITLY_API_URL must start with 'http://' or 'https://', got '{}'",
                self.bitly_api_url
            );
        }

        if self.bitly_timeout_seconds == 0 {
            anyhow::bail!("BITLY_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Parsed remote API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `bitly_api_url` is not a valid absolute URL.
    pub fn api_url(&self) -> Result<Url> {
        Url::parse(&self.bitly_api_url)
            .with_context(|| format!("BITLY_API_URL is not a valid URL: '{}'", self.bitly_api_url))
    }

    /// Timeout applied to each remote request.
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.bitly_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Bitly API: {}", self.bitly_api_url);
        tracing::info!("  Remote timeout: {}s", self.bitly_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
