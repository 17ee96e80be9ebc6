//! One-shot CLI for per-country average clicks.
//!
//! Runs a single aggregation against the Bitly API and prints the result,
//! without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Token from the environment
//! BITLY_TOKEN=... cargo run --bin averages
//!
//! # Explicit token, JSON output
//! cargo run --bin averages -- --token ... --json
//!
//! # Prompt for the token
//! cargo run --bin averages
//! ```

use click_averages::api::dto::averages::CountryAveragesResponse;
use click_averages::application::services::ClickAveragesService;
use click_averages::domain::entities::CountryAverages;
use click_averages::domain::providers::Credential;
use click_averages::infrastructure::bitly::{BitlyClient, DEFAULT_API_URL};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use colored::*;
use dialoguer::Password;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Average daily clicks per country for a Bitly default group.
#[derive(Parser)]
#[command(name = "averages")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bitly access token (prompted for when absent)
    #[arg(short, long, env = "BITLY_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Bitly API base URL
    #[arg(long, env = "BITLY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Timeout for each remote request, in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print the JSON response body instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let token = match cli.token {
        Some(t) => t,
        None => Password::new()
            .with_prompt("Bitly access token")
            .interact()?,
    };

    let mut api_url = cli.api_url;
    if !api_url.ends_with('/') {
        api_url.push('/');
    }
    let api_url = Url::parse(&api_url).context("Invalid --api-url")?;

    let client = BitlyClient::new(api_url, Duration::from_secs(cli.timeout))
        .context("Failed to initialize Bitly client")?;
    let service = ClickAveragesService::new(Arc::new(client));

    let averages = service
        .country_averages(&Credential::new(token))
        .await
        .context("Failed to compute click averages")?;

    if cli.json {
        let body = CountryAveragesResponse::new(&averages, Utc::now());
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_table(&averages);
    }

    Ok(())
}

/// Prints averages as an aligned table, highest first.
fn print_table(averages: &CountryAverages) {
    println!(
        "{}",
        format!(
            "📊 Average daily clicks by country (last {} days)",
            averages.window_days
        )
        .bright_blue()
        .bold()
    );
    println!();

    if averages.is_empty() {
        println!("{}", "No links found in the default group".yellow());
        return;
    }

    let width = averages
        .iter()
        .map(|(country, _)| country.chars().count())
        .max()
        .unwrap_or(0)
        .max("Country".len());

    println!(
        "  {}  {}",
        format!("{:<width$}", "Country").bold(),
        "Avg/day".bold()
    );
    for (country, average) in averages.ranked() {
        let value = if average > 0 {
            average.to_string().green()
        } else {
            average.to_string().dimmed()
        };
        println!("  {:<width$}  {}", country, value);
    }
}
