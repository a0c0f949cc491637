//! Command-line front end for flatlink.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! flatlink --shorten http://www.testurl.com
//!
//! # Print the long URL behind a short URL
//! flatlink --search http://sucu.ri/3f9a1
//!
//! # Print every stored field of a short URL
//! flatlink --info http://sucu.ri/3f9a1
//! ```
//!
//! # Environment Variables
//!
//! See [`flatlink::config`]. `--db` and `--domain` override `SHORTENER_DB`
//! and `SHORTENER_DOMAIN`.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use colored::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use flatlink::application::services::ShortenerService;
use flatlink::config::{self, Config};
use flatlink::domain::entities::{Record, field_label};
use flatlink::domain::repositories::RecordRepository;
use flatlink::error::AppError;

/// Shorten URLs into a flat record file and look them up again.
#[derive(Parser, Debug)]
#[command(name = "flatlink")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("action").required(true).args(["shorten", "search", "info"])))]
struct Cli {
    /// Generates a shortened url for the url provided
    #[arg(long, value_name = "URL")]
    shorten: Option<String>,

    /// Returns the long url associated with a shortened url
    #[arg(long, value_name = "SHORT_URL")]
    search: Option<String>,

    /// Returns information associated with a shortened url
    #[arg(long, value_name = "SHORT_URL")]
    info: Option<String>,

    /// Record file to use instead of SHORTENER_DB
    #[arg(long, value_name = "PATH")]
    db: Option<String>,

    /// Short URL prefix to use instead of SHORTENER_DOMAIN
    #[arg(long, value_name = "PREFIX")]
    domain: Option<String>,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env().context("Failed to load configuration")?;
    apply_overrides(&mut config, &cli);
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    let shortener = ShortenerService::open(config.shortener);

    if let Some(url) = cli.shorten {
        return Ok(shorten(&shortener, &url));
    }
    if let Some(short_url) = cli.search {
        search(&shortener, &short_url)?;
    } else if let Some(short_url) = cli.info {
        info(&shortener, &short_url)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Command-line values win over the environment; blank values are ignored.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(db) = cli.db.as_deref().filter(|v| !v.trim().is_empty()) {
        config.shortener.store_path = db.into();
    }
    if let Some(domain) = cli.domain.as_deref().filter(|v| !v.trim().is_empty()) {
        config.shortener.domain_prefix = domain.to_string();
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG value '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

fn shorten<R: RecordRepository>(shortener: &ShortenerService<R>, url: &str) -> ExitCode {
    match shortener.shorten_url(url) {
        Ok(short_url) => {
            println!("{short_url}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} {}", "ERROR:".red().bold(), error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// Error text for the `ERROR:` line, with the rejection reason when there is one.
fn error_line(err: &AppError) -> String {
    match err {
        AppError::InvalidInput { message, details } => match details["reason"].as_str() {
            Some(reason) => format!("{message} ({reason})"),
            None => message.clone(),
        },
        other => other.to_string(),
    }
}

fn search<R: RecordRepository>(shortener: &ShortenerService<R>, short_url: &str) -> Result<()> {
    match shortener.get_shorturl_info(short_url)? {
        Some(record) => println!("{}", record.long_url),
        None => println!("{}", "URL not found".yellow()),
    }

    Ok(())
}

fn info<R: RecordRepository>(shortener: &ShortenerService<R>, short_url: &str) -> Result<()> {
    let Some(record) = shortener.get_shorturl_info(short_url)? else {
        println!("{}", "URL not found".yellow());
        return Ok(());
    };

    println!();
    for (label, value) in info_lines(&record) {
        println!("{}: {}", label.bright_white().bold(), value);
    }
    println!();

    Ok(())
}

/// Label/value pairs shown by `--info`, in storage order.
fn info_lines(record: &Record) -> Vec<(&'static str, String)> {
    record
        .fields()
        .into_iter()
        .map(|(name, value)| (field_label(name), value))
        .collect()
}
