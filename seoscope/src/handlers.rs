use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use seoscope_core::lookup::execute_lookup;
use seoscope_core::report::{ReportFormat, render_report, save_report};
use seoscope_scanner::{FetchConfig, Fetcher};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::api::HttpServer;

pub const DEFAULT_PORT: u16 = 7860;
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Install the fmt subscriber. `RUST_LOG` wins over `default_directive`.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Upstream settings shared by every subcommand
pub fn fetch_config_from_matches(args: &ArgMatches) -> FetchConfig {
    let mut config = FetchConfig::default();
    if let Some(template) = args.get_one::<String>("upstream") {
        config = config.with_upstream_template(template.clone());
    }
    if let Some(secs) = args.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(*secs));
    }
    config
}

/// Combine a bind address and port into a socket address
pub fn parse_bind_addr(bind: &str, port: u16) -> Result<SocketAddr, String> {
    bind.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, port))
        .map_err(|e| format!("Invalid bind address '{}': {}", bind, e))
}

#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub bind: String,
    pub port: u16,
    pub fetch: FetchConfig,
}

impl ServeOptions {
    pub fn from_matches(args: &ArgMatches) -> Self {
        Self {
            bind: args
                .get_one::<String>("bind")
                .cloned()
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port: args.get_one::<u16>("port").copied().unwrap_or(DEFAULT_PORT),
            fetch: fetch_config_from_matches(args),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupOptions {
    pub url: String,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub fetch: FetchConfig,
}

impl LookupOptions {
    pub fn from_matches(args: &ArgMatches) -> Result<Self> {
        let url = args
            .get_one::<String>("url")
            .cloned()
            .ok_or_else(|| anyhow!("--url is required"))?;
        let format_name = args
            .get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("text");
        let format = ReportFormat::from_str(format_name)
            .ok_or_else(|| anyhow!("Unknown report format '{}'", format_name))?;

        Ok(Self {
            url,
            format,
            output: args.get_one::<PathBuf>("output").cloned(),
            fetch: fetch_config_from_matches(args),
        })
    }
}

pub async fn handle_serve(options: ServeOptions) -> Result<()> {
    let addr = parse_bind_addr(&options.bind, options.port).map_err(|e| anyhow!(e))?;
    let fetcher = Fetcher::new(options.fetch).context("Failed to configure upstream fetcher")?;

    HttpServer::new(addr, fetcher).run().await
}

pub async fn handle_lookup(options: LookupOptions) -> Result<()> {
    let fetcher = Fetcher::new(options.fetch).context("Failed to configure upstream fetcher")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Looking up {}", options.url));

    let outcome = execute_lookup(&fetcher, &options.url).await;
    spinner.finish_and_clear();

    let report = outcome.map_err(|e| anyhow!("Lookup failed: {}", e))?;
    let rendered = render_report(&report, options.format)?;

    match options.output {
        Some(path) => {
            save_report(&rendered, &path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report for {} saved to {}",
                "✓".green().bold(),
                report.domain.bright_white(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
