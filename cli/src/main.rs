mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{config::ConfigCommand, search::SearchCommand};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};
use usersearch_client::SearchClient;

#[derive(Parser)]
#[command(name = "usersearch")]
#[command(about = "cli for querying a user search server", long_about = None)]
struct Cli {
    /// Server url (overides config)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Access token (overides config)
    #[arg(long, global = true, env = "USERSEARCH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout, e.g. 500ms or 2s (overides config)
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Output format (table or json)
    #[arg(long, global = true, value_parser = ["table", "json"])]
    output: Option<String>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Search users
    Search(SearchCommand),
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}\n{:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let _ = FmtSubscriber::builder()
        .with_env_filter(env_filter(log_level(&cli.log), &directives))
        .with_writer(std::io::stderr)
        .try_init();

    match &cli.command {
        Command::Config { command } => command.clone().execute(),
        Command::Search(command) => {
            let (client, output_format) = setup_client_and_format(&cli)?;
            command.clone().execute(&client, &output_format).await
        }
    }
}

fn setup_client_and_format(cli: &Cli) -> Result<(SearchClient, config::OutputFormat)> {
    let cfg = config::load_config().context("Fail to load config")?;

    let server_url = cli.server.as_ref().unwrap_or(&cfg.server_url);
    let access_token = cli.token.as_ref().unwrap_or(&cfg.access_token);
    let timeout = match cli.timeout {
        Some(timeout) => timeout,
        None => cfg.timeout()?,
    };
    let client =
        SearchClient::new(access_token.clone(), server_url.clone()).with_timeout(timeout);
    debug!(
        server_url = %client.base_url(),
        timeout = ?client.timeout(),
        "create search client"
    );

    let output_format = cli
        .output
        .as_deref()
        .map(|fmt| match fmt {
            "json" => config::OutputFormat::Json,
            _ => config::OutputFormat::Table,
        })
        .unwrap_or(cfg.output_format);

    Ok((client, output_format))
}

fn log_level(level: &str) -> LevelFilter {
    match level.to_uppercase().as_str() {
        "TRACE" => LevelFilter::TRACE,
        "DEBUG" => LevelFilter::DEBUG,
        "INFO" => LevelFilter::INFO,
        "ERROR" => LevelFilter::ERROR,
        "OFF" => LevelFilter::OFF,
        _ => LevelFilter::WARN,
    }
}

/// `--log` sets the default level; `RUST_LOG` directives refine it.
fn env_filter(level: LevelFilter, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives)
}
