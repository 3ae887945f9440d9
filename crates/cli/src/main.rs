use clap::{CommandFactory, Parser};
use static_dns_domain::{parse_transport_spec, CliOverrides, ConfigError, DomainError};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "static-dns")]
#[command(version)]
#[command(about = "Authoritative DNS server answering A/AAAA queries from a static record file")]
struct Cli {
    /// Record file: one `name<TAB>ip` entry per line
    #[arg(value_name = "RECORDS")]
    records: Option<String>,

    /// Comma-separated listeners, e.g. "udp:0.0.0.0:53,tcp:0.0.0.0:53"
    #[arg(short = 'l', long, value_name = "SPEC")]
    listen: Option<String>,

    /// TTL in seconds for every answer
    #[arg(short = 't', long, value_name = "SECONDS")]
    ttl: Option<u32>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Idle timeout for TCP connections
    #[arg(long, value_name = "SECONDS")]
    tcp_timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is::<bootstrap::UsageError>() => {
            let _ = Cli::command().print_help();
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{}: {:#}", error_kind(&e), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cli_overrides = CliOverrides {
        listen: cli.listen,
        tcp_timeout_secs: cli.tcp_timeout,
        records_path: cli.records,
        ttl: cli.ttl,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    let records_path = config
        .records
        .path
        .clone()
        .ok_or(bootstrap::UsageError)?;

    bootstrap::init_logging(&config);

    info!("Starting static-dns v{}", env!("CARGO_PKG_VERSION"));

    let table = bootstrap::load_routing_table(&records_path, config.records.ttl)?;
    let endpoints = parse_transport_spec(&config.server.listen);

    server::run_dns_listeners(
        endpoints,
        Arc::new(table),
        Duration::from_secs(config.server.tcp_timeout_secs),
    )
    .await;

    info!("Server shutdown complete");
    Ok(())
}

fn error_kind(error: &anyhow::Error) -> &'static str {
    if let Some(e) = error.downcast_ref::<DomainError>() {
        e.kind()
    } else if error.is::<ConfigError>() {
        "ConfigError"
    } else {
        "Error"
    }
}
