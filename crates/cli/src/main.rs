use anyhow::Context;
use clap::Parser;
use rootwalk_application::IterativeResolver;
use rootwalk_domain::{CliOverrides, DnsQuery, NsFallback, RecordType};
use rootwalk_infrastructure::WireExchange;
use std::net::IpAddr;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};

mod bootstrap;
mod trace;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Iterative DNS resolver - walks the delegation tree from a root server")]
struct Cli {
    /// Domain name to resolve
    name: String,

    /// Record type to ask for
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: String,

    /// Server for the first query (defaults to the root server)
    #[arg(short = 's', long)]
    server: Option<IpAddr>,

    /// Root server used for restarts (alias targets, NS hostnames)
    #[arg(long)]
    root: Option<IpAddr>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Destination port on every server
    #[arg(long)]
    port: Option<u16>,

    /// Per-hop timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum chained resolution steps
    #[arg(long)]
    max_depth: Option<u8>,

    /// NS fallback policy when a delegation has no glue (first-only, in-order)
    #[arg(long)]
    ns_fallback: Option<NsFallback>,

    /// Do not retry truncated UDP replies over TCP
    #[arg(long)]
    no_tcp_fallback: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "rootwalk failed");
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether a terminal value was found.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let cli_overrides = CliOverrides {
        root_server: cli.root,
        port: cli.port,
        query_timeout_secs: cli.timeout,
        max_depth: cli.max_depth,
        ns_fallback: cli.ns_fallback,
        disable_tcp_fallback: cli.no_tcp_fallback,
        log_level: cli.log_level.clone(),
    };

    let (config, source) = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    if let Some(path) = source {
        info!(path = %path, "Configuration loaded");
    }

    let record_type: RecordType = cli
        .record_type
        .parse()
        .context("invalid record type")?;
    let query = DnsQuery::new(&cli.name, record_type).context("invalid domain name")?;
    let start = cli.server.unwrap_or(config.resolver.root_server);

    debug!(
        root = %config.resolver.root_server,
        start = %start,
        max_depth = config.resolver.max_depth,
        timeout_secs = config.resolver.query_timeout_secs,
        "Starting iterative resolution"
    );

    let resolver = IterativeResolver::new(
        Arc::new(WireExchange::from_config(&config.resolver)),
        Arc::new(trace::StdoutTrace),
        config.resolver.clone(),
    );

    println!("Resolving {} ...", query);
    let outcome = resolver.resolve(&query, start, 0).await;

    match outcome {
        Ok(value) => {
            println!("\nFinal Result: {}", value);
            Ok(true)
        }
        Err(e) => {
            println!("\nFinal Result: no result ({})", e);
            Ok(false)
        }
    }
}
