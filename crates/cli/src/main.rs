use clap::Parser;
use mesos_dns_application::use_cases::MesosDnsClient;
use mesos_dns_domain::CliOverrides;
use mesos_dns_infrastructure::DnsClientBuilder;
use tracing::info;

mod bootstrap;
mod commands;
mod output;

#[derive(Parser)]
#[command(name = "mesos-dns")]
#[command(version)]
#[command(about = "Service discovery lookups against Mesos-DNS")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Mesos-DNS server as host[:port]; repeat for fallbacks
    #[arg(short = 's', long = "server", value_name = "HOST")]
    servers: Vec<String>,

    /// Discovery domain
    #[arg(short = 'd', long)]
    domain: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Reject non-authoritative answers
    #[arg(long)]
    authoritative: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[arg(long)]
    no_cache: bool,

    /// Do not retry empty answers
    #[arg(long)]
    no_retry: bool,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        servers: cli.servers,
        domain: cli.domain,
        timeout_ms: cli.timeout_ms,
        authoritative: cli.authoritative,
        no_cache: cli.no_cache,
        no_retry: cli.no_retry,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting mesos-dns v{}", env!("CARGO_PKG_VERSION"));

    let builder = DnsClientBuilder::from_config(&config)?;
    let domain = builder.domain().to_string();
    let client = MesosDnsClient::new(builder.build()?);

    commands::run(&client, &domain, cli.command).await
}
