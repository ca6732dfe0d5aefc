use clap::Parser;
use ferrous_relay_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-relay")]
#[command(version)]
#[command(about = "Ferrous Relay - forwarding DNS server over UDP")]
struct Cli {
    /// Upstream resolver to forward queries to (HOST:PORT)
    #[arg(long, value_name = "HOST:PORT")]
    resolver: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Upstream query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.port,
        bind_address: cli.bind,
        resolver: cli.resolver,
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Relay v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config).await?;
    let dns_addr = config.server.listen_addr();

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_services.handler()) => {
            if let Err(e) = &result {
                error!(error = %e, "DNS server error");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
