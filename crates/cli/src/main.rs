use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use stubdns_application::ResolveDomainUseCase;
use stubdns_domain::CliOverrides;
use stubdns_infrastructure::dns::{FastrandIdSource, StubResolver, UdpTransport};
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "stubdns")]
#[command(version)]
#[command(about = "Caching UDP stub resolver for A records")]
struct Cli {
    /// Domain name to resolve
    #[arg(default_value = "google.com")]
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream DNS server (ip:port)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Query timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        upstream_address: cli.server.clone(),
        query_timeout_secs: cli.timeout,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        upstream = %config.upstream.address,
        timeout_secs = config.resolver.query_timeout_secs,
        "Starting stubdns v{}",
        env!("CARGO_PKG_VERSION")
    );

    let transport = Arc::new(UdpTransport::new(config.upstream_addr()?));
    let resolver = Arc::new(
        StubResolver::new(transport, Arc::new(FastrandIdSource))
            .with_timeout(Duration::from_secs(config.resolver.query_timeout_secs))
            .with_cache_enabled(config.resolver.cache_enabled),
    );
    let use_case = ResolveDomainUseCase::new(resolver);

    // Resolve twice with a pause in between: while the first answer's TTL
    // is still running, the second lookup is served from the cache.
    for round in 0..2 {
        if round > 0 {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        let resolution = use_case.execute(&cli.domain).await?;
        if resolution.cache_hit {
            println!("In cache");
        }
        match resolution.address {
            Some(address) => println!("{} → {}", cli.domain, address),
            None => println!("{} → no answer", cli.domain),
        }
    }

    Ok(())
}
