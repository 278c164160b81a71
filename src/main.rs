use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Server;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use maven_version_resolver::config::{ResolverConfig, DEFAULT_MAX_PAGES};
use maven_version_resolver::search::diagnostics::TracingDiagnostics;
use maven_version_resolver::server::router;

/// Lists the versions of a Maven artifact available in a Nexus 3 repository
#[derive(Parser)]
struct Cli {
    /// Address to serve the HTTP API on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Timeout for each request to the repository, at least 1
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    request_timeout_secs: u64,

    /// Maximum number of result pages per search, 0 for no limit
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// User agent sent to the repository
    #[arg(long)]
    user_agent: Option<String>,
}
impl Cli {
    fn resolver_config(&self) -> ResolverConfig {
        let mut config = ResolverConfig {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_pages: if self.max_pages == 0 { None } else { Some(self.max_pages) },
            ..Default::default()
        };
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let app = router(cli.resolver_config(), Arc::new(TracingDiagnostics));

    info!("serving {}", cli.bind);
    Server::bind(&cli.bind)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
