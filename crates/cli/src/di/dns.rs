use anyhow::Context;
use ferrous_relay_application::ports::DnsResolver;
use ferrous_relay_application::use_cases::HandleDnsQueryUseCase;
use ferrous_relay_domain::{Config, UpstreamAddr};
use ferrous_relay_infrastructure::dns::transport::create_transport;
use ferrous_relay_infrastructure::dns::{DnsForwarder, DnsServerHandler, PlaceholderResolver};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = Self::build_resolver(config).await?;
        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(resolver));

        Ok(Self { handler_use_case })
    }

    pub fn handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.handler_use_case.clone())
    }

    async fn build_resolver(config: &Config) -> anyhow::Result<Arc<dyn DnsResolver>> {
        let Some(addr) = config.upstream.resolver_addr() else {
            info!("No upstream resolver configured, answering with placeholder records");
            return Ok(Arc::new(PlaceholderResolver::default()));
        };

        let addr = Self::resolve_upstream(addr?).await?;
        let transport = create_transport(&addr)?;

        info!(
            upstream = %addr,
            timeout_ms = config.upstream.timeout_ms,
            "Forwarding queries upstream"
        );

        Ok(Arc::new(DnsForwarder::with_timeout_ms(
            Arc::new(transport),
            config.upstream.timeout_ms,
        )))
    }

    /// Hostname upstreams are looked up once at startup; the first address wins.
    async fn resolve_upstream(addr: UpstreamAddr) -> anyhow::Result<UpstreamAddr> {
        let (hostname, port) = match addr.unresolved_parts() {
            Some((hostname, port)) => (hostname.to_string(), port),
            None => return Ok(addr),
        };

        let resolved = tokio::net::lookup_host((hostname.as_str(), port))
            .await
            .with_context(|| format!("Failed to look up upstream resolver {}", addr))?
            .next()
            .with_context(|| format!("Upstream resolver {} has no addresses", addr))?;

        info!(hostname = %hostname, resolved = %resolved, "Upstream hostname resolved");
        Ok(UpstreamAddr::Resolved(resolved))
    }
}
