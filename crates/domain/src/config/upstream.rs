use crate::UpstreamAddr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Resolver to forward questions to. Without one every question gets the
    /// placeholder answer.
    #[serde(default)]
    pub resolver: Option<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn is_forwarding(&self) -> bool {
        self.resolver.is_some()
    }

    /// Parsed resolver address, `None` when not forwarding.
    pub fn resolver_addr(&self) -> Option<Result<UpstreamAddr, crate::DomainError>> {
        self.resolver.as_deref().map(str::parse)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resolver: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}
