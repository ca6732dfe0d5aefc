pub mod udp;

use async_trait::async_trait;
use ferrous_relay_domain::{DomainError, UpstreamAddr};
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One request/response exchange with an upstream server.
///
/// Implementations own whatever socket state an exchange needs, so
/// concurrent calls never share a receive path.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;

    fn server(&self) -> String;
}

/// Builds the transport for a resolved upstream address.
pub fn create_transport(addr: &UpstreamAddr) -> Result<udp::UdpTransport, DomainError> {
    match addr.socket_addr() {
        Some(server_addr) => Ok(udp::UdpTransport::new(server_addr)),
        None => Err(DomainError::InvalidUpstreamAddress(format!(
            "{} must be resolved before a transport is created",
            addr
        ))),
    }
}
