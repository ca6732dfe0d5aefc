//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing) and limited to 512 bytes.
//! Every exchange binds its own ephemeral socket, so concurrent exchanges
//! are isolated; replies are matched on source address and transaction id
//! until the deadline passes.

use super::{DnsTransport, TransportResponse};
use crate::dns::wire::MAX_UDP_MESSAGE_SIZE;
use async_trait::async_trait;
use ferrous_relay_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::QueryTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

/// Checks that `response` carries the transaction id of `query`.
pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::ResponseMismatch {
            server: server.to_string(),
            reason: "message too short to carry an id".to_string(),
        });
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);
    if query_id != response_id {
        return Err(DomainError::ResponseMismatch {
            server: server.to_string(),
            reason: format!("id mismatch: sent {}, got {}", query_id, response_id),
        });
    }
    Ok(())
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let deadline = Instant::now() + timeout;

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent =
            tokio::time::timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| {
                    DomainError::IoError(format!(
                        "Failed to send UDP query to {}: {}",
                        self.server_addr, e
                    ))
                })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| self.timeout_error())?
                    .map_err(|e| {
                        DomainError::IoError(format!(
                            "Failed to receive UDP response from {}: {}",
                            self.server_addr, e
                        ))
                    })?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "Ignoring UDP datagram from unexpected source"
                );
                continue;
            }

            let response = &recv_buf[..bytes_received];
            if let Err(e) = validate_response_id(message_bytes, response, self.server_addr) {
                warn!(error = %e, "Ignoring UDP response");
                continue;
            }

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            recv_buf.truncate(bytes_received);
            return Ok(TransportResponse {
                bytes: recv_buf,
                protocol_used: "UDP",
            });
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }

    fn server(&self) -> String {
        self.server_addr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let addr: SocketAddr = "8.8.8.8:53".parse().unwrap();
        let transport = UdpTransport::new(addr);
        assert_eq!(transport.server_addr, addr);
        assert_eq!(transport.protocol_name(), "UDP");
        assert_eq!(transport.server(), "8.8.8.8:53");
    }

    #[test]
    fn test_udp_transport_ipv6_binds_ipv6() {
        let addr: SocketAddr = "[2001:4860:4860::8888]:53".parse().unwrap();
        let transport = UdpTransport::new(addr);
        assert!(transport.bind_addr().is_ipv6());
    }
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod udp_test;
