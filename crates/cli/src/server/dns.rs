use ferrous_relay_infrastructure::dns::server::DnsServerHandler;
use ferrous_relay_infrastructure::dns::wire::MAX_UDP_MESSAGE_SIZE;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Binds `bind_addr` and serves queries until the socket fails.
///
/// Each datagram is handled in its own task so a slow upstream exchange never
/// blocks the receive loop.
pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(UdpSocket::bind(socket_addr).await?);

    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    run_udp_loop(socket, Arc::new(handler)).await
}

async fn run_udp_loop(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
) -> anyhow::Result<()> {
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                // ICMP port unreachable from a previous reply surfaces here on some platforms.
                warn!(error = %e, "UDP receive failed");
                continue;
            }
        };

        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = handler.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            let Some(response) = handler.handle_raw(&query, from).await else {
                return;
            };

            match socket.send_to(&response, from).await {
                Ok(sent) => debug!(client = %from, bytes = sent, "Response sent"),
                Err(e) => error!(client = %from, error = %e, "Failed to send response"),
            }
        });
    }
}
