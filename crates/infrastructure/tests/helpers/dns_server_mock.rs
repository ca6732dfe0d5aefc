use ferrous_relay_domain::dns_message::RCODE_NOT_IMPLEMENTED;
use ferrous_relay_domain::{Answer, Header, Message};
use ferrous_relay_infrastructure::dns::wire::MessageCodec;
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Upstream stand-in answering single-question queries from a fixed table.
///
/// Names missing from the table are never answered. Per-name delays let
/// tests reorder replies. Queries with a non-zero opcode, and names given an
/// error rcode, get a bare header reply with no question echoed.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

#[derive(Default, Clone)]
pub struct MockZone {
    addresses: HashMap<String, Ipv4Addr>,
    delays: HashMap<String, Duration>,
    rcodes: HashMap<String, u8>,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, name: &str, address: Ipv4Addr) -> Self {
        self.addresses.insert(normalize(name), address);
        self
    }

    pub fn with_rcode(mut self, name: &str, rcode: u8) -> Self {
        self.rcodes.insert(normalize(name), rcode);
        self
    }

    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(normalize(name), delay);
        self
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

impl MockDnsServer {
    /// Binds an ephemeral port on loopback.
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let socket = Arc::new(UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?);
        let addr = socket.local_addr()?;
        let zone = Arc::new(zone);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = MessageCodec::decode(&buf[..len]) else { continue };

                        let socket = socket.clone();
                        let zone = zone.clone();
                        tokio::spawn(async move {
                            if let Some((response, delay)) = Self::build_response(&zone, &query) {
                                tokio::time::sleep(delay).await;
                                let _ = socket.send_to(&response, peer).await;
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(zone: &MockZone, query: &Message) -> Option<(Vec<u8>, Duration)> {
        if !query.header.is_standard_query() {
            return Self::bare_reply(query, RCODE_NOT_IMPLEMENTED);
        }

        let question = query.questions.first()?;
        let key = normalize(&question.domain);
        if let Some(rcode) = zone.rcodes.get(&key) {
            return Self::bare_reply(query, *rcode);
        }
        let address = zone.addresses.get(&key)?;
        let delay = zone.delays.get(&key).copied().unwrap_or_default();

        let answer = Answer::a(question.domain.clone(), 300, *address);
        let response = Message::response_for(query, vec![answer]);
        MessageCodec::encode(&response).ok().map(|bytes| (bytes, delay))
    }

    fn bare_reply(query: &Message, rcode: u8) -> Option<(Vec<u8>, Duration)> {
        let header = Header {
            id: query.header.id,
            is_response: true,
            opcode: query.header.opcode,
            recursion_desired: query.header.recursion_desired,
            response_code: rcode,
            ..Header::default()
        };
        MessageCodec::encode(&Message::new(header, vec![], vec![]))
            .ok()
            .map(|bytes| (bytes, Duration::ZERO))
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
