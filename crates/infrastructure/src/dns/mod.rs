pub mod forwarding;
pub mod resolver;
pub mod server;
pub mod transport;
pub mod wire;

pub use forwarding::DnsForwarder;
pub use resolver::PlaceholderResolver;
pub use server::DnsServerHandler;
