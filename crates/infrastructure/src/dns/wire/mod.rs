//! DNS wire format codec (RFC 1035 §4)
//!
//! Everything is big-endian. Decoding works on an immutable view of the
//! whole datagram so compression pointers can be resolved against it;
//! encoding appends to a buffer that starts at the first header byte.
pub mod header;
pub mod message;
pub mod name;
pub mod record;

pub use header::{HeaderCodec, HEADER_LEN};
pub use message::{MessageCodec, MAX_UDP_MESSAGE_SIZE};
pub use name::{CompressionContext, NameCodec};
pub use record::RecordCodec;
