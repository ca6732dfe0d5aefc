//! Header codec (RFC 1035 §4.1.1)
//!
//! Flag word layout, MSB first:
//! `QR(1) OPCODE(4) AA(1) TC(1) RD(1) RA(1) Z(3) RCODE(4)`

use bytes::{Buf, BufMut};
use ferrous_relay_domain::{DomainError, Header};

pub const HEADER_LEN: usize = 12;

const QR_BIT: u16 = 1 << 15;
const AA_BIT: u16 = 1 << 10;
const TC_BIT: u16 = 1 << 9;
const RD_BIT: u16 = 1 << 8;
const RA_BIT: u16 = 1 << 7;
const OPCODE_SHIFT: u16 = 11;
const Z_SHIFT: u16 = 4;
const NIBBLE: u16 = 0x0F;
const Z_MASK: u16 = 0x07;

pub struct HeaderCodec;

impl HeaderCodec {
    pub fn encode(header: &Header, buf: &mut impl BufMut) {
        buf.put_u16(header.id);
        buf.put_u16(Self::pack_flags(header));
        buf.put_u16(header.question_count);
        buf.put_u16(header.answer_count);
        buf.put_u16(header.nameserver_count);
        buf.put_u16(header.additional_count);
    }

    pub fn decode(bytes: &[u8]) -> Result<Header, DomainError> {
        if bytes.len() < HEADER_LEN {
            return Err(DomainError::MalformedHeader(bytes.len()));
        }

        let mut buf = &bytes[..HEADER_LEN];
        let id = buf.get_u16();
        let flags = buf.get_u16();

        Ok(Header {
            id,
            is_response: flags & QR_BIT != 0,
            opcode: ((flags >> OPCODE_SHIFT) & NIBBLE) as u8,
            authoritative: flags & AA_BIT != 0,
            truncated: flags & TC_BIT != 0,
            recursion_desired: flags & RD_BIT != 0,
            recursion_available: flags & RA_BIT != 0,
            z: ((flags >> Z_SHIFT) & Z_MASK) as u8,
            response_code: (flags & NIBBLE) as u8,
            question_count: buf.get_u16(),
            answer_count: buf.get_u16(),
            nameserver_count: buf.get_u16(),
            additional_count: buf.get_u16(),
        })
    }

    fn pack_flags(header: &Header) -> u16 {
        let mut flags = 0u16;
        if header.is_response {
            flags |= QR_BIT;
        }
        flags |= (header.opcode as u16 & NIBBLE) << OPCODE_SHIFT;
        if header.authoritative {
            flags |= AA_BIT;
        }
        if header.truncated {
            flags |= TC_BIT;
        }
        if header.recursion_desired {
            flags |= RD_BIT;
        }
        if header.recursion_available {
            flags |= RA_BIT;
        }
        flags |= (header.z as u16 & Z_MASK) << Z_SHIFT;
        flags | (header.response_code as u16 & NIBBLE)
    }
}
