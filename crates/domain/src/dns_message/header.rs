/// OPCODE of a standard query.
pub const OPCODE_QUERY: u8 = 0;

/// RCODE for a successful response.
pub const RCODE_NO_ERROR: u8 = 0;

/// RCODE returned for any opcode other than a standard query.
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;

/// Fixed 12-byte message header (RFC 1035 §4.1.1).
///
/// `opcode` and `response_code` hold 4-bit values and `z` a 3-bit value;
/// higher bits are dropped when the header is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub is_response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub z: u8,
    pub response_code: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub nameserver_count: u16,
    pub additional_count: u16,
}

impl Header {
    /// Header of a standard recursive query carrying `question_count` questions.
    pub fn query(id: u16, question_count: u16) -> Self {
        Self {
            id,
            recursion_desired: true,
            question_count,
            ..Self::default()
        }
    }

    pub fn is_standard_query(&self) -> bool {
        self.opcode == OPCODE_QUERY
    }
}
