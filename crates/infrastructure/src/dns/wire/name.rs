//! Domain name codec with message compression (RFC 1035 §4.1.4)

use bytes::BufMut;
use ferrous_relay_domain::DomainError;
use std::collections::HashMap;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const POINTER_TAG: u8 = 0xC0;
const POINTER_TAG_U16: u16 = 0xC000;
const MAX_POINTER_OFFSET: usize = 0x3FFF;

/// Suffixes written so far in one outgoing message, keyed by their dotted
/// form (no trailing dot) and mapped to the offset of their first label.
///
/// Offsets are positions in the message buffer, so the buffer handed to
/// [`NameCodec::encode`] must start at the first header byte. A context
/// lives for exactly one message.
#[derive(Debug, Default)]
pub struct CompressionContext {
    suffixes: HashMap<String, u16>,
}

impl CompressionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset_of(&self, suffix: &str) -> Option<u16> {
        self.suffixes.get(suffix).copied()
    }

    fn remember(&mut self, suffix: &str, offset: usize) {
        if offset <= MAX_POINTER_OFFSET {
            self.suffixes
                .entry(suffix.to_string())
                .or_insert(offset as u16);
        }
    }
}

pub struct NameCodec;

impl NameCodec {
    /// Writes `name` at the end of `buf`, replacing the longest suffix
    /// already present in `ctx` by a pointer.
    pub fn encode(
        name: &str,
        buf: &mut Vec<u8>,
        ctx: &mut CompressionContext,
    ) -> Result<(), DomainError> {
        let name = name.strip_suffix('.').unwrap_or(name);
        Self::validate(name)?;

        if name.is_empty() {
            buf.put_u8(0);
            return Ok(());
        }

        let mut rest = name;
        loop {
            if let Some(offset) = ctx.offset_of(rest) {
                buf.put_u16(POINTER_TAG_U16 | offset);
                return Ok(());
            }

            ctx.remember(rest, buf.len());

            let (label, tail) = match rest.split_once('.') {
                Some((label, tail)) => (label, Some(tail)),
                None => (rest, None),
            };
            buf.put_u8(label.len() as u8);
            buf.put_slice(label.as_bytes());

            match tail {
                Some(tail) => rest = tail,
                None => break,
            }
        }

        buf.put_u8(0);
        Ok(())
    }

    /// Reads the name starting at `start` in `msg`.
    ///
    /// Returns the dotted name with a trailing dot (`"."` for the root) and
    /// the offset just past the name as it appears at `start`.
    ///
    /// Every pointer must target an offset below both its own position and
    /// the previous pointer's target, so each jump strictly decreases the
    /// read position and decoding always terminates.
    pub fn decode(msg: &[u8], start: usize) -> Result<(String, usize), DomainError> {
        let mut pos = start;
        let mut resume_at: Option<usize> = None;
        let mut last_target: Option<usize> = None;
        let mut wire_len = 1usize;
        let mut name = String::new();

        loop {
            let len = *msg
                .get(pos)
                .ok_or_else(|| malformed(pos, "name runs past end of message"))?;

            match len & POINTER_TAG {
                0x00 if len == 0 => {
                    pos += 1;
                    break;
                }
                0x00 => {
                    let label_start = pos + 1;
                    let label_end = label_start + len as usize;
                    let label = msg
                        .get(label_start..label_end)
                        .ok_or_else(|| malformed(pos, "truncated label"))?;

                    wire_len += len as usize + 1;
                    if wire_len > MAX_NAME_LEN {
                        return Err(malformed(pos, "name exceeds 255 bytes"));
                    }

                    // Labels must survive the dotted form unchanged.
                    if label.contains(&b'.') {
                        return Err(malformed(pos, "label contains a dot"));
                    }
                    let label = std::str::from_utf8(label)
                        .ok()
                        .filter(|l| l.is_ascii())
                        .ok_or_else(|| malformed(pos, "label is not ASCII"))?;

                    name.push_str(label);
                    name.push('.');
                    pos = label_end;
                }
                POINTER_TAG => {
                    let low = *msg
                        .get(pos + 1)
                        .ok_or_else(|| malformed(pos, "truncated compression pointer"))?;
                    let target = (((len & !POINTER_TAG) as usize) << 8) | low as usize;

                    let bound = last_target.map_or(pos, |t| t.min(pos));
                    if target >= bound {
                        return Err(malformed(pos, "compression pointer does not point backwards"));
                    }

                    resume_at.get_or_insert(pos + 2);
                    last_target = Some(target);
                    pos = target;
                }
                _ => return Err(malformed(pos, "reserved label type")),
            }
        }

        if name.is_empty() {
            name.push('.');
        }

        Ok((name, resume_at.unwrap_or(pos)))
    }

    fn validate(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Ok(());
        }
        if !name.is_ascii() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains non-ASCII characters",
                name
            )));
        }
        if name.len() + 2 > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' exceeds {} bytes on the wire",
                name, MAX_NAME_LEN
            )));
        }
        for label in name.split('.') {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' has a label of {} bytes (allowed 1-{})",
                    name,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
        }
        Ok(())
    }
}

fn malformed(offset: usize, reason: &'static str) -> DomainError {
    DomainError::MalformedName { offset, reason }
}
