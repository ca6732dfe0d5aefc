//! Question and answer record codec (RFC 1035 §4.1.2, §4.1.3)

use super::name::{CompressionContext, NameCodec};
use bytes::BufMut;
use ferrous_relay_domain::{Answer, DomainError, Question, RecordClass, RecordData, RecordType};
use std::net::Ipv4Addr;

const A_RDLENGTH: u16 = 4;

pub struct RecordCodec;

impl RecordCodec {
    pub fn encode_question(
        question: &Question,
        buf: &mut Vec<u8>,
        ctx: &mut CompressionContext,
    ) -> Result<(), DomainError> {
        NameCodec::encode(&question.domain, buf, ctx)?;
        buf.put_u16(question.record_type.to_u16());
        buf.put_u16(question.class.to_u16());
        Ok(())
    }

    pub fn decode_question(msg: &[u8], start: usize) -> Result<(Question, usize), DomainError> {
        let (domain, pos) = NameCodec::decode(msg, start)?;
        let (record_type, pos) = read_type(msg, pos)?;
        let (class, pos) = read_class(msg, pos)?;

        Ok((
            Question {
                domain,
                record_type,
                class,
            },
            pos,
        ))
    }

    /// Only address records carry encodable data; any other type fails with
    /// `UnsupportedRecordType` before anything is written.
    pub fn encode_answer(
        answer: &Answer,
        buf: &mut Vec<u8>,
        ctx: &mut CompressionContext,
    ) -> Result<(), DomainError> {
        let address = match (answer.record_type, answer.data) {
            (RecordType::A, RecordData::A(address)) => address,
            (other, _) => return Err(DomainError::UnsupportedRecordType(other)),
        };

        NameCodec::encode(&answer.domain, buf, ctx)?;
        buf.put_u16(answer.record_type.to_u16());
        buf.put_u16(answer.class.to_u16());
        buf.put_u32(answer.ttl);
        buf.put_u16(A_RDLENGTH);
        buf.put_slice(&address.octets());
        Ok(())
    }

    pub fn decode_answer(msg: &[u8], start: usize) -> Result<(Answer, usize), DomainError> {
        let (domain, pos) = NameCodec::decode(msg, start)?;
        let (record_type, pos) = read_type(msg, pos)?;
        let (class, pos) = read_class(msg, pos)?;
        let (ttl, pos) = read_u32(msg, pos)?;
        let (rdlength, pos) = read_u16(msg, pos)?;
        let rdata = read_slice(msg, pos, rdlength as usize)?;

        let data = match record_type {
            RecordType::A if rdlength == A_RDLENGTH => {
                RecordData::A(Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]))
            }
            RecordType::A => {
                return Err(DomainError::MalformedRecordData(format!(
                    "A record for {} has rdlength {}",
                    domain, rdlength
                )))
            }
            other => return Err(DomainError::UnsupportedRecordType(other)),
        };

        Ok((
            Answer {
                domain,
                record_type,
                class,
                ttl,
                data,
            },
            pos + rdlength as usize,
        ))
    }
}

fn read_slice(msg: &[u8], pos: usize, len: usize) -> Result<&[u8], DomainError> {
    msg.get(pos..pos + len)
        .ok_or(DomainError::TruncatedMessage {
            offset: pos,
            needed: len,
        })
}

fn read_u16(msg: &[u8], pos: usize) -> Result<(u16, usize), DomainError> {
    let bytes = read_slice(msg, pos, 2)?;
    Ok((u16::from_be_bytes([bytes[0], bytes[1]]), pos + 2))
}

fn read_u32(msg: &[u8], pos: usize) -> Result<(u32, usize), DomainError> {
    let bytes = read_slice(msg, pos, 4)?;
    Ok((
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        pos + 4,
    ))
}

fn read_type(msg: &[u8], pos: usize) -> Result<(RecordType, usize), DomainError> {
    let (code, pos) = read_u16(msg, pos)?;
    let record_type = RecordType::from_u16(code).ok_or(DomainError::UnknownRecordType(code))?;
    Ok((record_type, pos))
}

fn read_class(msg: &[u8], pos: usize) -> Result<(RecordClass, usize), DomainError> {
    let (code, pos) = read_u16(msg, pos)?;
    let class = RecordClass::from_u16(code).ok_or(DomainError::UnknownRecordClass(code))?;
    Ok((class, pos))
}
