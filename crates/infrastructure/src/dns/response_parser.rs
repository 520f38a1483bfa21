//! DNS response decoder.
//!
//! Fixed-offset parser for the narrow response shape our queries provoke:
//! the echoed question section is skipped, only the first answer record is
//! consumed, and the answer name is assumed to be a 2-byte compression
//! pointer. Known limitations, kept deliberately: literal answer names are
//! not walked, and TYPE/CLASS/RDLENGTH are read but not validated, so a
//! CNAME-only response has its first four rdata bytes read as an address.
//! Every read is bounds-checked; truncated packets surface as
//! `MalformedResponse` rather than a panic.

use std::net::Ipv4Addr;
use stubdns_domain::ResolverError;

/// First answer of a response, if it carried one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnswer {
    pub address: Option<Ipv4Addr>,
    pub ttl: Option<u32>,
}

impl ParsedAnswer {
    fn empty() -> Self {
        Self {
            address: None,
            ttl: None,
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parse `packet` against the transaction id of the query that was
    /// sent. An empty answer section is a valid result, not an error.
    pub fn parse(packet: &[u8], expected_id: u16) -> Result<ParsedAnswer, ResolverError> {
        let received_id = read_u16(packet, 0)?;
        if received_id != expected_id {
            return Err(ResolverError::TransactionMismatch {
                expected: expected_id,
                received: received_id,
            });
        }

        let qdcount = read_u16(packet, 4)?;
        let ancount = read_u16(packet, 6)?;

        let mut offset = 12usize;

        // Skip the echoed question section: walk labels until the zero
        // terminator, then jump over terminator + QTYPE + QCLASS.
        for _ in 0..qdcount {
            loop {
                let len = read_u8(packet, offset)?;
                if len == 0 {
                    break;
                }
                offset += len as usize + 1;
            }
            offset += 5;
        }

        if ancount == 0 {
            return Ok(ParsedAnswer::empty());
        }

        // Answer name, assumed to be a compression pointer back into the
        // question (0xC00C in practice).
        offset += 2;

        let _rtype = read_u16(packet, offset)?;
        let _rclass = read_u16(packet, offset + 2)?;
        let ttl = read_u32(packet, offset + 4)?;
        let _rdlength = read_u16(packet, offset + 8)?;
        offset += 10;

        let address = Ipv4Addr::new(
            read_u8(packet, offset)?,
            read_u8(packet, offset + 1)?,
            read_u8(packet, offset + 2)?,
            read_u8(packet, offset + 3)?,
        );

        Ok(ParsedAnswer {
            address: Some(address),
            ttl: Some(ttl),
        })
    }
}

fn read_u8(packet: &[u8], offset: usize) -> Result<u8, ResolverError> {
    packet
        .get(offset)
        .copied()
        .ok_or_else(|| truncated(packet, offset, 1))
}

fn read_u16(packet: &[u8], offset: usize) -> Result<u16, ResolverError> {
    match packet.get(offset..offset + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(truncated(packet, offset, 2)),
    }
}

fn read_u32(packet: &[u8], offset: usize) -> Result<u32, ResolverError> {
    match packet.get(offset..offset + 4) {
        Some(bytes) => Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(truncated(packet, offset, 4)),
    }
}

fn truncated(packet: &[u8], offset: usize, want: usize) -> ResolverError {
    ResolverError::MalformedResponse(format!(
        "packet truncated: need {} byte(s) at offset {}, have {}",
        want,
        offset,
        packet.len()
    ))
}
