//! DNS query encoder (RFC 1035 §4.1)
//!
//! Builds the 12-byte header and a single A/IN question by hand. The
//! question name is emitted as length-prefixed labels split on `.`; label
//! lengths are not validated against the 63-byte RFC limit, so an oversized
//! label produces a malformed packet the upstream will reject.

use stubdns_application::ports::TransactionIdSource;

/// Standard query, recursion desired.
pub const FLAGS_STANDARD_QUERY: u16 = 0x0100;
/// A record.
pub const QTYPE_A: u16 = 1;
/// Internet class.
pub const QCLASS_IN: u16 = 1;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an A/IN query for `domain`, drawing the transaction id from
    /// `ids`. Returns the id alongside the packet so the caller can match
    /// the response.
    pub fn build_query(domain: &str, ids: &dyn TransactionIdSource) -> (u16, Vec<u8>) {
        let id = ids.next_id();
        (id, Self::build_query_with_id(domain, id))
    }

    /// Encode a query with an explicit transaction id.
    pub fn build_query_with_id(domain: &str, id: u16) -> Vec<u8> {
        let mut packet = Vec::with_capacity(12 + domain.len() + 2 + 4);

        // Header: id, flags, QDCOUNT=1, ANCOUNT=0, NSCOUNT=0, ARCOUNT=0.
        packet.extend_from_slice(&id.to_be_bytes());
        packet.extend_from_slice(&FLAGS_STANDARD_QUERY.to_be_bytes());
        packet.extend_from_slice(&1u16.to_be_bytes());
        packet.extend_from_slice(&0u16.to_be_bytes());
        packet.extend_from_slice(&0u16.to_be_bytes());
        packet.extend_from_slice(&0u16.to_be_bytes());

        // Question: length-prefixed labels, zero terminator, QTYPE, QCLASS.
        for label in domain.split('.') {
            packet.push(label.len() as u8);
            packet.extend_from_slice(label.as_bytes());
        }
        packet.push(0);
        packet.extend_from_slice(&QTYPE_A.to_be_bytes());
        packet.extend_from_slice(&QCLASS_IN.to_be_bytes());

        packet
    }
}
