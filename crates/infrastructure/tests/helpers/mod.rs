#![allow(dead_code)]

use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use stubdns_application::ports::{DnsTransport, TransactionIdSource};
use stubdns_domain::ResolverError;

/// Deterministic transaction ids so mock responses can be matched (or
/// deliberately mismatched) against the query.
pub struct FixedIdSource(pub u16);

impl TransactionIdSource for FixedIdSource {
    fn next_id(&self) -> u16 {
        self.0
    }
}

/// Transport that serves a scripted sequence of responses and counts how
/// often it was hit.
pub struct MockTransport {
    responses: Mutex<Vec<Result<Vec<u8>, ResolverError>>>,
    calls: AtomicU64,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<Vec<u8>, ResolverError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn exchange(
        &self,
        _query: &[u8],
        _timeout: Duration,
    ) -> Result<Vec<u8>, ResolverError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let mut responses = self.responses.lock().unwrap();
        assert!(
            !responses.is_empty(),
            "MockTransport: more exchanges than scripted responses"
        );
        responses.remove(0)
    }
}

/// Wire-format response: header, question echo for `domain`, then
/// `answers` as pointer-named A/IN records.
pub fn build_response(id: u16, domain: &str, answers: &[(Ipv4Addr, u32)]) -> Vec<u8> {
    let mut packet = Vec::new();
    packet.extend_from_slice(&id.to_be_bytes());
    packet.extend_from_slice(&0x8180u16.to_be_bytes());
    packet.extend_from_slice(&1u16.to_be_bytes());
    packet.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    packet.extend_from_slice(&0u16.to_be_bytes());
    packet.extend_from_slice(&0u16.to_be_bytes());

    for label in domain.split('.') {
        packet.push(label.len() as u8);
        packet.extend_from_slice(label.as_bytes());
    }
    packet.push(0);
    packet.extend_from_slice(&1u16.to_be_bytes());
    packet.extend_from_slice(&1u16.to_be_bytes());

    for (address, ttl) in answers {
        packet.extend_from_slice(&0xC00Cu16.to_be_bytes());
        packet.extend_from_slice(&1u16.to_be_bytes());
        packet.extend_from_slice(&1u16.to_be_bytes());
        packet.extend_from_slice(&ttl.to_be_bytes());
        packet.extend_from_slice(&4u16.to_be_bytes());
        packet.extend_from_slice(&address.octets());
    }

    packet
}
