use async_trait::async_trait;
use std::net::Ipv4Addr;
use stubdns_domain::ResolverError;

/// Outcome of a single lookup.
///
/// `address` is `None` when the upstream answered with an empty answer
/// section. That is a defined result, not an error: the caller gets nothing
/// and the next lookup for the same name goes back to the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub address: Option<Ipv4Addr>,
    pub ttl: Option<u32>,
    pub cache_hit: bool,
}

impl Resolution {
    pub fn fresh(address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            address: Some(address),
            ttl: Some(ttl),
            cache_hit: false,
        }
    }

    pub fn cached(address: Ipv4Addr, remaining_ttl: u32) -> Self {
        Self {
            address: Some(address),
            ttl: Some(remaining_ttl),
            cache_hit: true,
        }
    }

    pub fn no_answer() -> Self {
        Self {
            address: None,
            ttl: None,
            cache_hit: false,
        }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, domain: &str) -> Result<Resolution, ResolverError>;
}
