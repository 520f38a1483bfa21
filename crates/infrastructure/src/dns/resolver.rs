//! Cache-aware stub resolver.
//!
//! Per lookup: cache check, then (on miss) encode, one transport exchange,
//! decode, cache store. Timeouts, transaction mismatches and malformed
//! packets are terminal for the call and never touch the cache; an empty
//! answer section is returned as-is and never cached, so the next lookup
//! for that name retries the network.

use crate::dns::cache::TtlCache;
use crate::dns::message_builder::MessageBuilder;
use crate::dns::response_parser::ResponseParser;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use stubdns_application::ports::{DnsResolver, DnsTransport, Resolution, TransactionIdSource};
use stubdns_domain::ResolverError;
use tracing::debug;

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

pub struct StubResolver {
    transport: Arc<dyn DnsTransport>,
    ids: Arc<dyn TransactionIdSource>,
    cache: TtlCache,
    timeout: Duration,
    cache_enabled: bool,
}

impl StubResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, ids: Arc<dyn TransactionIdSource>) -> Self {
        Self {
            transport,
            ids,
            cache: TtlCache::new(),
            timeout: DEFAULT_QUERY_TIMEOUT,
            cache_enabled: true,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// The resolver-owned cache, exposed for inspection and teardown.
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }
}

#[async_trait]
impl DnsResolver for StubResolver {
    async fn resolve(&self, domain: &str) -> Result<Resolution, ResolverError> {
        if self.cache_enabled {
            if let Some(entry) = self.cache.get(domain) {
                debug!(domain = %domain, address = %entry.address, "Cache HIT");
                return Ok(Resolution::cached(entry.address, entry.remaining_ttl()));
            }
        }

        let (id, query) = MessageBuilder::build_query(domain, self.ids.as_ref());
        debug!(domain = %domain, id = id, "Cache MISS, querying upstream");

        let response = self.transport.exchange(&query, self.timeout).await?;
        let answer = ResponseParser::parse(&response, id)?;

        match (answer.address, answer.ttl) {
            (Some(address), Some(ttl)) => {
                if self.cache_enabled {
                    self.cache.insert(domain.to_string(), address, ttl);
                }
                Ok(Resolution::fresh(address, ttl))
            }
            _ => Ok(Resolution::no_answer()),
        }
    }
}
