use async_trait::async_trait;
use std::time::Duration;
use stubdns_domain::ResolverError;

/// Exchange of one query datagram for one response datagram.
///
/// The production implementation backs this with a UDP socket scoped to the
/// call. Tests substitute canned responses so the codec and resolver logic
/// run without any network.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn exchange(&self, query: &[u8], timeout: Duration)
        -> Result<Vec<u8>, ResolverError>;
}
