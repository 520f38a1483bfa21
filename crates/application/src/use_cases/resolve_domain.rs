use crate::ports::{DnsResolver, Resolution};
use std::sync::Arc;
use std::time::Instant;
use stubdns_domain::ResolverError;

pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, domain: &str) -> Result<Resolution, ResolverError> {
        let start = Instant::now();

        let resolution = self.resolver.resolve(domain).await?;

        match &resolution.address {
            Some(address) => tracing::debug!(
                domain = %domain,
                address = %address,
                cache_hit = resolution.cache_hit,
                elapsed_us = start.elapsed().as_micros() as u64,
                "Domain resolved"
            ),
            None => tracing::debug!(
                domain = %domain,
                elapsed_us = start.elapsed().as_micros() as u64,
                "No answer records for domain"
            ),
        }

        Ok(resolution)
    }
}
