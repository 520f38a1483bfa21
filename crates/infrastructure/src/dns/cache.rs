//! TTL-bounded answer cache.
//!
//! One entry per domain name (exact, case-sensitive match). Entries are
//! trusted until their expiry instant; an expired entry is evicted on the
//! access that finds it stale, never proactively. There is no size bound.

use dashmap::DashMap;
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub address: Ipv4Addr,
    pub ttl: u32,
    pub expires_at: Instant,
}

impl CacheEntry {
    fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            address,
            ttl,
            expires_at: Instant::now() + Duration::from_secs(u64::from(ttl)),
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Whole seconds left before expiry, zero once stale.
    pub fn remaining_ttl(&self) -> u32 {
        self.expires_at
            .saturating_duration_since(Instant::now())
            .as_secs()
            .min(u64::from(u32::MAX)) as u32
    }
}

pub struct TtlCache {
    entries: DashMap<String, CacheEntry>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Fresh entry for `domain`, or `None`. An entry found expired is
    /// removed before returning.
    pub fn get(&self, domain: &str) -> Option<CacheEntry> {
        let stale = match self.entries.get(domain) {
            Some(entry) if !entry.is_expired() => return Some(entry.clone()),
            Some(_) => true,
            None => false,
        };

        if stale {
            self.entries.remove_if(domain, |_, entry| entry.is_expired());
        }
        None
    }

    /// Insert or overwrite, expiry = now + ttl.
    pub fn insert(&self, domain: String, address: Ipv4Addr, ttl: u32) {
        self.entries.insert(domain, CacheEntry::new(address, ttl));
    }

    pub fn remove(&self, domain: &str) {
        self.entries.remove(domain);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}
