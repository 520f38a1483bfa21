//! Stubdns Infrastructure Layer
//!
//! Wire codec, TTL cache, UDP transport and the resolver that composes
//! them behind the application-layer ports.
pub mod dns;
