//! Stubdns Application Layer
//!
//! Ports (traits) the infrastructure implements, plus the use case the CLI
//! drives. Nothing in this crate touches a socket.
pub mod ports;
pub mod use_cases;

pub use use_cases::ResolveDomainUseCase;
