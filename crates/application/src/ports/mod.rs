mod dns_resolver;
mod dns_transport;
mod transaction_id;

pub use dns_resolver::{DnsResolver, Resolution};
pub use dns_transport::DnsTransport;
pub use transaction_id::TransactionIdSource;
