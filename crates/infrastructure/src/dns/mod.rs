pub mod cache;
pub mod id_source;
pub mod message_builder;
pub mod resolver;
pub mod response_parser;
pub mod udp;

pub use cache::TtlCache;
pub use id_source::FastrandIdSource;
pub use message_builder::MessageBuilder;
pub use resolver::StubResolver;
pub use response_parser::{ParsedAnswer, ResponseParser};
pub use udp::UdpTransport;
