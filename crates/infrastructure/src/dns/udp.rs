//! UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One socket per exchange: bound to an ephemeral port, used for a single
//! send/receive pair, and dropped before the call returns, so no socket
//! outlives a lookup. Responses are capped at 512 bytes; there is no
//! EDNS(0) and no TCP retry on truncation.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use stubdns_application::ports::DnsTransport;
use stubdns_domain::ResolverError;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size without EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 512;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(
        &self,
        query: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, ResolverError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| ResolverError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = socket
            .send_to(query, self.server_addr)
            .await
            .map_err(|e| {
                ResolverError::IoError(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| ResolverError::QueryTimeout)?
                .map_err(|e| {
                    ResolverError::IoError(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    ))
                })?;

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }
}
