//! Plain UDP exchange with one upstream resolver (RFC 1035 §4.2.1).
//!
//! The reply must come from the upstream address and echo the query ID.
//! Datagrams from other sources are dropped while waiting; a reply with the
//! wrong ID fails the exchange.

use split_horizon_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    upstream: SocketAddr,
}

impl UdpTransport {
    pub fn new(upstream: SocketAddr) -> Self {
        Self { upstream }
    }

    /// Sends `query` and waits up to `timeout` for its reply.
    pub async fn exchange(&self, query: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
        let deadline = Instant::now() + timeout;

        let local: SocketAddr = if self.upstream.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(local)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let sent = tokio::time::timeout_at(deadline, socket.send_to(query, self.upstream))
            .await
            .map_err(|_| self.timed_out("sending query"))?
            .map_err(|e| {
                DomainError::IoError(format!("Failed to send UDP query to {}: {}", self.upstream, e))
            })?;
        debug!(upstream = %self.upstream, bytes = sent, "UDP query sent");

        let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (len, from) = tokio::time::timeout_at(deadline, socket.recv_from(&mut buf))
                .await
                .map_err(|_| self.timed_out("waiting for reply"))?
                .map_err(|e| {
                    DomainError::IoError(format!(
                        "Failed to receive UDP reply from {}: {}",
                        self.upstream, e
                    ))
                })?;

            if from != self.upstream {
                warn!(upstream = %self.upstream, from = %from, "Dropping datagram from unexpected source");
                continue;
            }

            let reply = &buf[..len];
            validate_response_id(query, reply, self.upstream)?;
            debug!(upstream = %self.upstream, bytes = len, "UDP reply received");
            return Ok(reply.to_vec());
        }
    }

    fn timed_out(&self, stage: &str) -> DomainError {
        DomainError::IoError(format!("Timeout {} for {}", stage, self.upstream))
    }
}

/// Both messages must carry the same 16-bit ID in their first two bytes.
pub fn validate_response_id(
    query: &[u8],
    reply: &[u8],
    upstream: SocketAddr,
) -> Result<(), DomainError> {
    let (Some(query_id), Some(reply_id)) = (query.get(..2), reply.get(..2)) else {
        return Err(DomainError::IoError(format!(
            "DNS message from {} too short to carry an ID",
            upstream
        )));
    };

    if query_id != reply_id {
        return Err(DomainError::IoError(format!(
            "DNS ID mismatch from {}: sent {:#06x}, got {:#06x}",
            upstream,
            u16::from_be_bytes([query_id[0], query_id[1]]),
            u16::from_be_bytes([reply_id[0], reply_id[1]]),
        )));
    }
    Ok(())
}
