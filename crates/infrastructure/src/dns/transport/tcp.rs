//! DNS over TCP (RFC 1035 §4.2.2): two-byte length prefix, one connection per
//! query.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use mesos_dns_domain::{DomainError, ResolutionError};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn unreachable(&self, reason: impl ToString) -> DomainError {
        ResolutionError::Unreachable {
            server: self.server_addr.to_string(),
            reason: reason.to_string(),
        }
        .into()
    }

    fn timed_out(&self) -> DomainError {
        ResolutionError::Timeout {
            server: self.server_addr.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.unreachable(e))?;

        stream.set_nodelay(true).map_err(|e| self.unreachable(e))?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.unreachable(e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.unreachable(e))?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(stream: &mut S, message_bytes: &[u8]) -> io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "DNS message too large"))?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let mut response = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    stream.read_exact(&mut response).await?;

    Ok(response)
}
