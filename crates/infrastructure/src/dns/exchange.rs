use super::codec::{MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use rootwalk_application::ports::NameServerExchange;
use rootwalk_domain::{DnsQuery, DnsResponse, ResolveError, ResolverConfig};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// `NameServerExchange` over the real wire: hickory codec, UDP first,
/// TCP when the UDP reply is truncated.
pub struct WireExchange {
    port: u16,
    tcp_fallback: bool,
}

impl WireExchange {
    pub fn new(port: u16, tcp_fallback: bool) -> Self {
        Self { port, tcp_fallback }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.port, config.tcp_fallback)
    }

    async fn query_server(
        &self,
        server: IpAddr,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<DnsResponse, ResolveError> {
        let (query_id, message_bytes) = MessageBuilder::build_query_with_id(query)
            .map_err(|e| ResolveError::transport(server, e))?;
        let server_addr = SocketAddr::new(server, self.port);

        let response = self
            .round_trip(
                Transport::udp(server_addr),
                server,
                query_id,
                &message_bytes,
                timeout,
            )
            .await?;

        if response.truncated && self.tcp_fallback {
            debug!(server = %server, query = %query, "UDP reply truncated, retrying over TCP");
            return self
                .round_trip(
                    Transport::tcp(server_addr),
                    server,
                    query_id,
                    &message_bytes,
                    timeout,
                )
                .await;
        }

        Ok(response)
    }

    async fn round_trip(
        &self,
        transport: Transport,
        server: IpAddr,
        query_id: u16,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<DnsResponse, ResolveError> {
        let reply = transport.send(message_bytes, timeout).await?;

        let parsed = ResponseParser::parse(&reply.bytes)
            .map_err(|e| ResolveError::transport(server, e))?;

        if parsed.id != query_id {
            return Err(ResolveError::transport(
                server,
                format!(
                    "{} reply id {} does not match query id {}",
                    reply.protocol_used, parsed.id, query_id
                ),
            ));
        }

        debug!(
            server = %server,
            protocol = reply.protocol_used,
            rcode = ResponseParser::rcode_to_status(parsed.rcode),
            "Name server replied"
        );

        Ok(parsed.response)
    }
}

#[async_trait]
impl NameServerExchange for WireExchange {
    /// `timeout` bounds the whole hop, including a TCP retry after truncation.
    async fn exchange(
        &self,
        server: IpAddr,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<DnsResponse, ResolveError> {
        match tokio::time::timeout(timeout, self.query_server(server, query, timeout)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ResolveError::Timeout { server }),
        }
    }
}
