use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DnsResponse, ResolveError};
use std::net::IpAddr;
use std::time::Duration;

/// One query/response round trip against a single name server.
///
/// Implementations own the codec and the transport. Each call acquires and
/// releases its own socket; nothing is shared between calls, so the resolver
/// can run any number of walks through the same exchange concurrently.
#[async_trait]
pub trait NameServerExchange: Send + Sync {
    /// `server` is always an IP literal. A reply that does not arrive within
    /// `timeout` must surface as [`ResolveError::Timeout`].
    async fn exchange(
        &self,
        server: IpAddr,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<DnsResponse, ResolveError>;
}
