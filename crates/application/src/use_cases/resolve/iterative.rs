use super::classify::{classify, Step};
use crate::ports::{NameServerExchange, ResolutionTrace, TraceEvent};
use futures::future::{BoxFuture, FutureExt};
use rootwalk_domain::{
    DnsQuery, NsFallback, RecordType, RecordValue, ResolveError, ResolverConfig,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Walks the delegation tree from a root server down to an answer.
///
/// Each call queries exactly one server and then either finishes or recurses
/// with `depth + 1`. The only state a call tree carries is what travels in
/// the arguments, so one resolver can serve concurrent walks without locks.
pub struct IterativeResolver {
    exchange: Arc<dyn NameServerExchange>,
    trace: Arc<dyn ResolutionTrace>,
    config: ResolverConfig,
}

impl IterativeResolver {
    pub fn new(
        exchange: Arc<dyn NameServerExchange>,
        trace: Arc<dyn ResolutionTrace>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            exchange,
            trace,
            config,
        }
    }

    /// Top-level lookup starting at the configured root server.
    pub async fn resolve_from_root(&self, query: &DnsQuery) -> Result<RecordValue, ResolveError> {
        self.resolve(query, self.config.root_server, 0).await
    }

    /// Ask `server` for `query` and follow whatever the response points at.
    ///
    /// A call at or beyond the depth cap fails with
    /// [`ResolveError::DepthExceeded`] without sending anything.
    pub fn resolve<'a>(
        &'a self,
        query: &'a DnsQuery,
        server: IpAddr,
        depth: u8,
    ) -> BoxFuture<'a, Result<RecordValue, ResolveError>> {
        async move {
            if depth >= self.config.max_depth {
                let error = ResolveError::DepthExceeded {
                    depth,
                    limit: self.config.max_depth,
                };
                warn!(query = %query, depth, "Depth cap reached");
                return Err(self.fail(depth, server, error));
            }

            self.trace.record(&TraceEvent::Querying {
                depth,
                server,
                query: query.clone(),
            });
            debug!(server = %server, query = %query, depth, "Querying name server");

            let response = match self
                .exchange
                .exchange(server, query, self.config.query_timeout())
                .await
            {
                Ok(response) => response,
                Err(error) => return Err(self.fail(depth, server, error)),
            };

            match classify(&response, query.record_type) {
                Step::Alias(target) => {
                    self.trace.record(&TraceEvent::Alias {
                        depth,
                        target: Arc::clone(&target),
                    });
                    match self.follow(&target, query.record_type, depth, server) {
                        Ok(next) => self.resolve(&next, self.config.root_server, depth + 1).await,
                        Err(error) => Err(error),
                    }
                }
                Step::Answer(value) => {
                    self.trace.record(&TraceEvent::Answer {
                        depth,
                        value: value.clone(),
                    });
                    debug!(query = %query, value = %value, depth, "Answer found");
                    Ok(value)
                }
                Step::Glue(next_server) => {
                    self.trace
                        .record(&TraceEvent::Referral { depth, next_server });
                    self.resolve(query, next_server, depth + 1).await
                }
                Step::Delegation(name_servers) => {
                    self.follow_delegation(query, &name_servers, server, depth)
                        .await
                }
                Step::Exhausted => Err(self.fail(
                    depth,
                    server,
                    ResolveError::EmptyResult { server },
                )),
            }
        }
        .boxed()
    }

    /// Resolve NS hostnames from the root, then re-ask the original question
    /// at the address found.
    async fn follow_delegation(
        &self,
        query: &DnsQuery,
        name_servers: &[Arc<str>],
        server: IpAddr,
        depth: u8,
    ) -> Result<RecordValue, ResolveError> {
        let candidates = match self.config.ns_fallback {
            NsFallback::FirstOnly => &name_servers[..name_servers.len().min(1)],
            NsFallback::InOrder => name_servers,
        };

        for name_server in candidates {
            self.trace.record(&TraceEvent::ResolvingNameServer {
                depth,
                name_server: Arc::clone(name_server),
            });

            let Ok(ns_query) = DnsQuery::new(name_server, RecordType::A) else {
                debug!(name_server = %name_server, "Skipping malformed NS hostname");
                continue;
            };

            let address = match self
                .resolve(&ns_query, self.config.root_server, depth + 1)
                .await
            {
                Ok(value) => value.as_address(),
                Err(error) => {
                    debug!(name_server = %name_server, error = %error, "NS hostname did not resolve");
                    None
                }
            };
            let Some(address) = address else {
                continue;
            };

            let outcome = self.resolve(query, address, depth + 1).await;
            match self.config.ns_fallback {
                NsFallback::FirstOnly => return outcome,
                NsFallback::InOrder if outcome.is_ok() => return outcome,
                NsFallback::InOrder => continue,
            }
        }

        Err(self.fail(depth, server, ResolveError::EmptyResult { server }))
    }

    fn follow(
        &self,
        target: &str,
        record_type: RecordType,
        depth: u8,
        server: IpAddr,
    ) -> Result<DnsQuery, ResolveError> {
        DnsQuery::new(target, record_type).map_err(|e| {
            debug!(target = %target, error = %e, "Alias target is not a usable name");
            self.fail(depth, server, ResolveError::EmptyResult { server })
        })
    }

    fn fail(&self, depth: u8, server: IpAddr, error: ResolveError) -> ResolveError {
        self.trace.record(&TraceEvent::Failed {
            depth,
            server,
            error: error.clone(),
        });
        error
    }
}
