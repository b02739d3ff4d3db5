#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::NameServerExchange;
use rootwalk_domain::{DnsQuery, DnsResponse, RecordType, ResolveError};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::RwLock;
use std::time::Duration;

type Key = (IpAddr, String, RecordType);

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn key(server: &str, name: &str, record_type: RecordType) -> Key {
    let query = DnsQuery::new(name, record_type).unwrap();
    (ip(server), query.name.to_string(), record_type)
}

/// In-memory graph of name servers. Unknown (server, name, type) triples
/// answer with an empty response.
#[derive(Default)]
pub struct MockNameServers {
    responses: RwLock<HashMap<Key, Result<DnsResponse, ResolveError>>>,
    calls: RwLock<Vec<Key>>,
}

impl MockNameServers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: &str, name: &str, record_type: RecordType, response: DnsResponse) {
        self.responses
            .write()
            .unwrap()
            .insert(key(server, name, record_type), Ok(response));
    }

    pub fn fail(&self, server: &str, name: &str, record_type: RecordType, error: ResolveError) {
        self.responses
            .write()
            .unwrap()
            .insert(key(server, name, record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<Key> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn calls_to(&self, server: &str) -> usize {
        let server = ip(server);
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|(s, _, _)| *s == server)
            .count()
    }

    pub fn calls_for(&self, name: &str, record_type: RecordType) -> usize {
        let name = DnsQuery::new(name, record_type).unwrap().name.to_string();
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|(_, n, t)| *n == name && *t == record_type)
            .count()
    }

    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl NameServerExchange for MockNameServers {
    async fn exchange(
        &self,
        server: IpAddr,
        query: &DnsQuery,
        _timeout: Duration,
    ) -> Result<DnsResponse, ResolveError> {
        let key = (server, query.name.to_string(), query.record_type);
        self.calls.write().unwrap().push(key.clone());

        self.responses
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(DnsResponse::default()))
    }
}
