//! Response classification for one hop of an iterative walk.
//!
//! Rules are checked in a fixed priority and every section is scanned in the
//! order the server sent it; the first record that satisfies a rule decides
//! the step. There is no ranking between records of the same kind.

use rootwalk_domain::{DnsResponse, RecordType, RecordValue};
use std::net::IpAddr;
use std::sync::Arc;

/// What the resolver does next after a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The queried name is an alias; restart at the root with the target.
    Alias(Arc<str>),
    /// Terminal value of the requested type.
    Answer(RecordValue),
    /// Referral with an IPv4 glue address; ask the same question there.
    Glue(IpAddr),
    /// Referral without glue; NS hostnames in authority-section order.
    Delegation(Vec<Arc<str>>),
    /// Nothing usable.
    Exhausted,
}

pub fn classify(response: &DnsResponse, record_type: RecordType) -> Step {
    // An alias only redirects when the caller did not ask for the alias itself.
    if record_type != RecordType::CNAME {
        let alias = response
            .answers
            .iter()
            .filter(|r| r.record_type == RecordType::CNAME)
            .find_map(|r| r.value.as_name());
        if let Some(target) = alias {
            return Step::Alias(Arc::from(target));
        }
    }

    if let Some(record) = response
        .answers
        .iter()
        .find(|r| r.record_type == record_type)
    {
        return Step::Answer(record.value.clone());
    }

    let glue = response
        .additional
        .iter()
        .filter(|r| r.record_type == RecordType::A)
        .find_map(|r| r.value.as_address());
    if let Some(address) = glue {
        return Step::Glue(address);
    }

    let name_servers: Vec<Arc<str>> = response
        .authority
        .iter()
        .filter(|r| r.record_type == RecordType::NS)
        .filter_map(|r| r.value.as_name())
        .map(Arc::from)
        .collect();
    if !name_servers.is_empty() {
        return Step::Delegation(name_servers);
    }

    Step::Exhausted
}
