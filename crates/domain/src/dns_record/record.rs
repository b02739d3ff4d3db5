use super::RecordType;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// Typed payload of a resource record as the resolver sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    /// A / AAAA.
    Address(IpAddr),
    /// CNAME target, NS hostname or PTR name, fully qualified.
    Name(Arc<str>),
    /// Presentation form of any other record data.
    Text(String),
}

impl RecordValue {
    pub fn as_address(&self) -> Option<IpAddr> {
        match self {
            RecordValue::Address(ip) => Some(*ip),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            RecordValue::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Address(ip) => write!(f, "{}", ip),
            RecordValue::Name(name) => f.write_str(name),
            RecordValue::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub owner: Arc<str>,
    pub record_type: RecordType,
    pub value: RecordValue,
}

impl ResourceRecord {
    pub fn new(owner: impl Into<Arc<str>>, record_type: RecordType, value: RecordValue) -> Self {
        Self {
            owner: owner.into(),
            record_type,
            value,
        }
    }

    pub fn address(owner: &str, address: IpAddr) -> Self {
        let record_type = if address.is_ipv4() {
            RecordType::A
        } else {
            RecordType::AAAA
        };
        Self::new(owner, record_type, RecordValue::Address(address))
    }

    pub fn cname(owner: &str, target: &str) -> Self {
        Self::new(owner, RecordType::CNAME, RecordValue::Name(Arc::from(target)))
    }

    pub fn ns(zone: &str, hostname: &str) -> Self {
        Self::new(zone, RecordType::NS, RecordValue::Name(Arc::from(hostname)))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.owner, self.record_type, self.value)
    }
}
