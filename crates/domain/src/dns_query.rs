use super::{DomainError, RecordType};
use std::fmt;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A question for one name server: owner name plus record type.
///
/// The name is kept in canonical form (lowercase, fully qualified, trailing
/// dot), so names coming back from alias and delegation records compare equal
/// to names typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: &str, record_type: RecordType) -> Result<Self, DomainError> {
        Ok(Self {
            name: normalize_name(name)?,
            record_type,
        })
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.record_type)
    }
}

pub fn normalize_name(raw: &str) -> Result<Arc<str>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDomainName("empty name".to_string()));
    }
    if trimmed == "." {
        return Ok(Arc::from("."));
    }

    let bare = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if bare.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds {} octets",
            trimmed, MAX_NAME_LEN
        )));
    }

    for label in bare.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "{} contains an empty label",
                trimmed
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} octets",
                label, MAX_LABEL_LEN
            )));
        }
    }

    Ok(Arc::from(format!("{}.", bare.to_ascii_lowercase())))
}
