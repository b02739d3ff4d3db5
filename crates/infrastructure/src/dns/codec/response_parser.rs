use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use rootwalk_domain::{DnsResponse, DomainError, RecordValue, ResourceRecord};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Decoded message plus the header fields the exchange checks.
#[derive(Debug, Clone)]
pub struct ParsedMessage {
    pub id: u16,
    pub rcode: ResponseCode,
    pub response: DnsResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedMessage, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "QR bit not set on reply".to_string(),
            ));
        }

        let rcode = message.response_code();
        let response = DnsResponse {
            answers: Self::convert_section(message.answers()),
            authority: Self::convert_section(message.name_servers()),
            additional: Self::convert_section(message.additionals()),
            truncated: message.truncated(),
        };

        debug!(
            rcode = Self::rcode_to_status(rcode),
            answers = response.answers.len(),
            authority = response.authority.len(),
            additional = response.additional.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(ParsedMessage {
            id: message.id(),
            rcode,
            response,
        })
    }

    /// Keeps section order; records of unmodelled types are dropped.
    fn convert_section(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().filter_map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> Option<ResourceRecord> {
        let Some(record_type) = RecordTypeMapper::from_hickory(record.record_type()) else {
            debug!(record_type = ?record.record_type(), "Skipping unsupported record");
            return None;
        };

        let value = match record.data() {
            RData::A(a) => RecordValue::Address(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => RecordValue::Address(IpAddr::V6(aaaa.0)),
            RData::CNAME(cname) => RecordValue::Name(canonical(&cname.0)),
            RData::NS(ns) => RecordValue::Name(canonical(&ns.0)),
            RData::PTR(ptr) => RecordValue::Name(canonical(&ptr.0)),
            other => RecordValue::Text(other.to_string()),
        };

        Some(ResourceRecord::new(
            canonical(record.name()),
            record_type,
            value,
        ))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

fn canonical(name: &Name) -> Arc<str> {
    let mut text = name.to_ascii().to_ascii_lowercase();
    if !text.ends_with('.') {
        text.push('.');
    }
    Arc::from(text)
}
