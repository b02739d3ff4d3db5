//! Rootwalk Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, NsFallback, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordType, RecordValue, ResourceRecord};
pub use dns_response::DnsResponse;
pub use errors::{DomainError, ResolveError, ResolveErrorKind};
