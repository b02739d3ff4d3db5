mod name_server_exchange;
mod resolution_trace;

pub use name_server_exchange::NameServerExchange;
pub use resolution_trace::{NoopTrace, RecordingTrace, ResolutionTrace, TraceEvent};

// Re-export for convenience
pub use rootwalk_domain::{DnsQuery, DnsResponse, ResolveError};
