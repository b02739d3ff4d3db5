//! Rootwalk Infrastructure Layer
//!
//! hickory-proto wire codec plus UDP/TCP transports behind the
//! `NameServerExchange` port.
pub mod dns;

pub use dns::WireExchange;
