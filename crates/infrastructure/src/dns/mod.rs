pub mod codec;
pub mod exchange;
pub mod transport;

pub use codec::{MessageBuilder, RecordTypeMapper, ResponseParser};
pub use exchange::WireExchange;
