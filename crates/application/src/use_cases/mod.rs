pub mod resolve;

pub use resolve::{classify, IterativeResolver, Step};
