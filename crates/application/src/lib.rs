//! Rootwalk Application Layer
//!
//! Ports the resolver depends on and the iterative resolution engine itself.
pub mod ports;
pub mod use_cases;

pub use use_cases::{classify, IterativeResolver, Step};
