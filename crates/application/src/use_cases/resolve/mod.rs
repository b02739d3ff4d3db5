mod classify;
mod iterative;

pub use classify::{classify, Step};
pub use iterative::IterativeResolver;
