//! Convenient re-exports for downstream crates.

pub use crate::budget::BufferBudget;
pub use crate::config::PipelineConfig;
pub use crate::error::{Error, Result};
pub use crate::narrow::Narrow;
pub use crate::sequence::Sequence;
pub use crate::source::{from_fn, FromFn, Shared};
