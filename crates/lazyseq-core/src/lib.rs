#![forbid(unsafe_code)]
//! lazyseq-core: the restartable `Sequence` abstraction and its sources.
//!
//! Design intent:
//! - A `Sequence` is a recipe, not a cursor: every call to `iter()` starts a
//!   fresh pass over the original source. Nothing is cached between passes.
//! - Operators live in `lazyseq-operators`; this crate only carries the trait,
//!   the sources, variant narrowing, and the shared error/config surface.
//! - Full-buffer stages consult a `BufferBudget` so an unbounded source fails
//!   loudly instead of growing without limit when a cap is configured.

pub mod budget;
pub mod config;
pub mod error;
pub mod metrics;
pub mod narrow;
pub mod prelude;
pub mod sequence;
pub mod source;

pub use budget::BufferBudget;
pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use narrow::Narrow;
pub use sequence::Sequence;
pub use source::{from_fn, FromFn, Shared, SharedIter};
