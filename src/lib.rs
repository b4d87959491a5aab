#![forbid(unsafe_code)]
//! lazyseq: lazy sequence operators, eager lookups, and a typed decorator
//! builder.
//!
//! This crate only re-exports the workspace members:
//! - `lazyseq-core`: the `Sequence` trait, sources, narrowing, errors, config
//! - `lazyseq-operators`: deferred operators, ordering, grouping, `Lookup`
//! - `lazyseq-decorate`: `decorate_as` and friends

pub use lazyseq_core;
pub use lazyseq_decorate;
pub use lazyseq_operators;

pub mod prelude {
    pub use lazyseq_core::prelude::*;
    pub use lazyseq_decorate::{decorate_as, decorate_with, BaseSlot, DecorateExt, Decorator};
    pub use lazyseq_operators::{
        Direction, Grouping, Lookup, Materialization, OpPlan, Operator, SequenceExt,
    };
}
