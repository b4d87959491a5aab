#![forbid(unsafe_code)]
//! lazyseq-operators: deferred operators (filter/map/flat_map/zip/reverse/
//! of_type), ordering, grouping, and the eager `Lookup`.
//!
//! Design intent:
//! - Building a chain does no work. Terminal consumption pulls elements through
//!   the chain one at a time, source to destination.
//! - Streaming operators pull exactly one upstream element per element they
//!   hand downstream (filters pull until one passes).
//! - `reverse`, `order_by` and `group_by` are full-buffer stages: they drain
//!   their upstream on the first pull of each pass. Each operator reports this
//!   through its `OpPlan`, so the cost shows up in `explain()`.

pub mod buffer;
pub mod plan;
pub mod traits;

pub mod filter;
pub mod map;
pub mod reverse;
pub mod zip;

pub mod group;
pub mod sort;

pub use filter::{filter, of_type, Filter, OfType};
pub use group::{group_by, to_lookup, GroupBy, Grouping, Lookup};
pub use map::{flat_map, map, FlatMap, Map};
pub use plan::{Materialization, OpPlan};
pub use reverse::{reverse, Reverse};
pub use sort::{order_by, order_by_descending, Direction, OrderSpec, Ordered, SortKey};
pub use traits::{Operator, SequenceExt};
pub use zip::{zip, Zip};
