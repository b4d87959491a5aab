//! Operator trait + the fluent `SequenceExt` surface.
//!
//! `SequenceExt` is the chaining API; every method only wraps `self` in an
//! adapter (except `to_lookup`, which is eager by contract). `Operator` adds
//! the planning surface used by `explain()`.

use std::cmp::Ordering;
use std::hash::Hash;

use lazyseq_core::error::Result;
use lazyseq_core::narrow::Narrow;
use lazyseq_core::sequence::Sequence;
use lazyseq_core::source::{FromFn, Shared};

use crate::filter::{Filter, OfType};
use crate::group::{GroupBy, Grouping, Lookup};
use crate::map::{FlatMap, Map};
use crate::plan::OpPlan;
use crate::reverse::Reverse;
use crate::sort::{Direction, Ordered};
use crate::zip::Zip;

/// Trait that all operators and sources implement.
///
/// Invariants:
/// - `plan` is static: it describes the chain without pulling from it.
/// - A stage whose plan says `FullBuffer` drains its upstream on the first
///   pull of every pass; everything else streams.
pub trait Operator: Sequence {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    fn plan(&self) -> OpPlan;

    fn explain(&self) -> String {
        self.plan().explain()
    }
}

pub trait SequenceExt: Sequence + Sized {
    /// Keep elements for which `predicate` holds. Chained filters intersect.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Project every element, 1:1.
    fn map<U, F>(self, selector: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, selector)
    }

    /// Project every element to a subsequence and concatenate them,
    /// outer-major, inner-minor.
    fn flat_map<I, F>(self, selector: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Item) -> I,
        I: IntoIterator,
    {
        FlatMap::new(self, selector)
    }

    /// Pair elements positionally; stops at the shorter side.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        B: Sequence,
    {
        Zip::new(self, other)
    }

    /// Full-buffer: yield the upstream last-to-first.
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    /// Keep only elements that narrow to `U`, narrowed.
    fn of_type<U>(self) -> OfType<Self, U>
    where
        Self::Item: Narrow<U>,
    {
        OfType::new(self)
    }

    /// Full-buffer: stable sort by `key`, ascending.
    fn order_by<'k, K, F>(self, key: F) -> Ordered<'k, Self>
    where
        K: Ord + 'k,
        F: Fn(&Self::Item) -> K + 'k,
    {
        Ordered::by_key(self, key, Direction::Ascending)
    }

    /// Full-buffer: stable sort by `key`, descending.
    fn order_by_descending<'k, K, F>(self, key: F) -> Ordered<'k, Self>
    where
        K: Ord + 'k,
        F: Fn(&Self::Item) -> K + 'k,
    {
        Ordered::by_key(self, key, Direction::Descending)
    }

    /// Full-buffer: stable sort with an explicit comparator, e.g. for float
    /// keys (`|a, b| a.x.total_cmp(&b.x)`).
    fn order_by_with<'k, C>(self, compare: C, direction: Direction) -> Ordered<'k, Self>
    where
        C: Fn(&Self::Item, &Self::Item) -> Ordering + 'k,
    {
        Ordered::with_comparator(self, compare, direction)
    }

    /// Deferred grouping; every pass re-runs the upstream chain.
    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        GroupBy::new(self, key)
    }

    /// Eager grouping: runs one pass now and returns the materialized lookup.
    ///
    /// # Panics
    ///
    /// When the global buffer limit is exceeded; use `try_to_lookup` to get
    /// the error instead.
    fn to_lookup<K, F>(self, key: F) -> Lookup<K, Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        match Lookup::build(&self, key, lazyseq_core::PipelineConfig::global()) {
            Ok(lookup) => lookup,
            Err(err) => panic!("{err}"),
        }
    }

    fn try_to_lookup<K, F>(self, key: F) -> Result<Lookup<K, Self::Item>>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        Lookup::build(&self, key, lazyseq_core::PipelineConfig::global())
    }
}

impl<S: Sequence> SequenceExt for S {}

impl<'s, T> Operator for &'s [T] {
    fn name(&self) -> &'static str {
        "slice"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(Operator::name(self))
    }
}

impl<'s, T, const N: usize> Operator for &'s [T; N] {
    fn name(&self) -> &'static str {
        "array"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(Operator::name(self))
    }
}

impl<'s, T> Operator for &'s Vec<T> {
    fn name(&self) -> &'static str {
        "vec"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(Operator::name(self))
    }
}

impl<T: Clone> Operator for Shared<T> {
    fn name(&self) -> &'static str {
        "shared"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(Operator::name(self))
    }
}

impl<F, I> Operator for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    fn name(&self) -> &'static str {
        "from_fn"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(Operator::name(self))
    }
}

impl<'g, K, T> Operator for &'g Grouping<K, T> {
    fn name(&self) -> &'static str {
        "grouping"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(Operator::name(self))
    }
}

impl<'l, K, T> Operator for &'l Lookup<K, T> {
    fn name(&self) -> &'static str {
        "lookup"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(Operator::name(self))
    }
}
