//! Ordering: `order_by` / `then_by` over a single `OrderSpec`.
//!
//! `Ordered` looks lazy but is a full-buffer stage. Each pass drains the
//! upstream on its first pull, runs one stable sort with the current spec,
//! then hands the buffer out in order. No sorted buffer survives the pass, so
//! a source that changed between passes is sorted afresh.

pub mod spec;

use std::cmp::Ordering;

use lazyseq_core::config::PipelineConfig;
use lazyseq_core::sequence::Sequence;

use crate::buffer::buffer_all;
use crate::plan::OpPlan;
use crate::traits::Operator;

pub use spec::{Direction, OrderSpec, SortKey};

pub struct Ordered<'k, S: Sequence> {
    source: S,
    spec: OrderSpec<'k, S::Item>,
    config: Option<PipelineConfig>,
}

impl<'k, S: Sequence> Ordered<'k, S> {
    pub fn new(source: S, first: SortKey<'k, S::Item>) -> Self {
        Self {
            source,
            spec: OrderSpec::new(first),
            config: None,
        }
    }

    pub fn by_key<K, F>(source: S, key: F, direction: Direction) -> Self
    where
        K: Ord + 'k,
        F: Fn(&S::Item) -> K + 'k,
    {
        Self::new(source, SortKey::by_key(key, direction))
    }

    pub fn with_comparator<C>(source: S, compare: C, direction: Direction) -> Self
    where
        C: Fn(&S::Item, &S::Item) -> Ordering + 'k,
    {
        Self::new(source, SortKey::with_comparator(compare, direction))
    }

    /// Append an ascending tie-breaker to the existing spec.
    pub fn then_by<K, F>(mut self, key: F) -> Self
    where
        K: Ord + 'k,
        F: Fn(&S::Item) -> K + 'k,
    {
        self.spec.push(SortKey::by_key(key, Direction::Ascending));
        self
    }

    /// Append a descending tie-breaker to the existing spec.
    pub fn then_by_descending<K, F>(mut self, key: F) -> Self
    where
        K: Ord + 'k,
        F: Fn(&S::Item) -> K + 'k,
    {
        self.spec.push(SortKey::by_key(key, Direction::Descending));
        self
    }

    pub fn then_by_with<C>(mut self, compare: C, direction: Direction) -> Self
    where
        C: Fn(&S::Item, &S::Item) -> Ordering + 'k,
    {
        self.spec.push(SortKey::with_comparator(compare, direction));
        self
    }

    /// Override the process-wide config for this stage.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn spec(&self) -> &OrderSpec<'k, S::Item> {
        &self.spec
    }

    fn config(&self) -> &PipelineConfig {
        self.config.as_ref().unwrap_or_else(|| PipelineConfig::global())
    }
}

/// Free-function form of `SequenceExt::order_by`.
pub fn order_by<'k, S, K, F>(source: S, key: F) -> Ordered<'k, S>
where
    S: Sequence,
    K: Ord + 'k,
    F: Fn(&S::Item) -> K + 'k,
{
    Ordered::by_key(source, key, Direction::Ascending)
}

/// Free-function form of `SequenceExt::order_by_descending`.
pub fn order_by_descending<'k, S, K, F>(source: S, key: F) -> Ordered<'k, S>
where
    S: Sequence,
    K: Ord + 'k,
    F: Fn(&S::Item) -> K + 'k,
{
    Ordered::by_key(source, key, Direction::Descending)
}

impl<'k, S: Sequence> Sequence for Ordered<'k, S> {
    type Item = S::Item;
    type Iter<'a> = OrderedIter<'a, 'k, S> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        OrderedIter {
            pending: Some(self.source.iter()),
            spec: &self.spec,
            config: self.config(),
            sorted: Vec::new().into_iter(),
        }
    }
}

pub struct OrderedIter<'a, 'k, S: Sequence + 'a> {
    pending: Option<S::Iter<'a>>,
    spec: &'a OrderSpec<'k, S::Item>,
    config: &'a PipelineConfig,
    sorted: std::vec::IntoIter<S::Item>,
}

impl<'a, 'k, S: Sequence + 'a> Iterator for OrderedIter<'a, 'k, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if let Some(upstream) = self.pending.take() {
            let mut buf = buffer_all(upstream, "order_by", self.config);
            self.spec.sort(&mut buf);
            self.sorted = buf.into_iter();
        }
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (0, None),
            None => self.sorted.size_hint(),
        }
    }
}

impl<'k, S: Operator> Operator for Ordered<'k, S> {
    fn name(&self) -> &'static str {
        "order_by"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::full_buffer(self.name()).with_input(self.source.plan())
    }
}
