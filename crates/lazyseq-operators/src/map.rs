//! Projection operators.

use lazyseq_core::sequence::Sequence;

use crate::plan::OpPlan;
use crate::traits::Operator;

/// 1:1 projection. Preserves length and order.
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Map<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

/// Free-function form of `SequenceExt::map`.
pub fn map<S, U, F>(source: S, selector: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    Map::new(source, selector)
}

impl<S, U, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Iter<'a> = std::iter::Map<S::Iter<'a>, &'a F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.source.iter().map(&self.selector)
    }
}

impl<S, U, F> Operator for Map<S, F>
where
    S: Operator,
    F: Fn(S::Item) -> U,
{
    fn name(&self) -> &'static str {
        "map"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(self.name()).with_input(self.source.plan())
    }
}

/// Projects each element to a subsequence and drains it fully before pulling
/// the next upstream element.
#[derive(Clone)]
pub struct FlatMap<S, F> {
    source: S,
    selector: F,
}

impl<S, F> FlatMap<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

/// Free-function form of `SequenceExt::flat_map`.
pub fn flat_map<S, I, F>(source: S, selector: F) -> FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    FlatMap::new(source, selector)
}

impl<S, I, F> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Iter<'a> = std::iter::FlatMap<S::Iter<'a>, I, &'a F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.source.iter().flat_map(&self.selector)
    }
}

impl<S, I, F> Operator for FlatMap<S, F>
where
    S: Operator,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    fn name(&self) -> &'static str {
        "flat_map"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(self.name()).with_input(self.source.plan())
    }
}
