//! Filter and type-narrowing operators.
//!
//! Both are streaming: each downstream pull walks the upstream only until the
//! next passing element.

use std::marker::PhantomData;

use lazyseq_core::narrow::Narrow;
use lazyseq_core::sequence::Sequence;

use crate::plan::OpPlan;
use crate::traits::Operator;

#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

/// Free-function form of `SequenceExt::filter`.
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(source, predicate)
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'a> = std::iter::Filter<S::Iter<'a>, &'a P> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.source.iter().filter(&self.predicate)
    }
}

impl<S, P> Operator for Filter<S, P>
where
    S: Operator,
    P: Fn(&S::Item) -> bool,
{
    fn name(&self) -> &'static str {
        "filter"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(self.name()).with_input(self.source.plan())
    }
}

/// Keeps the elements that narrow to `U`, in order.
pub struct OfType<S, U> {
    source: S,
    _target: PhantomData<fn() -> U>,
}

impl<S, U> OfType<S, U> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            _target: PhantomData,
        }
    }
}

impl<S: Clone, U> Clone for OfType<S, U> {
    fn clone(&self) -> Self {
        Self::new(self.source.clone())
    }
}

/// Free-function form of `SequenceExt::of_type`.
pub fn of_type<U, S>(source: S) -> OfType<S, U>
where
    S: Sequence,
    S::Item: Narrow<U>,
{
    OfType::new(source)
}

impl<S, U> Sequence for OfType<S, U>
where
    S: Sequence,
    S::Item: Narrow<U>,
{
    type Item = U;
    type Iter<'a> = std::iter::FilterMap<S::Iter<'a>, fn(S::Item) -> Option<U>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.source
            .iter()
            .filter_map(<S::Item as Narrow<U>>::narrow as fn(S::Item) -> Option<U>)
    }
}

impl<S, U> Operator for OfType<S, U>
where
    S: Operator,
    S::Item: Narrow<U>,
{
    fn name(&self) -> &'static str {
        "of_type"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(self.name()).with_input(self.source.plan())
    }
}
