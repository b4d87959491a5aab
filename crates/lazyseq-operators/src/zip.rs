//! Positional pairing of two sequences.

use lazyseq_core::sequence::Sequence;

use crate::plan::OpPlan;
use crate::traits::Operator;

/// Yields `(a, b)` pairs in lockstep and stops as soon as either side is
/// exhausted. The left side is pulled first; when the right side runs out,
/// the left element pulled for that step is dropped.
#[derive(Clone)]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

/// Free-function form of `SequenceExt::zip`.
pub fn zip<A, B>(left: A, right: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    Zip::new(left, right)
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);
    type Iter<'a> = std::iter::Zip<A::Iter<'a>, B::Iter<'a>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.left.iter().zip(self.right.iter())
    }
}

impl<A, B> Operator for Zip<A, B>
where
    A: Operator,
    B: Operator,
{
    fn name(&self) -> &'static str {
        "zip"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::streaming(self.name())
            .with_input(self.left.plan())
            .with_input(self.right.plan())
    }
}
