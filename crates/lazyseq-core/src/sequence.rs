//! The restartable sequence abstraction.

/// A restartable, lazy, ordered stream of `Item`s.
///
/// Invariants:
/// - `iter()` starts a new, independent pass. Two calls against an unchanged
///   source yield logically identical streams.
/// - Implementations own only their adapter state (closures, the wrapped
///   parent sequence). They never cache results across passes.
/// - Pulling one element downstream pulls the minimum needed upstream; only
///   stages documented as full-buffer read ahead.
pub trait Sequence {
    type Item;

    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Start a fresh pass.
    fn iter(&self) -> Self::Iter<'_>;

    /// Run one pass to completion and collect it.
    fn materialize(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }
}

impl<'s, T> Sequence for &'s [T] {
    type Item = &'s T;
    type Iter<'a> = std::slice::Iter<'s, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(*self)
    }
}

impl<'s, T, const N: usize> Sequence for &'s [T; N] {
    type Item = &'s T;
    type Iter<'a> = std::slice::Iter<'s, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(*self)
    }
}

impl<'s, T> Sequence for &'s Vec<T> {
    type Item = &'s T;
    type Iter<'a> = std::slice::Iter<'s, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        let values: &'s Vec<T> = *self;
        values.as_slice().iter()
    }
}
