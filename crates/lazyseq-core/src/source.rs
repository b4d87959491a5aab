//! Sources the caller can hand to an operator chain.
//!
//! Borrowed slices and vectors implement `Sequence` directly (see
//! `sequence.rs`). The two types here cover the other cases: a shared,
//! mutable container whose changes are visible to later passes, and a
//! restartable generator.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::sequence::Sequence;

/// A shared handle to a growable container.
///
/// Every pass reads the container's then-current contents. No borrow is held
/// between pulls, so the container may be edited through another handle while
/// a pass is in progress; the pass then simply sees the edited contents.
pub struct Shared<T> {
    data: Rc<RefCell<Vec<T>>>,
}

impl<T> Shared<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self {
            data: Rc::new(RefCell::new(values)),
        }
    }

    pub fn push(&self, value: T) {
        self.data.borrow_mut().push(value);
    }

    /// Replace the whole contents, returning the old ones.
    pub fn replace(&self, values: Vec<T>) -> Vec<T> {
        self.data.replace(values)
    }

    /// Edit the container in place.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        f(&mut self.data.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.data.borrow()).finish()
    }
}

impl<T: Clone> Sequence for Shared<T> {
    type Item = T;
    type Iter<'a> = SharedIter<'a, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        SharedIter {
            data: &self.data,
            pos: 0,
        }
    }
}

pub struct SharedIter<'a, T> {
    data: &'a RefCell<Vec<T>>,
    pos: usize,
}

impl<'a, T: Clone> Iterator for SharedIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.data.borrow().get(self.pos).cloned()?;
        self.pos += 1;
        Some(item)
    }
}

/// A restartable generator: each pass calls `factory` again.
#[derive(Clone)]
pub struct FromFn<F> {
    factory: F,
}

/// Build a sequence from a factory that produces a fresh iterator per pass.
///
/// The factory may return an unbounded iterator; downstream streaming
/// operators stay lazy over it.
pub fn from_fn<F, I>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { factory }
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Iter<'a> = I::IntoIter where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        (self.factory)().into_iter()
    }
}
