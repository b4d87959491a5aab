//! Variant narrowing for `of_type`.
//!
//! A value narrows to `U` when it is (or wraps) a `U`. Tagged unions implement
//! `Narrow` by matching on their variants; type-erased values narrow by
//! downcasting.

use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

pub trait Narrow<U> {
    /// `Some` when `self` is a `U`, `None` otherwise.
    fn narrow(self) -> Option<U>;
}

impl<U: Any> Narrow<U> for Box<dyn Any> {
    fn narrow(self) -> Option<U> {
        self.downcast::<U>().ok().map(|b| *b)
    }
}

impl<U: Any> Narrow<Rc<U>> for Rc<dyn Any> {
    fn narrow(self) -> Option<Rc<U>> {
        self.downcast::<U>().ok()
    }
}

impl<U: Any + Send + Sync> Narrow<Arc<U>> for Arc<dyn Any + Send + Sync> {
    fn narrow(self) -> Option<Arc<U>> {
        self.downcast::<U>().ok()
    }
}

impl<'a, U: Any> Narrow<&'a U> for &'a dyn Any {
    fn narrow(self) -> Option<&'a U> {
        self.downcast_ref::<U>()
    }
}
