//! The write-once base reference every decorator carries.

use std::fmt;
use std::sync::Arc;

use lazyseq_core::error::{Error, Result};
use once_cell::unsync::OnceCell;

/// Holds at most one base value, set exactly once.
pub struct BaseSlot<B: ?Sized> {
    cell: OnceCell<Arc<B>>,
}

impl<B: ?Sized> BaseSlot<B> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Store `base`. A second call hands the rejected value back.
    pub fn set(&self, base: Arc<B>) -> std::result::Result<(), Arc<B>> {
        self.cell.set(base)
    }

    pub fn get(&self) -> Option<&B> {
        self.cell.get().map(|b| &**b)
    }

    /// The shared handle, for wrappers that need to hand the base on.
    pub fn shared(&self) -> Option<&Arc<B>> {
        self.cell.get()
    }

    pub fn is_attached(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<B: ?Sized> Default for BaseSlot<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized> fmt::Debug for BaseSlot<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseSlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// A wrapper with a settable base reference.
///
/// Implementors embed a `BaseSlot<Self::Base>` and expose it through `slot`;
/// `attach` and `base` come for free.
pub trait Decorator {
    /// The capability being decorated, typically `dyn SomeTrait`.
    type Base: ?Sized;

    fn slot(&self) -> &BaseSlot<Self::Base>;

    /// Name used in error reports.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn attach(&self, base: Arc<Self::Base>) -> Result<()> {
        self.slot()
            .set(base)
            .map_err(|_| Error::BaseAlreadyAttached {
                wrapper: self.kind(),
            })
    }

    fn base(&self) -> Option<&Self::Base> {
        self.slot().get()
    }
}
