//! The decorator-composition builder.

use std::sync::Arc;

use lazyseq_core::error::{Error, Result};

use crate::slot::Decorator;

/// Build a default `D`, attach `base`, run `configure` over it, return it.
///
/// An absent `base` is a precondition violation and is reported as
/// `Error::MissingBase`; no wrapper is constructed.
pub fn decorate_as<D, F>(base: Option<Arc<D::Base>>, configure: F) -> Result<D>
where
    D: Decorator + Default,
    F: FnOnce(&mut D),
{
    decorate_with(D::default, base, configure)
}

/// Same as `decorate_as`, with an explicit factory for wrappers that have no
/// `Default`.
pub fn decorate_with<D, N, F>(factory: N, base: Option<Arc<D::Base>>, configure: F) -> Result<D>
where
    D: Decorator,
    N: FnOnce() -> D,
    F: FnOnce(&mut D),
{
    let base = base.ok_or(Error::MissingBase {
        wrapper: std::any::type_name::<D>(),
    })?;

    let mut wrapper = factory();
    wrapper.attach(base)?;
    configure(&mut wrapper);

    #[cfg(feature = "tracing")]
    tracing::trace!(wrapper = wrapper.kind(), "decorated base value");

    Ok(wrapper)
}

/// Method form on a shared base: `base.decorate_as::<D>(|d| ...)`.
pub trait DecorateExt<B: ?Sized> {
    fn decorate_as<D>(&self, configure: impl FnOnce(&mut D)) -> Result<D>
    where
        D: Decorator<Base = B> + Default;
}

impl<B: ?Sized> DecorateExt<B> for Arc<B> {
    fn decorate_as<D>(&self, configure: impl FnOnce(&mut D)) -> Result<D>
    where
        D: Decorator<Base = B> + Default,
    {
        decorate_as(Some(Arc::clone(self)), configure)
    }
}
