#![forbid(unsafe_code)]
//! lazyseq-decorate: wrap a shared base value in a configurable decorator.
//!
//! A decorator is any type that embeds a `BaseSlot` for its base capability
//! (usually a trait object such as `dyn Employee`) and implements the same
//! capability by delegating to that base. `decorate_as::<D>` allocates a
//! default `D`, attaches the base, runs the caller's configurator and hands
//! back the concrete `D`, so wrapper-specific calls can follow directly.
//!
//! Whether a wrapper delegates before or after its own behaviour is up to the
//! wrapper; the builder does not enforce it.

pub mod builder;
pub mod slot;

pub use builder::{decorate_as, decorate_with, DecorateExt};
pub use slot::{BaseSlot, Decorator};
