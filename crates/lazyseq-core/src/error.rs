use thiserror::Error;

/// Canonical result for lazyseq.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A decorator was asked to wrap nothing.
    #[error("cannot decorate an absent base value (wrapper '{wrapper}')")]
    MissingBase { wrapper: &'static str },

    /// The base slot of a decorator is write-once.
    #[error("base value already attached to wrapper '{wrapper}'")]
    BaseAlreadyAttached { wrapper: &'static str },

    #[error("buffer limit exceeded in stage '{stage}': more than {limit} elements")]
    BufferLimitExceeded { stage: &'static str, limit: usize },
}
