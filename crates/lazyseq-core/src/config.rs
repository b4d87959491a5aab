//! Pipeline configuration that downstream crates can serialize/deserialize.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static GLOBAL: Lazy<PipelineConfig> = Lazy::new(PipelineConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Max elements a full-buffer stage (reverse, ordering, grouping, lookup)
    /// may hold. `None` leaves buffering unbounded.
    pub buffer_limit: Option<usize>,

    /// Initial capacity reserved for stage buffers when the upstream gives no
    /// size hint.
    pub buffer_capacity_hint: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            buffer_limit: None,
            buffer_capacity_hint: 16,
        }
    }
}

impl PipelineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYSEQ_BUFFER_LIMIT`: max buffered elements per stage (zero is
    ///   ignored like any other unusable value)
    /// - `LAZYSEQ_BUFFER_CAPACITY_HINT`: initial buffer capacity
    ///
    /// The result always passes `validate`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LAZYSEQ_BUFFER_LIMIT") {
            if let Ok(v) = s.parse::<usize>() {
                if v > 0 {
                    cfg.buffer_limit = Some(v);
                }
            }
        }

        if let Ok(s) = std::env::var("LAZYSEQ_BUFFER_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.buffer_capacity_hint = v;
            }
        }

        cfg
    }

    /// Process-wide defaults, read from the environment on first use.
    pub fn global() -> &'static PipelineConfig {
        &GLOBAL
    }

    pub fn with_buffer_limit(mut self, limit: usize) -> Self {
        self.buffer_limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_limit == Some(0) {
            return Err(Error::Config(
                "buffer_limit must be at least 1 (use None for unbounded)".into(),
            ));
        }
        Ok(())
    }
}
