//! Reverse: a full-buffer stage.
//!
//! Nothing happens when the operator is built. On the first pull of a pass the
//! whole upstream is drained into a buffer, which is then handed out
//! last-to-first. Memory is proportional to the upstream length, and an
//! unbounded upstream never finishes draining (or trips the configured
//! buffer limit).

use lazyseq_core::config::PipelineConfig;
use lazyseq_core::sequence::Sequence;

use crate::buffer::buffer_all;
use crate::plan::OpPlan;
use crate::traits::Operator;

#[derive(Clone)]
pub struct Reverse<S> {
    source: S,
    config: Option<PipelineConfig>,
}

impl<S> Reverse<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: None,
        }
    }

    /// Override the process-wide config for this stage.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    fn config(&self) -> &PipelineConfig {
        self.config.as_ref().unwrap_or_else(|| PipelineConfig::global())
    }
}

/// Free-function form of `SequenceExt::reverse`.
pub fn reverse<S: Sequence>(source: S) -> Reverse<S> {
    Reverse::new(source)
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;
    type Iter<'a> = ReverseIter<'a, S> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        ReverseIter {
            pending: Some(self.source.iter()),
            config: self.config(),
            buffer: Vec::new(),
        }
    }
}

pub struct ReverseIter<'a, S: Sequence + 'a> {
    pending: Option<S::Iter<'a>>,
    config: &'a PipelineConfig,
    buffer: Vec<S::Item>,
}

impl<'a, S: Sequence + 'a> Iterator for ReverseIter<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if let Some(upstream) = self.pending.take() {
            self.buffer = buffer_all(upstream, "reverse", self.config);
        }
        self.buffer.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (0, None),
            None => (self.buffer.len(), Some(self.buffer.len())),
        }
    }
}

impl<S: Operator> Operator for Reverse<S> {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::full_buffer(self.name()).with_input(self.source.plan())
    }
}
