//! Shared draining step for the full-buffer stages.

use lazyseq_core::budget::{drain_bounded, BufferBudget};
use lazyseq_core::config::PipelineConfig;

/// Pull all of `iter` into memory for `stage`.
///
/// # Panics
///
/// Panics with `Error::BufferLimitExceeded` when `config.buffer_limit` is set
/// and the upstream produces more elements than it allows. Exhausting the
/// buffer is not a recoverable condition for a lazy pass.
pub fn buffer_all<I>(iter: I, stage: &'static str, config: &PipelineConfig) -> Vec<I::Item>
where
    I: Iterator,
{
    let mut budget = BufferBudget::from_config(stage, config);
    match drain_bounded(iter, &mut budget, config.buffer_capacity_hint) {
        Ok(buf) => buf,
        Err(err) => panic!("{err}"),
    }
}
