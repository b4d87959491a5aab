//! Element budget for full-buffer stages.
//!
//! `reverse`, `order_by`, `group_by` and `to_lookup` have to pull their whole
//! upstream into memory before they can produce anything. The budget counts
//! admitted elements and refuses the one that would cross the configured limit.
//! With no limit configured the stage buffers whatever it is given, which on an
//! unbounded source never terminates.

use crate::config::PipelineConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct BufferBudget {
    stage: &'static str,
    limit: Option<usize>,
    buffered: usize,
}

impl BufferBudget {
    pub fn new(stage: &'static str, limit: Option<usize>) -> Self {
        Self {
            stage,
            limit,
            buffered: 0,
        }
    }

    pub fn from_config(stage: &'static str, config: &PipelineConfig) -> Self {
        Self::new(stage, config.buffer_limit)
    }

    /// Account for one more buffered element.
    pub fn admit(&mut self) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.buffered >= limit {
                return Err(Error::BufferLimitExceeded {
                    stage: self.stage,
                    limit,
                });
            }
        }
        self.buffered += 1;
        Ok(())
    }

    pub fn buffered(&self) -> usize {
        self.buffered
    }

    pub fn stage(&self) -> &'static str {
        self.stage
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// Drain `iter` into a vector, charging every element against `budget`.
///
/// Stops at the first element that would exceed the limit; the elements pulled
/// so far are dropped.
///
/// The up-front reservation never exceeds the limit (or `capacity_hint` when
/// unbounded). Unbounded iterators report `usize::MAX` as their lower bound.
pub fn drain_bounded<I>(iter: I, budget: &mut BufferBudget, capacity_hint: usize) -> Result<Vec<I::Item>>
where
    I: Iterator,
{
    let (lower, _) = iter.size_hint();
    let ceiling = budget.limit().unwrap_or(capacity_hint);
    let mut buf = Vec::with_capacity(lower.max(capacity_hint).min(ceiling));
    for item in iter {
        budget.admit()?;
        buf.push(item);
    }
    crate::metrics::emit_span(
        "buffered",
        &[
            ("stage", budget.stage().to_string()),
            ("elements", budget.buffered().to_string()),
        ],
    );
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_budget_admits_everything() {
        let mut budget = BufferBudget::new("test", None);
        for _ in 0..10_000 {
            budget.admit().unwrap();
        }
        assert_eq!(budget.buffered(), 10_000);
    }

    #[test]
    fn test_limit_rejects_overflow() {
        let mut budget = BufferBudget::new("reverse", Some(2));
        budget.admit().unwrap();
        budget.admit().unwrap();
        assert_eq!(
            budget.admit(),
            Err(Error::BufferLimitExceeded {
                stage: "reverse",
                limit: 2
            })
        );
        assert_eq!(budget.buffered(), 2);
    }

    #[test]
    fn test_drain_bounded_stops_on_infinite_source() {
        let mut budget = BufferBudget::new("order_by", Some(100));
        let err = drain_bounded(0u64.., &mut budget, 0).unwrap_err();
        assert!(matches!(err, Error::BufferLimitExceeded { limit: 100, .. }));

        let mut budget = BufferBudget::new("reverse", Some(5));
        let err = drain_bounded(std::iter::repeat('x'), &mut budget, 0).unwrap_err();
        assert_eq!(
            err,
            Error::BufferLimitExceeded {
                stage: "reverse",
                limit: 5
            }
        );
    }

    #[test]
    fn test_drain_bounded_ignores_huge_lower_bound() {
        let mut budget = BufferBudget::new("group_by", Some(1_000));
        let err = drain_bounded(0..1usize << 40, &mut budget, 16).unwrap_err();
        assert!(matches!(err, Error::BufferLimitExceeded { limit: 1_000, .. }));
        assert_eq!(budget.buffered(), 1_000);
    }

    #[test]
    fn test_drain_bounded_under_limit_keeps_everything() {
        let mut budget = BufferBudget::new("order_by", Some(8));
        let buf = drain_bounded(0..8, &mut budget, 64).unwrap();
        assert_eq!(buf, (0..8).collect::<Vec<_>>());
        assert!(buf.capacity() <= 64);
    }
}
