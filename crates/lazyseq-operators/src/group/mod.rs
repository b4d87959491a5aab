//! Grouping: deferred `group_by` and eager `to_lookup`.
//!
//! Both run the same single pass: each element goes to the grouping for its
//! key, created the first time the key is seen. Keys come out in
//! first-encounter order and members keep their encounter order. Keys compare
//! by value (`Hash + Eq`).
//!
//! The difference is when the pass happens. `GroupBy` runs it on the first
//! pull of every pass over its result, re-running the whole upstream chain
//! each time. `Lookup` runs it once, at call time.

mod grouping;
mod lookup;

use std::collections::HashMap;
use std::hash::Hash;

use lazyseq_core::budget::BufferBudget;
use lazyseq_core::config::PipelineConfig;
use lazyseq_core::error::Result;
use lazyseq_core::metrics::emit_span;
use lazyseq_core::sequence::Sequence;

use crate::plan::OpPlan;
use crate::traits::Operator;

pub use grouping::Grouping;
pub use lookup::{to_lookup, Lookup};

type Partitioned<K, T> = (Vec<Grouping<K, T>>, HashMap<K, usize>);

/// The shared grouping pass.
pub(crate) fn partition<I, K, F>(
    iter: I,
    key_fn: &F,
    stage: &'static str,
    config: &PipelineConfig,
) -> Result<Partitioned<K, I::Item>>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: Hash + Eq + Clone,
{
    let mut budget = BufferBudget::from_config(stage, config);
    let mut groups: Vec<Grouping<K, I::Item>> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for item in iter {
        budget.admit()?;
        let key = key_fn(&item);
        match index.get(&key) {
            Some(&idx) => groups[idx].push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Grouping::new(key, item));
            }
        }
    }

    emit_span(
        "grouped",
        &[
            ("stage", stage.to_string()),
            ("elements", budget.buffered().to_string()),
            ("groups", groups.len().to_string()),
        ],
    );
    Ok((groups, index))
}

#[derive(Clone)]
pub struct GroupBy<S, F> {
    source: S,
    key_fn: F,
    config: Option<PipelineConfig>,
}

impl<S, F> GroupBy<S, F> {
    pub fn new(source: S, key_fn: F) -> Self {
        Self {
            source,
            key_fn,
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

/// Free-function form of `SequenceExt::group_by`.
pub fn group_by<S, K, F>(source: S, key_fn: F) -> GroupBy<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq + Clone,
{
    GroupBy::new(source, key_fn)
}

impl<S, K, F> Sequence for GroupBy<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq + Clone,
{
    type Item = Grouping<K, S::Item>;
    type Iter<'a> = GroupByIter<'a, S, F, K> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        GroupByIter {
            pending: Some(self.source.iter()),
            key_fn: &self.key_fn,
            config: self.config(),
            groups: Vec::new().into_iter(),
        }
    }
}

pub struct GroupByIter<'a, S: Sequence + 'a, F, K> {
    pending: Option<S::Iter<'a>>,
    key_fn: &'a F,
    config: &'a PipelineConfig,
    groups: std::vec::IntoIter<Grouping<K, S::Item>>,
}

impl<'a, S, F, K> Iterator for GroupByIter<'a, S, F, K>
where
    S: Sequence + 'a,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq + Clone,
{
    type Item = Grouping<K, S::Item>;

    /// # Panics
    ///
    /// When the configured buffer limit is exceeded during the grouping pass.
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(upstream) = self.pending.take() {
            let (groups, _) = match partition(upstream, self.key_fn, "group_by", self.config) {
                Ok(parts) => parts,
                Err(err) => panic!("{err}"),
            };
            self.groups = groups.into_iter();
        }
        self.groups.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (0, None),
            None => self.groups.size_hint(),
        }
    }
}

impl<S, K, F> Operator for GroupBy<S, F>
where
    S: Operator,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq + Clone,
{
    fn name(&self) -> &'static str {
        "group_by"
    }

    fn plan(&self) -> OpPlan {
        OpPlan::full_buffer(self.name()).with_input(self.source.plan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SequenceExt;

    #[test]
    fn test_group_order_is_first_encounter() {
        let words = vec!["beta", "alpha", "bravo", "apple", "charlie"];
        let groups: Vec<(char, Vec<&str>)> = (&words)
            .group_by(|w| w.chars().next().unwrap_or(' '))
            .iter()
            .map(|g| {
                let (k, members) = g.into_parts();
                (k, members.into_iter().copied().collect())
            })
            .collect();
        assert_eq!(
            groups,
            vec![
                ('b', vec!["beta", "bravo"]),
                ('a', vec!["alpha", "apple"]),
                ('c', vec!["charlie"]),
            ]
        );
    }

    #[test]
    fn test_lookup_absent_key_is_empty() {
        let data = vec![1, 2, 3, 4];
        let lookup = (&data).to_lookup(|x| **x % 2 == 0);
        assert_eq!(lookup.get(&true), &[&2, &4]);
        assert!(lookup.get(&false).len() == 2);

        let by_value = (&data).to_lookup(|x| **x);
        assert!(by_value.get(&99).is_empty());
        assert!(by_value[&99].is_empty());
    }
}
