//! Lookup: the eager, repeatedly-queryable grouping structure.
//!
//! Built by one pass at call time. After that it never touches its source
//! again: indexing is a hash probe and iterating walks the stored groupings
//! in first-key-encounter order.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

use lazyseq_core::config::PipelineConfig;
use lazyseq_core::error::Result;
use lazyseq_core::sequence::Sequence;

use super::grouping::Grouping;
use super::partition;

#[derive(Debug, Clone)]
pub struct Lookup<K, T> {
    groups: Vec<Grouping<K, T>>,
    index: HashMap<K, usize>,
}

impl<K, T> Lookup<K, T>
where
    K: Hash + Eq + Clone,
{
    /// Run one pass over `source` now and group it by `key`.
    ///
    /// Fails with `BufferLimitExceeded` when `config.buffer_limit` is set and
    /// the source holds more elements than it allows.
    pub fn build<S, F>(source: &S, key: F, config: &PipelineConfig) -> Result<Self>
    where
        S: Sequence<Item = T>,
        F: Fn(&T) -> K,
    {
        let (groups, index) = partition(source.iter(), &key, "to_lookup", config)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(groups = groups.len(), "built lookup");

        Ok(Self { groups, index })
    }
}

impl<K, T> Lookup<K, T>
where
    K: Hash + Eq,
{
    /// Members for `key`; an empty slice when the key was never seen.
    pub fn get<Q>(&self, key: &Q) -> &[T]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.grouping(key).map(Grouping::members).unwrap_or(&[])
    }

    pub fn grouping<Q>(&self, key: &Q) -> Option<&Grouping<K, T>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| &self.groups[idx])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K, T> Lookup<K, T> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(Grouping::key)
    }

    /// Groupings in first-key-encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Grouping<K, T>> {
        self.groups.iter()
    }

    pub fn into_groupings(self) -> Vec<Grouping<K, T>> {
        self.groups
    }
}

impl<K, T, Q> Index<&Q> for Lookup<K, T>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = [T];

    fn index(&self, key: &Q) -> &[T] {
        self.get(key)
    }
}

impl<'l, K, T> Sequence for &'l Lookup<K, T> {
    type Item = &'l Grouping<K, T>;
    type Iter<'a> = std::slice::Iter<'l, Grouping<K, T>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        let lookup: &'l Lookup<K, T> = *self;
        lookup.groups.iter()
    }
}

impl<'l, K, T> IntoIterator for &'l Lookup<K, T> {
    type Item = &'l Grouping<K, T>;
    type IntoIter = std::slice::Iter<'l, Grouping<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Free-function form of `SequenceExt::to_lookup`, with an explicit config.
pub fn to_lookup<S, K, F>(source: S, key: F, config: &PipelineConfig) -> Result<Lookup<K, S::Item>>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq + Clone,
{
    Lookup::build(&source, key, config)
}
