//! A key and its members in encounter order.

use lazyseq_core::sequence::Sequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    key: K,
    members: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub(crate) fn new(key: K, first: T) -> Self {
        Self {
            key,
            members: vec![first],
        }
    }

    pub(crate) fn push(&mut self, member: T) {
        self.members.push(member);
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Number of members (never zero for a grouping built from a source).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[T] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<T> {
        self.members
    }

    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.members)
    }
}

impl<'g, K, T> Sequence for &'g Grouping<K, T> {
    type Item = &'g T;
    type Iter<'a> = std::slice::Iter<'g, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        let grouping: &'g Grouping<K, T> = *self;
        grouping.members.iter()
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'g, K, T> IntoIterator for &'g Grouping<K, T> {
    type Item = &'g T;
    type IntoIter = std::slice::Iter<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
