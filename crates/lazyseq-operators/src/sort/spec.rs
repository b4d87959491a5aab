//! Sort keys and their lexicographic composition.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn orient(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

type Comparator<'k, T> = Box<dyn Fn(&T, &T) -> Ordering + 'k>;

/// Compares two buffer positions by keys extracted ahead of time.
type Ranked<'k> = Box<dyn Fn(usize, usize) -> Ordering + 'k>;

/// Extracts one key per buffered element.
type Ranker<'k, T> = Box<dyn Fn(&[T]) -> Ranked<'k> + 'k>;

/// One (comparator, direction) entry of an `OrderSpec`.
pub struct SortKey<'k, T> {
    compare: Comparator<'k, T>,
    rank: Option<Ranker<'k, T>>,
    direction: Direction,
}

impl<'k, T> SortKey<'k, T> {
    /// Compare by an extracted key.
    ///
    /// `OrderSpec::sort` calls `key` once per element; `compare` on a single
    /// pair calls it twice.
    pub fn by_key<K, F>(key: F, direction: Direction) -> Self
    where
        K: Ord + 'k,
        F: Fn(&T) -> K + 'k,
    {
        let key = Rc::new(key);
        let pairwise = Rc::clone(&key);
        Self {
            compare: Box::new(move |a: &T, b: &T| (*pairwise)(a).cmp(&(*pairwise)(b))),
            rank: Some(Box::new(move |items: &[T]| -> Ranked<'k> {
                let keys: Vec<K> = items.iter().map(|item| (*key)(item)).collect();
                Box::new(move |a: usize, b: usize| keys[a].cmp(&keys[b]))
            })),
            direction,
        }
    }

    pub fn with_comparator<C>(compare: C, direction: Direction) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'k,
    {
        Self {
            compare: Box::new(compare),
            rank: None,
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.orient((self.compare)(a, b))
    }
}

impl<T> fmt::Debug for SortKey<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortKey")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Ordered list of sort keys. Key `i + 1` is consulted only when key `i`
/// compares equal; elements equal on every key keep their input order.
pub struct OrderSpec<'k, T> {
    keys: Vec<SortKey<'k, T>>,
}

impl<'k, T> OrderSpec<'k, T> {
    pub fn new(first: SortKey<'k, T>) -> Self {
        Self { keys: vec![first] }
    }

    pub fn push(&mut self, key: SortKey<'k, T>) {
        self.keys.push(key);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn directions(&self) -> Vec<Direction> {
        self.keys.iter().map(SortKey::direction).collect()
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for key in &self.keys {
            match key.compare(a, b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// One stable sort over the whole buffer.
    ///
    /// Key selectors run once per element; explicit comparators run per
    /// comparison.
    pub fn sort(&self, buf: &mut Vec<T>) {
        if buf.len() < 2 {
            return;
        }

        let items: &[T] = buf;
        let ranks: Vec<Option<Ranked<'k>>> = self
            .keys
            .iter()
            .map(|key| key.rank.as_ref().map(|rank| rank(items)))
            .collect();

        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| {
            for (key, rank) in self.keys.iter().zip(&ranks) {
                let ord = match rank {
                    Some(rank) => rank(a, b),
                    None => (key.compare)(&items[a], &items[b]),
                };
                match key.direction.orient(ord) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        });

        let mut slots: Vec<Option<T>> = buf.drain(..).map(Some).collect();
        buf.extend(order.into_iter().filter_map(|idx| slots[idx].take()));
    }
}

impl<T> fmt::Debug for OrderSpec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderSpec").field("keys", &self.keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_later_key_only_breaks_ties() {
        let calls = Cell::new(0);
        let mut spec = OrderSpec::new(SortKey::by_key(|p: &(i32, i32)| p.0, Direction::Ascending));
        spec.push(SortKey::by_key(
            |p: &(i32, i32)| {
                calls.set(calls.get() + 1);
                p.1
            },
            Direction::Descending,
        ));

        assert_eq!(spec.compare(&(1, 5), &(2, 0)), Ordering::Less);
        assert_eq!(calls.get(), 0);

        assert_eq!(spec.compare(&(1, 5), &(1, 7)), Ordering::Greater);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_sort_extracts_each_key_once() {
        let calls = Cell::new(0);
        let spec = OrderSpec::new(SortKey::by_key(
            |s: &String| {
                calls.set(calls.get() + 1);
                s.len()
            },
            Direction::Descending,
        ));
        let mut words: Vec<String> = ["a", "ccc", "bb", "dddd", "e", "ff"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        spec.sort(&mut words);
        assert_eq!(words, vec!["dddd", "ccc", "bb", "ff", "a", "e"]);
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn test_sort_mixes_keys_and_comparators() {
        let mut spec = OrderSpec::new(SortKey::by_key(|p: &(u8, f64)| p.0, Direction::Ascending));
        spec.push(SortKey::with_comparator(
            |a: &(u8, f64), b: &(u8, f64)| a.1.total_cmp(&b.1),
            Direction::Descending,
        ));
        let mut rows = vec![(2, 0.5), (1, 0.25), (2, 1.5), (1, 3.0)];
        spec.sort(&mut rows);
        assert_eq!(rows, vec![(1, 3.0), (1, 0.25), (2, 1.5), (2, 0.5)]);
    }

    #[test]
    fn test_sort_is_stable() {
        let spec = OrderSpec::new(SortKey::by_key(|p: &(char, i32)| p.1, Direction::Ascending));
        let mut rows = vec![('a', 2), ('b', 1), ('c', 2), ('d', 1)];
        spec.sort(&mut rows);
        assert_eq!(rows, vec![('b', 1), ('d', 1), ('a', 2), ('c', 2)]);
    }
}
