//! Generic collection helpers: count-by, group-by, and partition.
//!
//! Grouping helpers keep keys in first-seen order, so iterating a result
//! follows the order in which categories first appeared in the input.

use ahash::AHashMap;
use std::hash::Hash;

/// Buckets of values keyed by `K`, iterated in first-seen key order.
#[derive(Debug, Clone)]
pub struct Groups<K, V> {
    index: AHashMap<K, usize>,
    buckets: Vec<(K, Vec<V>)>,
}

impl<K: Hash + Eq + Clone, V> Groups<K, V> {
    pub fn new() -> Self {
        Self {
            index: AHashMap::new(),
            buckets: Vec::new(),
        }
    }

    /// Append `value` to the bucket for `key`, opening the bucket if needed.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&i) => self.buckets[i].1.push(value),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![value]));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index.get(key).map(|&i| self.buckets[i].1.as_slice())
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl<K: Hash + Eq + Clone, V> Default for Groups<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-category counts, iterated in first-seen key order.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: AHashMap<K, usize>,
    counts: Vec<(K, usize)>,
    total: usize,
}

impl<K: Hash + Eq + Clone> Tally<K> {
    /// Count for `key`; categories that never occurred count as zero.
    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&i| self.counts[i].1)
    }

    /// Number of items counted.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, n)| (k, *n))
    }
}

/// Count items per category derived by `key`.
pub fn count_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Tally<K>
where
    K: Hash + Eq + Clone,
    F: FnMut(&T) -> K,
{
    let mut tally = Tally {
        index: AHashMap::new(),
        counts: Vec::new(),
        total: 0,
    };
    for item in items {
        let k = key(&item);
        tally.total += 1;
        match tally.index.get(&k) {
            Some(&i) => tally.counts[i].1 += 1,
            None => {
                tally.index.insert(k.clone(), tally.counts.len());
                tally.counts.push((k, 1));
            }
        }
    }
    tally
}

/// Bucket items by `key`, preserving input order inside each bucket.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Groups<K, T>
where
    K: Hash + Eq + Clone,
    F: FnMut(&T) -> K,
{
    let mut groups = Groups::new();
    for item in items {
        groups.push(key(&item), item);
    }
    groups
}

/// Split items into `(matching, rest)`, preserving relative order in both.
pub fn partition<T, F>(items: impl IntoIterator<Item = T>, mut pred: F) -> (Vec<T>, Vec<T>)
where
    F: FnMut(&T) -> bool,
{
    let mut yes = Vec::new();
    let mut no = Vec::new();
    for item in items {
        if pred(&item) {
            yes.push(item);
        } else {
            no.push(item);
        }
    }
    (yes, no)
}
