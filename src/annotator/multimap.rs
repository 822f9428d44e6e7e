use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Mapping from a key to the ordered sequence of values inserted under it
#[derive(Debug, Clone)]
pub struct Multimap<K: Ord, V> {
    inner: BTreeMap<K, Vec<V>>,
}

impl<K: Ord, V> Multimap<K, V> {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Append `value` under `key`, creating the entry on first insert
    pub fn insert(&mut self, key: K, value: V) {
        self.inner.entry(key).or_default().push(value);
    }

    /// All values inserted under `key`, in insertion order
    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Vec<V>)> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Ord, V> Default for Multimap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
