use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// A map from unique keys to values, which can be read as pairs and assigned to by key.
pub trait Mapping {
    /// The type of the keys.
    type Key;
    /// The type of the values.
    type Value;

    /// Returns an iterator over every key-value pair, in the map's iteration order.
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Returns true if the map has an entry for `key`.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// Associates `value` with `key`, replacing any existing value.
    fn assign(&mut self, key: Self::Key, value: Self::Value);
}

impl<K: Hash + Eq, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Assigning a new key appends it, while assigning an existing key keeps its position.
impl<K: Hash + Eq, V, S: BuildHasher> Mapping for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}
