use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use derive_more::{Display, IsVariant};
use indexmap::IndexMap;

use crate::value::Value;

/// A collection of items which can be iterated along with the key of each item, in a consistent
/// order.
///
/// For sequences the key is the index of the item. For maps it is a reference to the item's key,
/// with the iteration order being whatever the map's own iterator provides. Iterating a
/// [`Value`] yields the elements of an array or the properties of an object, keyed by [`Key`].
pub trait Collection {
    /// The type of the items in the collection.
    type Item;

    /// The type used to identify an item within the collection, borrowed from the collection.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Returns an iterator over each item in the collection, along with its key.
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)>;

    /// Returns an iterator over each item in the collection, without keys.
    fn items(&self) -> impl Iterator<Item = &Self::Item> {
        self.entries().map(|(_, item)| item)
    }

    /// Returns true if the collection contains no items.
    fn is_empty_collection(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// The key of an item within a [`Value`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Key<'a> {
    /// The index of an element within an array.
    Index(usize),
    /// The name of a property within an object.
    Name(&'a str),
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter().enumerate()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter().enumerate()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter().enumerate()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter()
    }
}

impl<K, V, S> Collection for IndexMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter()
    }
}

/// Arrays yield their elements and objects their properties. Any other kind of value is treated
/// as an empty collection.
impl Collection for Value {
    type Item = Value;
    type Key<'a> = Key<'a>;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        let (items, object) = match self {
            Value::Array(items) => (items.as_slice(), None),
            Value::Object(object) => (&[][..], Some(object)),
            _ => (&[][..], None),
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| (Key::Index(i), item))
            .chain(
                object
                    .into_iter()
                    .flat_map(|object| object.iter().map(|(k, v)| (Key::Name(k.as_str()), v))),
            )
    }
}
