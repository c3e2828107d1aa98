use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::Value;

/// A type whose contents can be addressed by a property name.
///
/// This is what `pluck` and `sort_by_property` rely on.
pub trait Properties {
    /// The type of the values stored under each property.
    type Property;

    /// Returns the value stored under `name`, or None if there is no such property.
    fn get_property(&self, name: &str) -> Option<&Self::Property>;

    /// Returns true if the value has a property called `name`.
    fn has_property(&self, name: &str) -> bool {
        self.get_property(name).is_some()
    }
}

/// Objects are addressed by key and arrays by their decimal index. Every other kind of value has
/// no properties.
impl Properties for Value {
    type Property = Value;

    fn get_property(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(object) => object.get(name),
            Value::Array(items) => items.get(parse_index(name)?),
            _ => None,
        }
    }
}

/// Parses `name` as an array index, accepting only canonical decimal: no sign, no whitespace and
/// no leading zeros.
fn parse_index(name: &str) -> Option<usize> {
    let canonical = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_digit())
        && (name == "0" || !name.starts_with('0'));
    if canonical { name.parse().ok() } else { None }
}

impl<V, S: BuildHasher> Properties for HashMap<String, V, S> {
    type Property = V;

    fn get_property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Properties for IndexMap<String, V, S> {
    type Property = V;

    fn get_property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Properties for BTreeMap<String, V> {
    type Property = V;

    fn get_property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}
