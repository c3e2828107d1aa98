use crate::util::sort::sorted_by_keys;
use crate::value::Properties;

/// Returns a copy of `seq`, sorted in ascending order of the key that `criterion` derives for each
/// element.
///
/// The sort is stable: elements with equal keys keep their relative order. Keys only need to be
/// partially ordered. Elements whose keys can't be compared with the others (like `NaN`, or values
/// of a different kind to the first comparable key) are placed after the sorted elements, in their
/// original order. `criterion` is called exactly once per element.
pub fn sort_by<T, K, F>(seq: &[T], criterion: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let keys: Vec<K> = seq.iter().map(criterion).collect();
    sorted_by_keys(seq, &keys)
}

/// Like [`sort_by`], using the value of the property called `name` as the key. Elements without
/// that property are placed after every other element, in their original order.
pub fn sort_by_property<T>(seq: &[T], name: &str) -> Vec<T>
where
    T: Properties + Clone,
    T::Property: PartialOrd,
{
    let mut present = Vec::with_capacity(seq.len());
    let mut keys = Vec::with_capacity(seq.len());
    let mut missing = Vec::new();
    for item in seq {
        match item.get_property(name) {
            Some(key) => {
                present.push(item.clone());
                keys.push(key);
            },
            None => missing.push(item.clone()),
        }
    }

    let mut sorted = sorted_by_keys(&present, &keys);
    sorted.append(&mut missing);
    sorted
}
