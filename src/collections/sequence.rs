use crate::value::{MethodError, Properties, Truthy, Value};

/// Returns the first element of `seq`, or None if it is empty.
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Returns the first `n` elements of `seq`, or all of `seq` if it has fewer than `n` elements.
pub fn first_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[..n.min(seq.len())]
}

/// Returns the last element of `seq`, or None if it is empty.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Returns the last `n` elements of `seq`, or all of `seq` if it has fewer than `n` elements.
pub fn last_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[seq.len() - n.min(seq.len())..]
}

/// Returns the index of the first element of `seq` which is equal to `target`, or None if there
/// is no such element.
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|item| item == target)
}

/// Returns a new Vec containing every element of `seq` for which `predicate` returns a truthy
/// value, in their original order.
pub fn filter<T, P, R>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> R,
    R: Truthy,
{
    seq.iter()
        .filter(|item| predicate(item).is_truthy())
        .cloned()
        .collect()
}

/// The complement of [`filter`]. Returns a new Vec containing every element of `seq` for which
/// `predicate` returns a falsy value, in their original order.
pub fn reject<T, P, R>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> R,
    R: Truthy,
{
    seq.iter()
        .filter(|item| predicate(item).is_falsy())
        .cloned()
        .collect()
}

/// Returns a new Vec with the duplicate elements of `seq` removed. The first occurrence of each
/// element is kept, so the original order is preserved.
///
/// Only [`PartialEq`] is required, which makes this `O(n^2)`. For hashable elements, collecting
/// into a set is faster if order doesn't matter.
pub fn uniq<T: PartialEq + Clone>(seq: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(seq.len());
    for item in seq {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Returns a new Vec containing the result of applying `iterator` to each element of `seq`.
///
/// `seq` is left untouched. See [`map_in_place`] for a version which overwrites its input.
pub fn map<T, U, F: FnMut(&T) -> U>(seq: &[T], iterator: F) -> Vec<U> {
    seq.iter().map(iterator).collect()
}

/// Replaces each element of `seq` with the result of applying `iterator` to it, then returns
/// `seq`.
pub fn map_in_place<T, F: FnMut(&T) -> T>(seq: &mut [T], mut iterator: F) -> &mut [T] {
    for item in seq.iter_mut() {
        let mapped = iterator(item);
        *item = mapped;
    }
    seq
}

/// Returns the value of the property called `name` for each element of `seq`. Elements without
/// that property produce None.
pub fn pluck<T>(seq: &[T], name: &str) -> Vec<Option<T::Property>>
where
    T: Properties,
    T::Property: Clone,
{
    seq.iter()
        .map(|item| item.get_property(name).cloned())
        .collect()
}

/// Calls `method` with each element of `seq` as its receiver and returns the results in order.
pub fn invoke<T, R, F: FnMut(&T) -> R>(seq: &[T], method: F) -> Vec<R> {
    seq.iter().map(method).collect()
}

/// Calls the method called `name` on each element of `seq`, passing `args` every time, and returns
/// the results in order. See [`Value::call_method`] for the available methods.
///
/// Stops at the first element for which the method can't be called.
pub fn invoke_method(seq: &[Value], name: &str, args: &[Value]) -> Result<Vec<Value>, MethodError> {
    seq.iter()
        .map(|item| item.call_method(name, args))
        .collect()
}
