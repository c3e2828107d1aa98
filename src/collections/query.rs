use super::Collection;
use crate::value::Truthy;

/// Calls `iterator` once for each item in `collection`, in iteration order, with the item, its key
/// and the collection itself.
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    for (key, item) in collection.entries() {
        iterator(item, key, collection);
    }
}

/// Returns true if any item in `collection` is equal to `target`.
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    collection.items().any(|item| item == target)
}

/// Reduces `collection` to a single value by repeatedly calling `iterator` with the previous
/// result and the next item, from left to right.
///
/// If `initial` is None, the first item is used as the starting value and the reduction starts
/// with the second item. Returns None only if `collection` is empty and there is no `initial`
/// value.
///
/// Use [`fold`] if the result is of a different type to the items.
pub fn reduce<C, F>(collection: &C, mut iterator: F, initial: Option<C::Item>) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut items = collection.items();
    let seed = match initial {
        Some(seed) => seed,
        None => items.next()?.clone(),
    };
    Some(items.fold(seed, |acc, item| iterator(acc, item)))
}

/// Reduces `collection` to a single value of any type, starting with `initial` and repeatedly
/// calling `iterator` with the previous result and the next item, from left to right.
pub fn fold<C, A, F>(collection: &C, iterator: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection.items().fold(initial, iterator)
}

/// Returns true if `predicate` returns a truthy value for every item in `collection`.
///
/// An empty collection always passes and so does a missing predicate, without any items being
/// tested.
pub fn every<C, P, R>(collection: &C, predicate: Option<P>) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    match predicate {
        Some(mut predicate) => collection.items().all(|item| predicate(item).is_truthy()),
        None => true,
    }
}

/// Returns true if `predicate` returns a truthy value for at least one item in `collection`. An
/// empty collection never passes.
///
/// See [`some_truthy`] to test the items themselves.
pub fn some<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    collection.items().any(|item| predicate(item).is_truthy())
}

/// Returns true if at least one item in `collection` is truthy.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    collection.items().any(Truthy::is_truthy)
}
