use std::iter::FusedIterator;
use std::slice;

/// Returns the elements of the first sequence in `seqs` which also appear in every other
/// sequence, in their original order. Duplicates in the first sequence are kept.
///
/// Returns an empty Vec if `seqs` is empty.
pub fn intersection<T: PartialEq + Clone>(seqs: &[&[T]]) -> Vec<T> {
    match seqs.split_first() {
        Some((first, others)) => Intersection::new(first, others).cloned().collect(),
        None => Vec::new(),
    }
}

/// Returns the elements of `first` which don't appear in any of `others`, in their original
/// order.
pub fn difference<T: PartialEq + Clone>(first: &[T], others: &[&[T]]) -> Vec<T> {
    Difference::new(first, others).cloned().collect()
}

/// A borrowed iterator over the items in a sequence which also appear in all of a number of other
/// sequences. (`first ∩ others[0] ∩ others[1] ...`)
///
/// Membership is tested by equality, so each item costs a scan of every other sequence.
pub struct Intersection<'a, T> {
    pub(crate) inner: slice::Iter<'a, T>,
    pub(crate) others: &'a [&'a [T]],
}

impl<'a, T: PartialEq> Intersection<'a, T> {
    /// Creates an iterator over the items of `first` which appear in every one of `others`.
    pub fn new(first: &'a [T], others: &'a [&'a [T]]) -> Intersection<'a, T> {
        Intersection {
            inner: first.iter(),
            others,
        }
    }
}

impl<'a, T: PartialEq> Iterator for Intersection<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && !self.others.iter().all(|other| other.contains(item))
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: PartialEq> FusedIterator for Intersection<'_, T> {}

/// A borrowed iterator over the items in a sequence which appear in none of a number of other
/// sequences. (`first \ others[0] \ others[1] ...`)
pub struct Difference<'a, T> {
    pub(crate) inner: slice::Iter<'a, T>,
    pub(crate) others: &'a [&'a [T]],
}

impl<'a, T: PartialEq> Difference<'a, T> {
    /// Creates an iterator over the items of `first` which appear in none of `others`.
    pub fn new(first: &'a [T], others: &'a [&'a [T]]) -> Difference<'a, T> {
        Difference {
            inner: first.iter(),
            others,
        }
    }
}

impl<'a, T: PartialEq> Iterator for Difference<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && self.others.iter().any(|other| other.contains(item))
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: PartialEq> FusedIterator for Difference<'_, T> {}
