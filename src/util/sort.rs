use std::cmp::Ordering;

/// Returns a copy of `seq`, stably sorted in ascending order of `keys`, where `keys[i]` is the key
/// of `seq[i]`.
///
/// Keys only need to be partially ordered. The first key that is comparable with itself is taken
/// as the reference. Keys which can't be compared with it (`NaN`, or values of another kind) are
/// left out of the sort and appended after every sorted element, in their original order. This
/// never panics, unlike an inconsistent comparator passed to [`slice::sort_by`].
pub fn sorted_by_keys<T: Clone, K: PartialOrd>(seq: &[T], keys: &[K]) -> Vec<T> {
    let self_comparable = |key: &K| key.partial_cmp(key).is_some();
    let reference = keys.iter().find(|key| self_comparable(*key));

    let (mut ordered, unordered): (Vec<usize>, Vec<usize>) = (0..seq.len()).partition(|&i| {
        reference.is_some_and(|reference| {
            self_comparable(&keys[i]) && keys[i].partial_cmp(reference).is_some()
        })
    });

    merge_sort(&mut ordered, &|a: &usize, b: &usize| {
        keys[*b].partial_cmp(&keys[*a]) == Some(Ordering::Less)
    });
    ordered
        .into_iter()
        .chain(unordered)
        .map(|i| seq[i].clone())
        .collect()
}

/// A top-down merge sort which only ever asks whether the right element belongs strictly before the
/// left one. When it doesn't, the left element is taken first, which keeps the sort stable.
fn merge_sort<T: Copy>(items: &mut [T], right_first: &impl Fn(&T, &T) -> bool) {
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort(&mut items[..mid], right_first);
    merge_sort(&mut items[mid..], right_first);

    let mut merged = Vec::with_capacity(items.len());
    let (mut left, mut right) = (0, mid);
    while left < mid && right < items.len() {
        if right_first(&items[left], &items[right]) {
            merged.push(items[right]);
            right += 1;
        } else {
            merged.push(items[left]);
            left += 1;
        }
    }
    merged.extend_from_slice(&items[left..mid]);
    merged.extend_from_slice(&items[right..]);
    items.copy_from_slice(&merged);
}
