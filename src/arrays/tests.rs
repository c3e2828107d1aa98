#![cfg(test)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::value::Value;
use crate::{array, object};

fn leaf<T>(value: T) -> Nested<T> {
    Nested::Leaf(value)
}

fn list<T>(items: Vec<Nested<T>>) -> Nested<T> {
    Nested::List(items)
}

fn sorted<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let mut copy = seq.to_vec();
    copy.sort();
    copy
}

#[test]
fn test_shuffle() {
    let seq: Vec<u32> = (0..50).collect();
    let shuffled = shuffle(&seq);
    assert_eq!(shuffled.len(), seq.len());
    assert_eq!(sorted(&shuffled), seq, "A shuffle should be a permutation of its input.");
    assert_eq!(seq, (0..50).collect::<Vec<_>>(), "The input shouldn't be modified.");

    let mut rng = StdRng::seed_from_u64(7);
    let a = shuffle_with(&seq, &mut rng);
    let mut rng = StdRng::seed_from_u64(7);
    let b = shuffle_with(&seq, &mut rng);
    assert_eq!(a, b, "The same seed should produce the same order.");
    assert_ne!(a, seq, "50 elements are vanishingly unlikely to stay in order.");

    assert_eq!(shuffle::<u8>(&[]), [0_u8; 0]);
    assert_eq!(shuffle(&[1]), [1]);
}

#[test]
fn test_shuffle_reaches_every_position() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = [[false; 3]; 3];
    for _ in 0..200 {
        for (position, item) in shuffle_with(&[0_usize, 1, 2], &mut rng).into_iter().enumerate() {
            seen[item][position] = true;
        }
    }
    assert!(
        seen.iter().flatten().all(|seen| *seen),
        "Every element should be able to end up in every position."
    );
}

#[test]
fn test_sort_by() {
    assert_eq!(sort_by(&[3, 1, 2], |n| *n), [1, 2, 3]);
    assert_eq!(sort_by(&["ccc", "a", "bb"], |s| s.len()), ["a", "bb", "ccc"]);
    assert_eq!(sort_by(&[1, 2, 3], |n| -n), [3, 2, 1]);

    let words = ["pear", "fig", "kiwi", "yam", "plum"];
    assert_eq!(
        sort_by(&words, |s| s.len()),
        ["fig", "yam", "pear", "kiwi", "plum"],
        "Elements with equal keys should keep their relative order."
    );

    let floats = [2.0, f64::NAN, 1.0];
    let sorted = sort_by(&floats, |n| *n);
    assert_eq!(sorted.len(), 3, "Incomparable keys shouldn't lose or duplicate elements.");
    assert_eq!(sorted[..2], [1.0, 2.0], "Comparable keys should still be sorted around a NaN.");
    assert!(sorted[2].is_nan(), "NaN keys should be placed after the sorted elements.");

    let nan_first = sort_by(&[f64::NAN, 3.0, f64::NAN, 1.0, 2.0], |n| *n);
    assert_eq!(nan_first[..3], [1.0, 2.0, 3.0]);
    assert!(nan_first[3..].iter().all(|n| n.is_nan()));
}

#[test]
fn test_sort_by_mixed_kinds() {
    let mixed = [Value::from(2), Value::from("a"), Value::from(1), Value::from("b"), Value::from(0)];
    assert_eq!(
        sort_by(&mixed, |v| v.clone()),
        [Value::from(0), Value::from(1), Value::from(2), Value::from("a"), Value::from("b")],
        "Keys of another kind should follow the sorted keys, in their original order."
    );

    let seq = [object! { "n" => 2 }, object! { "n" => "a" }, object! { "n" => 1 }, object! {}];
    assert_eq!(
        sort_by_property(&seq, "n"),
        [object! { "n" => 1 }, object! { "n" => 2 }, object! { "n" => "a" }, object! {}],
        "Unordered properties should follow the sorted ones, and missing properties come last."
    );
}

#[test]
fn test_sort_by_property() {
    let seq = [object! { "n" => 3 }, object! { "n" => 1 }, object! { "n" => 2 }];
    assert_eq!(
        sort_by_property(&seq, "n"),
        [object! { "n" => 1 }, object! { "n" => 2 }, object! { "n" => 3 }]
    );

    let people = [
        object! { "name" => "curly", "age" => 50 },
        object! { "name" => "nobody" },
        object! { "name" => "moe", "age" => 30 },
        object! { "name" => "larry", "age" => 50 },
    ];
    let names: Vec<Value> = sort_by_property(&people, "age")
        .iter()
        .filter_map(|person| person.as_object()?.get("name").cloned())
        .collect();
    assert_eq!(
        names,
        [Value::from("moe"), Value::from("curly"), Value::from("larry"), Value::from("nobody")],
        "Ties should be stable and missing properties should sort last."
    );

    let maps = [
        BTreeMap::from([("k".to_owned(), "b")]),
        BTreeMap::from([("k".to_owned(), "a")]),
    ];
    assert_eq!(sort_by_property(&maps, "k"), [maps[1].clone(), maps[0].clone()]);
}

#[test]
fn test_zip() {
    let letters = [Value::from("a"), Value::from("b"), Value::from("c"), Value::from("d")];
    let numbers = [Value::from(1), Value::from(2), Value::from(3)];
    assert_eq!(
        zip(&[&letters[..], &numbers[..]]),
        [
            [Some(Value::from("a")), Some(Value::from(1))],
            [Some(Value::from("b")), Some(Value::from(2))],
            [Some(Value::from("c")), Some(Value::from(3))],
            [Some(Value::from("d")), None],
        ],
        "Missing positions should be filled with None."
    );

    assert!(zip::<u8>(&[]).is_empty());
    assert_eq!(zip(&[&[1, 2][..]]), [[Some(1)], [Some(2)]]);

    assert_eq!(
        zip_pair(&["a", "b"], &[1, 2, 3]),
        [(Some("a"), Some(1)), (Some("b"), Some(2)), (None, Some(3))]
    );
}

#[test]
fn test_flatten() {
    let nested = [leaf(1), list(vec![leaf(2), leaf(3)]), list(vec![leaf(4), list(vec![leaf(5), leaf(6)])])];
    assert_eq!(flatten(&nested), [1, 2, 3, 4, 5, 6]);
    assert_eq!(flatten(&[list(Vec::<Nested<u8>>::new())]), [0_u8; 0]);

    let value = array![1, array![2, 3], array![4, array![5, array![]]]];
    assert_eq!(
        flatten(value.as_array().unwrap_or_default()),
        [Value::from(1), Value::from(2), Value::from(3), Value::from(4), Value::from(5)]
    );

    let with_object = [array!["x", object! { "k" => array![1, 2] }]];
    assert_eq!(
        flatten(&with_object),
        [Value::from("x"), object! { "k" => array![1, 2] }],
        "Objects should be treated as leaves, even if they contain arrays."
    );
}

#[test]
fn test_intersection() {
    assert_eq!(intersection(&[&[1, 2, 3][..], &[2, 3, 4]]), [2, 3]);
    assert_eq!(
        intersection(&[&["moe", "curly", "larry"][..], &["moe", "groucho"], &["larry", "moe"]]),
        ["moe"]
    );
    assert_eq!(
        intersection(&[&[1, 2, 2, 3][..], &[2]]),
        [2, 2],
        "Duplicates in the first sequence should be kept."
    );
    assert_eq!(intersection(&[&[1, 2][..]]), [1, 2], "A lone sequence intersects with itself.");
    assert_eq!(intersection::<i32>(&[]), [0; 0]);

    let mut iter = Intersection::new(&[1, 2, 3], &[]);
    assert_eq!(iter.size_hint(), (0, Some(3)));
    assert_eq!(iter.next(), Some(&1));
}

#[test]
fn test_difference() {
    assert_eq!(difference(&[1, 2, 3], &[&[2, 3, 4]]), [1]);
    assert_eq!(difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10], &[1]]), [3, 4]);
    assert_eq!(difference(&[1, 2, 3], &[]), [1, 2, 3], "No other sequences removes nothing.");

    let mut iter = Difference::new(&[1, 1, 2], &[&[1]]);
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None, "The iterator should be fused.");
}

proptest! {
    #[test]
    fn prop_shuffle_is_permutation(seq in prop::collection::vec(any::<i16>(), 1..40), seed in any::<u64>()) {
        let shuffled = shuffle_with(&seq, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(shuffled.len(), seq.len());
        prop_assert_eq!(sorted(&shuffled), sorted(&seq));
    }

    #[test]
    fn prop_sort_by_is_stable(seq in prop::collection::vec((0..4_u8, any::<u16>()), 0..40)) {
        let by_key = sort_by(&seq, |(key, _)| *key);
        for pair in by_key.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
        }

        let mut expected = seq.clone();
        expected.sort_by_key(|(key, _)| *key);
        prop_assert_eq!(by_key, expected);
    }

    #[test]
    fn prop_intersection_and_difference_partition(
        first in prop::collection::vec(0..10_u8, 0..20),
        other in prop::collection::vec(0..10_u8, 0..20),
    ) {
        let common = intersection(&[&first[..], &other[..]]);
        let only = difference(&first, &[&other[..]]);
        prop_assert_eq!(common.len() + only.len(), first.len());
        prop_assert!(common.iter().all(|n| other.contains(n)));
        prop_assert!(only.iter().all(|n| !other.contains(n)));
    }
}
