#![cfg(test)]

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;

use super::*;
use crate::value::{MethodError, Value};
use crate::{array, object};

fn people() -> Vec<Value> {
    vec![
        object! { "name" => "moe", "age" => 30 },
        object! { "name" => "curly", "age" => 50 },
        object! { "name" => "larry" },
    ]
}

#[test]
fn test_first_and_last() {
    let seq = [1, 2, 3];
    assert_eq!(first(&seq), Some(&1));
    assert_eq!(last(&seq), Some(&3));
    assert_eq!(first::<i32>(&[]), None, "An empty sequence has no first element.");
    assert_eq!(last::<i32>(&[]), None, "An empty sequence has no last element.");

    assert_eq!(first_n(&seq, 2), [1, 2]);
    assert_eq!(last_n(&seq, 2), [2, 3]);
    assert_eq!(first_n(&seq, 0), [0; 0], "Taking zero elements should give an empty slice.");
    assert_eq!(last_n(&seq, 0), [0; 0], "Taking zero elements should give an empty slice.");
    assert_eq!(
        first_n(&seq, 5),
        seq,
        "Taking more elements than there are should give the whole sequence."
    );
    assert_eq!(
        last_n(&seq, 5),
        seq,
        "Taking more elements than there are should give the whole sequence."
    );
}

#[test]
fn test_each() {
    let mut visited = Vec::new();
    each(&[10, 20, 30], |item, i, seq| {
        assert_eq!(seq.len(), 3, "The collection itself should be passed to the iterator.");
        visited.push((i, *item));
    });
    assert_eq!(visited, [(0, 10), (1, 20), (2, 30)]);

    let mut map = BTreeMap::new();
    map.insert("b", 2);
    map.insert("a", 1);
    let mut visited = Vec::new();
    each(&map, |value, key, _| visited.push((*key, *value)));
    assert_eq!(
        visited,
        [("a", 1), ("b", 2)],
        "Maps should be iterated in the order of their own iterator."
    );

    let value = object! { "x" => 1, "y" => "two" };
    let mut visited = Vec::new();
    each(&value, |item, key, _| visited.push((key.to_string(), item.clone())));
    assert_eq!(
        visited,
        [("x".to_owned(), Value::from(1)), ("y".to_owned(), Value::from("two"))],
        "Objects should be iterated in insertion order."
    );

    let mut count = 0;
    each(&Value::from(5), |_, _, _| count += 1);
    assert_eq!(count, 0, "Scalar values have no entries.");
}

#[test]
fn test_index_of() {
    let seq = [1, 2, 3, 2];
    assert_eq!(index_of(&seq, &2), Some(1), "The first matching index should be returned.");
    assert_eq!(index_of(&seq, &4), None);

    let values = [Value::from(1), Value::from("1")];
    assert_eq!(
        index_of(&values, &Value::from("1")),
        Some(1),
        "Equality should be strict, without coercion."
    );
    assert_eq!(index_of(&[Value::Number(f64::NAN)], &Value::Number(f64::NAN)), None);
}

#[test]
fn test_filter_and_reject() {
    let seq = [1, 2, 3, 4, 5, 6];
    assert_eq!(filter(&seq, |n| n % 2 == 0), [2, 4, 6]);
    assert_eq!(reject(&seq, |n| n % 2 == 0), [1, 3, 5]);
    assert_eq!(
        filter(&seq, |n| n % 3),
        [1, 2, 4, 5],
        "Predicates should be able to return any truthy value."
    );

    let values = [Value::Null, Value::from(0), Value::from("a"), Value::from(""), array![]];
    assert_eq!(
        filter(&values, |v| v.clone()),
        [Value::from("a"), array![]],
        "Only truthy values should pass."
    );
    assert!(filter(&seq, |_| false).is_empty());
    assert_eq!(reject(&seq, |_| false), seq);
}

#[test]
fn test_uniq() {
    assert_eq!(uniq(&[1, 2, 1, 3, 1, 4]), [1, 2, 3, 4]);
    assert_eq!(
        uniq(&["b", "a", "b", "c", "a"]),
        ["b", "a", "c"],
        "The first occurrence of each element should be kept, in order."
    );
    assert_eq!(uniq::<i32>(&[]), [0; 0]);
}

#[test]
fn test_map() {
    let seq = vec![1, 2, 3];
    assert_eq!(map(&seq, |n| n * 2), [2, 4, 6]);
    assert_eq!(seq, [1, 2, 3], "map shouldn't modify its input.");
    assert_eq!(map(&seq, |n| n.to_string()), ["1", "2", "3"]);

    let mut seq = vec![1, 2, 3];
    assert_eq!(*map_in_place(&mut seq, |n| n * 3), [3, 6, 9]);
    assert_eq!(seq, [3, 6, 9], "map_in_place should overwrite its input.");
}

#[test]
fn test_pluck() {
    assert_eq!(
        pluck(&people(), "name"),
        [Some(Value::from("moe")), Some(Value::from("curly")), Some(Value::from("larry"))]
    );
    assert_eq!(
        pluck(&people(), "age"),
        [Some(Value::from(30)), Some(Value::from(50)), None],
        "Missing properties should be None."
    );

    let maps = [HashMap::from([("a".to_owned(), 1)]), HashMap::new()];
    assert_eq!(pluck(&maps, "a"), [Some(1), None]);
}

#[test]
fn test_invoke() {
    let lists = [array![5, 1, 7], array![3, 2, 1]];
    assert_eq!(
        invoke_method(&lists, "sort", &[]),
        Ok(vec![array![1, 5, 7], array![1, 2, 3]])
    );
    assert_eq!(
        invoke_method(&[Value::from("a"), Value::from("b")], "toUpperCase", &[]),
        Ok(vec![Value::from("A"), Value::from("B")])
    );
    assert_eq!(
        invoke_method(&lists, "join", &[Value::from("-")]),
        Ok(vec![Value::from("5-1-7"), Value::from("3-2-1")]),
        "Arguments should be passed to every invocation."
    );
    assert!(matches!(
        invoke_method(&[Value::from("a"), Value::from(1)], "toUpperCase", &[]),
        Err(MethodError::ReceiverMismatch(_))
    ));

    let upper = invoke(&["dog", "cat"], |s| s.to_uppercase());
    assert_eq!(upper, ["DOG", "CAT"], "Functions should be called with each element.");
}

#[test]
fn test_reduce() {
    let seq = [1, 2, 3];
    assert_eq!(reduce(&seq, |acc, n| acc + n, Some(10)), Some(16));
    assert_eq!(
        reduce(&seq, |acc, n| acc * n, None),
        Some(6),
        "Without an initial value, the first item should be the seed."
    );
    assert_eq!(reduce::<[i32], _>(&[], |acc, n| acc + n, None), None);
    assert_eq!(
        reduce::<[i32], _>(&[], |acc, n| acc + n, Some(4)),
        Some(4),
        "The initial value should be returned for an empty collection."
    );

    let map = BTreeMap::from([("a", 1), ("b", 2)]);
    assert_eq!(reduce(&map, |acc, n| acc + n, None), Some(3));

    assert_eq!(fold(&["a", "bb", "ccc"], |acc, s| acc + s.len(), 0_usize), 6);
}

#[test]
fn test_contains() {
    assert!(contains(&[1, 2, 3], &2));
    assert!(!contains(&[1, 2, 3], &4));
    assert!(contains(&object! { "a" => 1 }, &Value::from(1)), "Objects should search values.");
    assert!(!contains(&object! { "a" => 1 }, &Value::from("a")), "Keys aren't values.");
}

#[test]
fn test_every() {
    let is_even = |n: &i32| n % 2 == 0;
    assert!(every(&[2, 4, 6], Some(is_even)));
    assert!(!every(&[2, 3, 6], Some(is_even)));
    assert!(every(&[0; 0], Some(is_even)), "An empty collection should pass.");
    assert!(
        every(&[1, 3], None::<fn(&i32) -> bool>),
        "A missing predicate should pass."
    );
    assert!(every(&[Value::from(1), Value::from("x")], Some(|v: &Value| v.clone())));
    assert!(!every(&[Value::from(1), Value::Null], Some(|v: &Value| v.clone())));
}

#[test]
fn test_some() {
    let is_even = |n: &i32| n % 2 == 0;
    assert!(some(&[1, 3, 4], is_even));
    assert!(!some(&[1, 3, 5], is_even));
    assert!(!some(&[0; 0], |_: &i32| true), "An empty collection should never pass.");

    assert!(some_truthy(&[0, 0, 1]));
    assert!(!some_truthy(&[0, 0, 0]));
    assert!(some_truthy(&array![Value::Null, "yes"]));
    assert!(!some_truthy(&array![Value::Null, false, ""]));
}

proptest! {
    #[test]
    fn prop_first_matches_first_n(seq in prop::collection::vec(any::<i32>(), 1..20)) {
        prop_assert_eq!(first(&seq), first_n(&seq, 1).first());
    }

    #[test]
    fn prop_index_of_agrees_with_contains(
        seq in prop::collection::vec(0..10_i32, 0..20),
        target in 0..10_i32,
    ) {
        prop_assert_eq!(index_of(&seq, &target).is_none(), !contains(&seq, &target));
    }

    #[test]
    fn prop_filter_and_reject_partition(seq in prop::collection::vec(any::<i32>(), 0..30)) {
        let predicate = |n: &i32| n % 3 == 0;
        let kept = filter(&seq, predicate);
        let rejected = reject(&seq, predicate);

        prop_assert!(kept.iter().all(|n| !rejected.contains(n)));

        let mut joined = [kept, rejected].concat();
        let mut sorted = seq.clone();
        joined.sort();
        sorted.sort();
        prop_assert_eq!(joined, sorted);
    }

    #[test]
    fn prop_uniq_removes_duplicates_only(
        seq in prop::collection::vec(0..8_i32, 0..30),
        probe in 0..10_i32,
    ) {
        let unique = uniq(&seq);
        for (i, item) in unique.iter().enumerate() {
            prop_assert!(!unique[i + 1..].contains(item));
        }
        prop_assert_eq!(contains(&unique, &probe), contains(&seq, &probe));
    }
}
