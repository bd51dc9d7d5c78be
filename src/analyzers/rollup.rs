//! Multi-key grouping with a leaf reducer.
//!
//! Every map produced here iterates in key first-occurrence order, which the
//! view builders rely on for deterministic output.

use indexmap::IndexMap;
use std::hash::Hash;

/// Records grouped under one key, in input order.
pub type Groups<'a, K, T> = IndexMap<K, Vec<&'a T>>;

/// One-level rollup: key to reduced value.
pub type Rollup<K, V> = IndexMap<K, V>;

/// Two-level rollup: outer key to inner key to reduced value.
pub type NestedRollup<K1, K2, V> = IndexMap<K1, IndexMap<K2, V>>;

/// Groups `items` by `key`, keeping each group's members in input order.
pub fn group<'a, T, K, I, F>(items: I, key: F) -> Groups<'a, K, T>
where
    T: 'a,
    K: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> K,
{
    let mut groups: Groups<'a, K, T> = IndexMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// Groups `items` by `key` and reduces each group with `reduce`.
///
/// Empty input gives an empty rollup.
pub fn rollup<'a, T, K, V, I, F, R>(items: I, key: F, reduce: R) -> Rollup<K, V>
where
    T: 'a,
    K: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> K,
    R: Fn(&[&'a T]) -> V,
{
    group(items, key)
        .into_iter()
        .map(|(k, members)| {
            let value = reduce(&members);
            (k, value)
        })
        .collect()
}

/// Groups `items` by `outer`, then each group by `inner`, and reduces the
/// innermost groups with `reduce`.
pub fn rollup2<'a, T, K1, K2, V, I, F1, F2, R>(
    items: I,
    outer: F1,
    inner: F2,
    reduce: R,
) -> NestedRollup<K1, K2, V>
where
    T: 'a,
    K1: Hash + Eq,
    K2: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    F1: Fn(&'a T) -> K1,
    F2: Fn(&'a T) -> K2,
    R: Fn(&[&'a T]) -> V,
{
    group(items, outer)
        .into_iter()
        .map(|(k, members)| (k, rollup(members, &inner, &reduce)))
        .collect()
}
