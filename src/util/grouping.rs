//! Order-preserving grouping.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Split `items` into groups keyed by `key`, preserving the first-seen order
/// of keys and the relative order of items within each group.
#[must_use]
pub fn group_by_key<T, K, F>(
    items: impl IntoIterator<Item = T>,
    key: F,
) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    for item in items {
        let k = key(&item);
        if let Some(&i) = index.get(&k) {
            groups[i].1.push(item);
        } else {
            let _ = index.insert(k.clone(), groups.len());
            groups.push((k, vec![item]));
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_group_order() {
        let items = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4)];
        let groups = group_by_key(items, |&(k, _)| k);
        let keys: Vec<&str> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_within_group_order_preserved() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let groups = group_by_key(items, |&(k, _)| k);
        assert_eq!(groups[0].1, vec![("a", 1), ("a", 3)]);
        assert_eq!(groups[1].1, vec![("b", 2)]);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_key(Vec::<(&str, i32)>::new(), |&(k, _)| k);
        assert!(groups.is_empty());
    }
}
