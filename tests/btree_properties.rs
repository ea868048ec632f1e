use std::collections::BTreeMap;

use dsa_collections::{BTree, Error};
use proptest::prelude::*;

fn check_against_model(tree: &BTree<u32>, model: &BTreeMap<String, u32>) {
    assert_eq!(tree.size(), model.len());
    assert_eq!(tree.is_empty(), model.is_empty());
    for (key, value) in model {
        assert_eq!(tree.get(key).unwrap(), value);
    }
    assert!(tree.iter().map(|(key, value)| (key.to_owned(), *value)).eq(model.clone()));
}

/// Smallest height whose full tree holds `size` keys: `(2t + 1)^(h + 1) - 1 >= size`
fn min_height(size: usize, order: usize) -> usize {
    let fanout = 2 * order + 1;
    let mut most = fanout - 1;
    let mut height = 0;
    while most < size {
        most = (most + 1) * fanout - 1;
        height += 1;
    }
    height
}

/// Largest height whose sparsest tree fits in `size` keys: `2(t + 1)^h - 1 <= size`
fn max_height(size: usize, order: usize) -> usize {
    let mut fewest = 2 * (order + 1) - 1;
    let mut height = 0;
    while fewest <= size {
        fewest = (fewest + 1) * (order + 1) - 1;
        height += 1;
    }
    height
}

proptest! {
    #[test]
    fn tree_matches_std_btree_map(
        order in 1usize..5,
        entries in prop::collection::vec(("[a-z]{1,4}", any::<u32>()), 0..300),
    ) {
        let mut tree = BTree::new(order).unwrap();
        let mut model = BTreeMap::new();

        for (key, value) in entries {
            let result = tree.insert(key.clone(), value);
            if model.contains_key(&key) {
                prop_assert!(matches!(result, Err(Error::KeyExists(_))));
            } else {
                prop_assert!(result.is_ok());
                model.insert(key, value);
            }
        }

        check_against_model(&tree, &model);
        prop_assert!(tree.height() >= min_height(tree.size(), order));
        prop_assert!(tree.height() <= max_height(tree.size(), order));
    }

    #[test]
    fn missing_keys_are_not_found(
        keys in prop::collection::hash_set("[a-m]{1,3}", 0..80),
        absent in "[n-z]{1,3}",
    ) {
        let mut tree = BTree::new(2).unwrap();
        for key in &keys {
            tree.insert(key.as_str(), 0).unwrap();
        }
        prop_assert!(!tree.contains_key(&absent));
        prop_assert!(matches!(tree.get(&absent), Err(Error::KeyNotFound(_))));
    }
}
