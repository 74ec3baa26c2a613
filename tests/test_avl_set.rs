extern crate avl_collections;
extern crate rand;

use avl_collections::avl_tree::AvlSet;
use rand::Rng;

#[test]
fn test_random_inserts_against_sorted_vec() {
    let mut rng = rand::thread_rng();
    let mut set = AvlSet::new();
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u32>();

        if set.insert(key) {
            expected.push(key);
        }
    }

    expected.sort();

    let actual = set.iter().cloned().collect::<Vec<u32>>();
    assert_eq!(actual.len(), expected.len());
    assert_eq!(actual, expected);
}

#[test]
fn test_duplicate_inserts_are_noops() {
    let mut rng = rand::thread_rng();
    let mut set = AvlSet::new();
    let keys = (0..1000).map(|_| rng.gen::<u16>()).collect::<Vec<u16>>();

    for &key in &keys {
        set.insert(key);
    }
    let len = set.len();
    let inorder = set.iter().cloned().collect::<Vec<u16>>();

    for &key in &keys {
        assert!(!set.insert(key));
    }

    assert_eq!(set.len(), len);
    assert_eq!(set.iter().cloned().collect::<Vec<u16>>(), inorder);
}

#[test]
fn test_level_order_visits_every_key() {
    let mut rng = rand::thread_rng();
    let mut set = AvlSet::new();
    for _ in 0..1000 {
        set.insert(rng.gen::<u32>());
    }

    let mut keys = set.level_order().cloned().collect::<Vec<u32>>();
    assert_eq!(keys.len(), set.len());

    keys.sort();
    assert_eq!(keys, set.iter().cloned().collect::<Vec<u32>>());
}
