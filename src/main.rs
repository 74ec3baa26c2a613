extern crate avl_collections;

use avl_collections::avl_tree::AvlSet;

fn main() {
    let keys = [10, 20, 30, 40, 50, 25];

    let mut set = AvlSet::new();
    for &key in &keys {
        set.insert(key);
    }

    let inorder = set
        .iter()
        .map(|key| key.to_string())
        .collect::<Vec<String>>();
    println!("In-order traversal: {}", inorder.join(" "));

    let levelorder = set
        .level_order()
        .map(|key| key.to_string())
        .collect::<Vec<String>>();
    println!("Level-order traversal: {}", levelorder.join(" "));

    println!("Visual tree (rotated): {}", set.diagram());
}
