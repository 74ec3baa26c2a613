#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
