use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::fmt;

pub type Tree<T> = Option<Box<Node<T>>>;

// columns of indentation per level in the rotated diagram
const DIAGRAM_GAP: usize = 5;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `child_ord` is the ordering of the inserted key against the child the key descended into,
// captured before the descent. A subtree that was rotated during the descent cannot have grown,
// so whenever this node is out of balance that child is untouched and the comparison still
// classifies the imbalance.
fn rebalance<T>(tree: &mut Tree<T>, child_ord: Option<Ordering>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    node.update();

    let balance = node.balance();
    if balance > 1 {
        match child_ord {
            // left-left
            Some(Ordering::Less) => node = rotate_right(node),
            // left-right
            Some(Ordering::Greater) => {
                if let Some(child) = node.left.take() {
                    node.left = Some(rotate_left(child));
                }
                node = rotate_right(node);
            },
            _ => unreachable!(),
        }
    } else if balance < -1 {
        match child_ord {
            // right-right
            Some(Ordering::Greater) => node = rotate_left(node),
            // right-left
            Some(Ordering::Less) => {
                if let Some(child) = node.right.take() {
                    node.right = Some(rotate_right(child));
                }
                node = rotate_left(node);
            },
            _ => unreachable!(),
        }
    }

    *tree = Some(node);
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let child_ord = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let child_ord = node.left.as_ref().map(|child| key.cmp(&child.key));
                if !insert(&mut node.left, key) {
                    return false;
                }
                child_ord
            },
            Ordering::Greater => {
                let child_ord = node.right.as_ref().map(|child| key.cmp(&child.key));
                if !insert(&mut node.right, key) {
                    return false;
                }
                child_ord
            },
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    rebalance(tree, child_ord);
    true
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

// Renders the tree rotated 90 degrees: the right subtree above its parent, the left subtree
// below, indented proportionally to depth. Every node starts a new line.
pub fn diagram<T>(tree: &Tree<T>, depth: usize, out: &mut String)
where
    T: fmt::Display,
{
    if let Some(ref node) = tree {
        diagram(&node.right, depth + 1, out);
        out.push('\n');
        for _ in 0..depth * DIAGRAM_GAP {
            out.push(' ');
        }
        out.push_str(&node.key.to_string());
        diagram(&node.left, depth + 1, out);
    }
}
