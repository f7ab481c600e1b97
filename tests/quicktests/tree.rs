use linked_ds::tree::{Node, Replacement, Tree};

use std::collections::HashSet;

use crate::init_tracing;

/// Checks the BST invariant for every node below `node`.
fn is_ordered(node: Option<&Node<i8>>, lower: Option<i8>, upper: Option<i8>) -> bool {
    match node {
        None => true,
        Some(n) => {
            let v = *n.value();
            lower.map_or(true, |lower| lower < v)
                && upper.map_or(true, |upper| v < upper)
                && is_ordered(n.left(), lower, Some(v))
                && is_ordered(n.right(), Some(v), upper)
        }
    }
}

fn replacement(use_successor: bool) -> Replacement {
    if use_successor {
        Replacement::Successor
    } else {
        Replacement::Predecessor
    }
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());

    is_ordered(tree.head(), None, None)
        && xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>, use_successor: bool) -> bool {
    init_tracing();

    let mut tree = Tree::from_values(xs.iter().copied());
    for delete in &deletes {
        tree.delete_with(delete, replacement(use_successor));
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    let mut still_present = xs.iter().filter(|x| !deleted.contains(x));

    is_ordered(tree.head(), None, None)
        && deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());

    tree.min().map(Node::value) == xs.iter().min() && tree.max().map(Node::value) == xs.iter().max()
}

#[quickcheck]
fn searches_agree_with_find(xs: Vec<i8>, needle: i8) -> bool {
    let tree = Tree::from_values(xs);
    let found = tree.find(&needle).map(|n| n as *const Node<i8>);

    tree.depth_first_search(&needle).map(|n| n as *const Node<i8>) == found
        && tree.breadth_first_search(&needle).map(|n| n as *const Node<i8>) == found
}

#[test]
fn initialize_with_multiple_items() {
    let tree = Tree::from_values(vec![50, 25, 75, 100]);
    let head = tree.head().unwrap();

    assert_eq!(head.value(), &50);
    assert_eq!(head.left().map(Node::value), Some(&25));
    assert_eq!(head.right().map(Node::value), Some(&75));
    assert_eq!(head.right().and_then(Node::right).map(Node::value), Some(&100));
}

#[test]
fn delete_only_value_empties_tree() {
    init_tracing();

    let mut tree = Tree::from_values(vec![5]);
    tree.delete(&5);

    assert!(tree.head().is_none());
}

#[test]
fn strings_are_ordered_lexicographically() {
    let mut tree = Tree::from_values(vec!["m", "c", "x", "a", "e"]);
    tree.delete(&"c");

    assert_eq!(tree.min().map(Node::value), Some(&"a"));
    assert_eq!(tree.max().map(Node::value), Some(&"x"));
    assert_eq!(tree.head().and_then(Node::left).map(Node::value), Some(&"a"));
}
