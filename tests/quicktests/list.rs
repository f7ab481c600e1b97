use linked_ds::list::{LinkedList, Node};

use crate::init_tracing;

/// Head-to-tail order of a list built from `xs`.
fn reversed(xs: &[i8]) -> Vec<i8> {
    xs.iter().rev().copied().collect()
}

fn to_vec(list: &LinkedList<i8>) -> Vec<i8> {
    let mut values = Vec::new();
    list.for_each(|v, _, _| values.push(*v));
    values
}

#[quickcheck]
fn map_identity(xs: Vec<i8>) -> bool {
    let list = LinkedList::from_values(xs);

    list.map(|v, _, _| *v) == list
}

#[quickcheck]
fn filter_everything(xs: Vec<i8>) -> bool {
    let list = LinkedList::from_values(xs);

    list.filter(|_, _, _| true) == list && list.filter(|_, _, _| false).is_empty()
}

#[quickcheck]
fn filter_keeps_relative_order(xs: Vec<i8>) -> bool {
    let list = LinkedList::from_values(xs.iter().copied());
    let expected: Vec<i8> = reversed(&xs).into_iter().filter(|x| x % 2 == 0).collect();

    to_vec(&list.filter(|v, _, _| v % 2 == 0)) == expected
}

#[quickcheck]
fn reduce_and_fold_sum(xs: Vec<i8>) -> bool {
    let list = LinkedList::from_values(xs.iter().map(|x| i64::from(*x)));
    let sum: i64 = xs.iter().map(|x| i64::from(*x)).sum();

    let reduced = list.reduce(|acc, v, _, _| acc + v);
    let folded = list.fold(5, |acc, v, _, _| acc + v);
    let expected = if xs.is_empty() { None } else { Some(sum) };

    reduced == expected && folded == sum + 5
}

#[quickcheck]
fn length_matches_reachable_nodes(xs: Vec<i8>, removes: Vec<i8>, shifts: u8) -> bool {
    init_tracing();

    let mut list = LinkedList::from_values(xs);
    for remove in &removes {
        list.remove(remove);
    }
    for _ in 0..shifts % 8 {
        list.remove_from_head();
    }

    let reachable = std::iter::successors(list.head(), |n| n.next()).count();
    reachable == list.len()
}

#[quickcheck]
fn get_matches_position(xs: Vec<i8>, index: usize) -> bool {
    let list = LinkedList::from_values(xs.iter().copied());
    let expected = reversed(&xs);

    list.get(index).map(Node::value) == expected.get(index)
        && (0..expected.len()).all(|i| list.get(i).map(Node::value) == expected.get(i))
}

#[test]
fn reduce_numbers() {
    let list = LinkedList::from_values(vec![1, 2, 3, 4]);

    assert_eq!(list.reduce(|acc, cur, _, _| acc + cur), Some(10));
    assert_eq!(list.fold(5, |acc, cur, _, _| acc + cur), 15);
}

#[test]
fn get_from_head() {
    let list = LinkedList::from_values(vec![1, 2, 3]);

    assert_eq!(list.get(0).map(Node::value), Some(&3));
    assert!(list.get(3).is_none());
}

#[test]
fn remove_in_a_chain() {
    init_tracing();

    let mut list = LinkedList::from_values(vec!["one", "two", "three", "four"]);
    list.remove(&"two").remove(&"one").remove(&"three").remove(&"four");

    assert!(list.head().is_none());
    assert_eq!(list.len(), 0);
    assert_eq!(list.remove_from_head(), None);
}
