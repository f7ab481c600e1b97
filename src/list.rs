//! A singly linked list. Values are pushed onto and popped off of the head, and every node owns
//! the rest of the chain through its `next` link.
//!
//! The functional operations ([`map`][LinkedList::map], [`filter`][LinkedList::filter],
//! [`reduce`][LinkedList::reduce], [`fold`][LinkedList::fold] and
//! [`for_each`][LinkedList::for_each]) never modify the list they're called on. Their callbacks
//! receive the current value, its zero-based position from the head and the list's head node.
//!
//! # Examples
//!
//! ```
//! use linked_ds::list::LinkedList;
//!
//! // Every value is pushed onto the head so the last one ends up first.
//! let mut list = LinkedList::from_values(vec![1, 2, 3, 4]);
//! assert_eq!(list.head().map(|n| *n.value()), Some(4));
//! assert_eq!(list.len(), 4);
//!
//! let doubled = list.map(|v, _, _| v * 2);
//! assert_eq!(doubled, LinkedList::from_values(vec![2, 4, 6, 8]));
//!
//! assert_eq!(list.reduce(|acc, v, _, _| acc + v), Some(10));
//! assert_eq!(list.fold(5, |acc, v, _, _| acc + v), 15);
//!
//! list.remove(&3).remove(&42);
//! assert_eq!(list.remove_from_head(), Some(4));
//! assert_eq!(list.get(0).map(|n| *n.value()), Some(2));
//! assert_eq!(list.len(), 2);
//! ```

use std::fmt;
use std::iter;

use tracing::trace;

type Link<T> = Option<Box<Node<T>>>;

/// A singly linked list that keeps track of its own length.
pub struct LinkedList<T> {
    head: Link<T>,
    length: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    // Unlink node by node. Letting the boxes drop each other recurses once per node.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self::from_forward(self.nodes().map(|node| node.value.clone()))
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self
                .nodes()
                .zip(other.nodes())
                .all(|(a, b)| a.value == b.value)
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes().map(|node| &node.value))
            .finish()
    }
}

impl<T> LinkedList<T> {
    /// Generates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Builds a list by adding each of the values to the head in order, so the last value
    /// becomes the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::list::LinkedList;
    ///
    /// let list = LinkedList::from_values(vec!["one", "two", "three"]);
    ///
    /// assert_eq!(format!("{:?}", list), r#"["three", "two", "one"]"#);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.add_to_head(values);
        list
    }

    /// How many nodes are reachable from the head.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The first node of the list, if there is one.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Pushes each value onto the head of the list. Adding `(a, b, c)` leaves the list as
    /// `c, b, a`.
    pub fn add_to_head<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            let next = self.head.take();
            self.head = Some(Box::new(Node { value, next }));
            self.length += 1;
        }
        self
    }

    /// Detaches the head node and returns its value, or `None` if the list is empty.
    pub fn remove_from_head(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.length -= 1;
        trace!(length = self.length, "removed head node");
        Some(value)
    }

    /// Finds the first node holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.nodes().find(|node| node.value == *value)
    }

    /// Removes the first node holding a value equal to `value`. Nothing happens if there isn't
    /// one.
    pub fn remove(&mut self, value: &T) -> &mut Self
    where
        T: PartialEq,
    {
        if self.head.as_ref().map_or(false, |node| node.value == *value) {
            self.remove_from_head();
            return self;
        }

        let link = Node::locate(&mut self.head, value);
        if let Some(node) = link.take() {
            *link = node.next;
            self.length -= 1;
            trace!(length = self.length, "unlinked node");
        }
        self
    }

    /// The node `index` steps from the head, or `None` if the list isn't that long.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::list::LinkedList;
    ///
    /// let list = LinkedList::from_values(vec![1, 2, 3]);
    ///
    /// assert_eq!(list.get(0).map(|n| *n.value()), Some(3));
    /// assert!(list.get(3).is_none());
    /// ```
    pub fn get(&self, index: usize) -> Option<&Node<T>> {
        if index >= self.length {
            return None;
        }
        self.nodes().nth(index)
    }

    /// Creates a new list holding `f(value, index, head)` for every value, in the same order.
    pub fn map<U, F>(&self, mut f: F) -> LinkedList<U>
    where
        F: FnMut(&T, usize, &Node<T>) -> U,
    {
        let Some(head) = self.head() else {
            return LinkedList::new();
        };
        LinkedList::from_forward(
            self.nodes()
                .enumerate()
                .map(|(index, node)| f(&node.value, index, head)),
        )
    }

    /// Creates a new list holding copies of the values for which `f(value, index, head)` is
    /// `true`, in the same order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::list::LinkedList;
    ///
    /// let list = LinkedList::from_values(vec![1, 2, 3, 4, 5, 3, 2, 1, 6]);
    /// let filtered = list.filter(|v, _, _| *v > 3);
    ///
    /// assert_eq!(format!("{:?}", filtered), "[6, 5, 4]");
    /// assert_eq!(list.len(), 9);
    /// ```
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, usize, &Node<T>) -> bool,
    {
        let Some(head) = self.head() else {
            return Self::new();
        };
        Self::from_forward(
            self.nodes()
                .enumerate()
                .filter(|&(index, node)| f(&node.value, index, head))
                .map(|(_, node)| node.value.clone()),
        )
    }

    /// Folds the list from head to tail using the head's value as the starting accumulator. The
    /// first call therefore sees the second value at index 1. Returns `None` for an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::list::LinkedList;
    ///
    /// let letters = vec!["n", "a", "m", "u", "N"].into_iter().map(String::from);
    /// let list = LinkedList::from_values(letters);
    /// let word = list.reduce(|acc, v, _, _| acc + v);
    ///
    /// assert_eq!(word.as_deref(), Some("Numan"));
    /// ```
    pub fn reduce<F>(&self, mut f: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T, usize, &Node<T>) -> T,
    {
        let head = self.head()?;
        let seed = head.value.clone();
        Some(
            self.nodes()
                .enumerate()
                .skip(1)
                .fold(seed, |acc, (index, node)| f(acc, &node.value, index, head)),
        )
    }

    /// Folds the list from head to tail starting from `init`, so the first call sees the head's
    /// value at index 0. Returns `init` for an empty list.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize, &Node<T>) -> A,
    {
        let Some(head) = self.head() else {
            return init;
        };
        self.nodes()
            .enumerate()
            .fold(init, |acc, (index, node)| f(acc, &node.value, index, head))
    }

    /// Calls `f(value, index, head)` once for every value from head to tail.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, &Node<T>),
    {
        let Some(head) = self.head() else {
            return;
        };
        for (index, node) in self.nodes().enumerate() {
            f(&node.value, index, head);
        }
    }

    /// Builds a list that keeps the order of `values`, appending at the tail.
    fn from_forward<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in values {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            list.length += 1;
        }
        list
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        iter::successors(self.head(), |node| node.next())
    }

}

/// A `Node` holds a single value and owns the rest of the list after it.
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T> Node<T> {
    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node after this one.
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Returns the link that holds the first node equal to `value`, or the empty link at the end
    /// of the list.
    fn locate<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
    where
        T: PartialEq,
    {
        while let Some(found) = link.as_ref().map(|node| node.value == *value) {
            link = match (found, link) {
                (false, Some(node)) => &mut node.next,
                (_, found) => return found,
            };
        }
        link
    }
}
