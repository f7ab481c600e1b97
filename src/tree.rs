//! An owned, unbalanced BST. Every node exclusively owns its two children through a `Box` so
//! there are no parent pointers or reference counts to keep in sync. Nothing rebalances the tree,
//! so inserting values in sorted order degrades it into a list.
//!
//! # Examples
//!
//! ```
//! use linked_ds::tree::{Replacement, Tree};
//!
//! let mut tree = Tree::from_values(vec![50, 25, 75, 100]);
//!
//! assert_eq!(tree.head().map(|n| *n.value()), Some(50));
//! assert_eq!(tree.min().map(|n| *n.value()), Some(25));
//! assert_eq!(tree.max().map(|n| *n.value()), Some(100));
//!
//! // Inserting a value that's already present does nothing.
//! tree.insert(vec![75]);
//! assert_eq!(tree.find(&75).and_then(|n| n.right()).map(|n| *n.value()), Some(100));
//!
//! // Deleting a node with two children overwrites it with a replacement.
//! tree.insert(vec![60]).delete_with(&75, Replacement::Successor);
//! assert_eq!(tree.find(&75).map(|n| *n.value()), None);
//! assert_eq!(tree.head().and_then(|n| n.right()).map(|n| *n.value()), Some(100));
//!
//! // Deleting something that isn't there fails silently.
//! tree.delete(&404);
//! assert_eq!(tree.find(&60).map(|n| *n.value()), Some(60));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter;

use tracing::trace;

type Link<T> = Option<Box<Node<T>>>;

/// Which value is promoted into a deleted node that has two children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Replacement {
    /// The in-order predecessor, i.e. the largest value in the left subtree.
    Predecessor,
    /// The in-order successor, i.e. the smallest value in the right subtree.
    Successor,
}

impl Default for Replacement {
    fn default() -> Self {
        Self::Predecessor
    }
}

/// A Binary Search Tree holding unique values. Values are ordered by their `Ord` implementation.
/// Missing values are reported with `None` and deleting a missing value is a no-op.
pub struct Tree<T> {
    head: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping the boxes recursively would overflow the stack on a degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.head.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// A step of [`Tree`]'s clone: `Enter` queues a node's children and `Build` assembles the node
/// once both of its subtrees have been cloned.
enum Visit<'a, T> {
    Enter(&'a Node<T>),
    Build(&'a Node<T>),
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    // Cloned subtrees are built bottom up on `built` instead of recursing once per level.
    fn clone(&self) -> Self {
        let mut work: Vec<Visit<'_, T>> = self.head().map(Visit::Enter).into_iter().collect();
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        while let Some(visit) = work.pop() {
            match visit {
                Visit::Enter(node) => {
                    work.push(Visit::Build(node));
                    work.extend(node.left().map(Visit::Enter));
                    work.extend(node.right().map(Visit::Enter));
                }
                Visit::Build(node) => {
                    // The left subtree was entered last so it was finished last.
                    let left = if node.left.is_some() { built.pop() } else { None };
                    let right = if node.right.is_some() { built.pop() } else { None };
                    built.push(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }
        Self { head: built.pop() }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.in_order().map(|node| &node.value))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Builds a tree by inserting each of the values in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![50, 25, 75, 100]);
    /// let head = tree.head().unwrap();
    ///
    /// assert_eq!(head.value(), &50);
    /// assert_eq!(head.left().map(|n| *n.value()), Some(25));
    /// assert_eq!(head.right().map(|n| *n.value()), Some(75));
    /// assert_eq!(head.right().and_then(|n| n.right()).map(|n| *n.value()), Some(100));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        tree.insert(values);
        tree
    }

    /// The root node of the tree, if there is one.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts each value by walking down from the root until an empty slot is found. A value
    /// that is already in the tree is skipped so the first insertion wins.
    pub fn insert<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        for value in values {
            self.insert_one(value);
        }
        self
    }

    /// Finds the node holding the given value by descending from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut link = self.head();
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// The leftmost node, holding the smallest value.
    pub fn min(&self) -> Option<&Node<T>> {
        self.head().map(Node::leftmost)
    }

    /// The rightmost node, holding the largest value.
    pub fn max(&self) -> Option<&Node<T>> {
        self.head().map(Node::rightmost)
    }

    /// Deletes the node holding `value`, promoting the in-order predecessor when that node has
    /// two children. See [`Tree::delete_with`].
    pub fn delete(&mut self, value: &T) -> &mut Self
    where
        T: Ord,
    {
        self.delete_with(value, Replacement::default())
    }

    /// Deletes the node holding `value`.
    ///
    /// A node without children is detached from its parent and a node with one child is replaced
    /// by that child. A node with two children stays where it is: the `replacement` is removed
    /// from its own subtree and its value overwrites the deleted one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::tree::{Replacement, Tree};
    ///
    /// let mut tree = Tree::from_values(vec![5, 3, 8, 7, 9]);
    /// tree.delete_with(&5, Replacement::Successor);
    ///
    /// assert_eq!(tree.head().map(|n| *n.value()), Some(7));
    /// assert!(tree.find(&5).is_none());
    /// ```
    pub fn delete_with(&mut self, value: &T, replacement: Replacement) -> &mut Self
    where
        T: Ord,
    {
        let link = Node::locate(&mut self.head, value);
        let Some(node) = link else {
            return self;
        };

        if node.left.is_some() && node.right.is_some() {
            trace!(?replacement, "deleting node with two children");
            let promoted = match replacement {
                Replacement::Predecessor => Node::take_max(&mut node.left),
                Replacement::Successor => Node::take_min(&mut node.right),
            };
            if let Some(promoted) = promoted {
                node.value = promoted;
            }
        } else {
            let child = node.left.take().or_else(|| node.right.take());
            let children = usize::from(child.is_some());
            trace!(children, "deleting node");
            *link = child;
        }
        self
    }

    /// Searches the tree depth first (node, then left subtree, then right subtree) comparing
    /// every node for equality instead of using the ordering.
    pub fn depth_first_search(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.pre_order().find(|node| node.value == *value)
    }

    /// Searches the tree level by level comparing every node for equality instead of using the
    /// ordering.
    pub fn breadth_first_search(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        let mut queue: VecDeque<&Node<T>> = self.head().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            if node.value == *value {
                return Some(node);
            }
            queue.extend(node.left());
            queue.extend(node.right());
        }
        None
    }

    /// Walks the nodes root first, then the left subtree, then the right subtree.
    fn pre_order(&self) -> impl Iterator<Item = &Node<T>> {
        let mut stack: Vec<&Node<T>> = self.head().into_iter().collect();
        iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right());
            stack.extend(node.left());
            Some(node)
        })
    }

    /// Walks the nodes in ascending order.
    fn in_order(&self) -> impl Iterator<Item = &Node<T>> {
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut next = self.head();
        iter::from_fn(move || {
            while let Some(node) = next {
                stack.push(node);
                next = node.left();
            }
            let node = stack.pop()?;
            next = node.right();
            Some(node)
        })
    }

    fn insert_one(&mut self, value: T)
    where
        T: Ord,
    {
        let link = Node::locate(&mut self.head, &value);
        if link.is_none() {
            trace!("attaching new node");
            *link = Some(Box::new(Node::new(value)));
        }
    }
}

/// A `Node` holds a single value and up to two children. Everything in its left subtree is
/// smaller than its value and everything in its right subtree is larger.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
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
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Returns the link that holds `value`, or the empty link where it would be attached.
    fn locate<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        while let Some(ordering) = link.as_ref().map(|node| value.cmp(&node.value)) {
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, found) => return found,
            };
        }
        link
    }

    /// Unlinks the largest node of the subtree and returns its value. That node has no right
    /// child so its left child takes its place.
    fn take_max(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref().map_or(false, |node| node.right.is_some()) {
            link = &mut link.as_mut()?.right;
        }
        let node = link.take()?;
        let Node { value, left, .. } = *node;
        *link = left;
        Some(value)
    }

    /// Mirror of [`Node::take_max`].
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref().map_or(false, |node| node.left.is_some()) {
            link = &mut link.as_mut()?.left;
        }
        let node = link.take()?;
        let Node { value, right, .. } = *node;
        *link = right;
        Some(value)
    }
}
