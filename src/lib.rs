//! This crate exposes two classic linked data structures mostly for educational purposes: a
//! singly linked list and a binary search tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`tree::Tree`] here never rebalances itself
//! so inserting values in sorted order gives it a height of `N`.
//!
//! ## Linked List
//!
//! A singly linked list is a chain of `Node`s where each one stores a value and owns the next
//! `Node`. Adding and removing at the head is `O(1)`; everything else walks the chain. The
//! [`list::LinkedList`] also offers `map`, `filter`, `reduce`, `fold` and `for_each` which
//! never modify the list they're called on.
//!
//! Neither structure reports errors. A missing value, an empty container or an index past the
//! end all come back as `None`, and removing something that isn't there does nothing.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod list;
pub mod tree;
