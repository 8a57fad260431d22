//! An unbalanced Binary Search Tree (BST) container for totally ordered elements.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores elements in `Node`s, each of which has up to two child `Node`s.
//! The invariant this crate maintains is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold elements less than its own.
//! 2. For every `Node`, all the `Node`s in its right subtree hold elements greater than or
//!    equal to its own. Equal elements are allowed and always placed to the right.
//!
//! Searching takes `O(depth)`. Nothing is rebalanced, so the shape of an [`OrderedTree`] (and
//! therefore its depth) depends entirely on the order elements were inserted in. Inserting
//! elements in sorted order produces a tree that is really a linked list.
//!
//! Elements are visited with callbacks in pre-order, in-order, or post-order (see [`Order`]).
//! An in-order walk yields the elements sorted.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree: OrderedTree<i32> = [18, 11, 8, 5, 9, 16, 13, 78, 65, 90].into_iter().collect();
//!
//! let mut sorted = Vec::new();
//! tree.in_order(|x| sorted.push(*x));
//! assert_eq!(sorted, [5, 8, 9, 11, 13, 16, 18, 65, 78, 90]);
//! assert_eq!(tree.height(), 4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod traversal;
mod tree;


pub use error::RemoveError;
pub use traversal::Order;
pub use tree::OrderedTree;
