//! An unbalanced BST that owns its nodes through `Box`ed child slots. Every node has exactly one
//! owner (its parent's `left`/`right` slot or the tree's root slot) and there are no parent
//! pointers, so re-linking during removal is done by moving boxes between slots.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, RemoveError};
//!
//! let mut tree: OrderedTree<i32> = [18, 11, 78].into_iter().collect();
//!
//! assert!(tree.find(&11));
//! assert!(!tree.find(&19));
//!
//! // Removing hands the element back.
//! assert_eq!(tree.remove(&11), Ok(11));
//! assert_eq!(tree.remove(&11), Err(RemoveError::NotFound));
//!
//! let mut sorted = Vec::new();
//! tree.in_order(|x| sorted.push(*x));
//! assert_eq!(sorted, [18, 78]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::RemoveError;
use crate::traversal::{self, Order};

/// An owning child slot. `None` marks the empty pointer at the bottom of a subtree.
pub(crate) type Subtree<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding elements of a totally ordered type. Elements smaller than a
/// node go to its left, everything else (including equal elements) goes to its right. The shape
/// is purely a function of insertion order; nothing is ever rebalanced.
pub struct OrderedTree<T> {
    root: Subtree<T>,
    /// Depth of the deepest node ever inserted. Never lowered by [`OrderedTree::remove`].
    max_height: usize,
    len: usize,
}

/// A single element and its two owned subtrees.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    /// Distance from the root when the node was inserted (the root has depth 1). This is not
    /// refreshed when a removal moves the node.
    depth: usize,
    pub(crate) left: Subtree<T>,
    pub(crate) right: Subtree<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    /// Deep copies every node. The copy keeps the shape, the stored depths and the tracked
    /// height of the original.
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_subtree(&self.root),
            max_height: self.max_height,
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    // TODO stack based Debug, the derived `Node` impl recurses once per level
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root)
            .field("max_height", &self.max_height)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    /// Builds a tree by inserting each element in iteration order. No sorting happens first,
    /// so the order of the input decides the shape.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            max_height: 0,
            len: 0,
        }
    }

    /// The number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the depth of the deepest node ever inserted, or 0 for a tree that has never
    /// held anything.
    ///
    /// This is bookkeeping, not a walk of the current shape: removals never lower it, and nodes
    /// moved by a removal keep the depth they were inserted at. Use
    /// [`live_height`][Self::live_height] for the height of the tree as it is now.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 3);
    ///
    /// tree.remove(&3).unwrap();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.live_height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        self.max_height
    }

    /// Computes the number of levels in the tree's current shape. An empty tree has a height
    /// of 0 and a lone root has a height of 1.
    pub fn live_height(&self) -> usize {
        Node::subtree_height(&self.root)
    }

    /// Destroys every node and forgets the tracked height.
    pub fn clear(&mut self) {
        // Unlinking children before each node drops keeps list-shaped trees from recursing
        // once per level.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.max_height = 0;
        self.len = 0;
    }

    /// Visits each element, then its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
    /// let mut seen = Vec::new();
    /// tree.pre_order(|x| seen.push(*x));
    ///
    /// assert_eq!(seen, [2, 1, 3]);
    /// ```
    pub fn pre_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.traverse(Order::PreOrder, visit);
    }

    /// Visits the left subtree, then the element, then the right subtree. Elements come out in
    /// non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [2, 3, 1].into_iter().collect();
    /// let mut seen = Vec::new();
    /// tree.in_order(|x| seen.push(*x));
    ///
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.traverse(Order::InOrder, visit);
    }

    /// Visits the left subtree, then the right subtree, then the element.
    pub fn post_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.traverse(Order::PostOrder, visit);
    }

    /// Calls `visit` once for every element in the given [`Order`]. Nothing is visited for an
    /// empty tree.
    pub fn traverse<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&T),
    {
        traversal::walk(&self.root, order, &mut visit);
    }

    /// Inserts `element` into the tree. This always succeeds: an element equal to one already
    /// present is placed as though it were greater, so it ends up to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, element: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 1;
        while let Some(node) = slot {
            depth = node.depth + 1;
            slot = if element < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        trace!("attaching node at depth {}", depth);
        *slot = Some(Box::new(Node::new(element, depth)));
        self.max_height = self.max_height.max(depth);
        self.len += 1;
    }

    /// Returns whether some node holds an element equal to `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(90);
    ///
    /// assert!(tree.find(&90));
    /// assert!(!tree.find(&19));
    /// ```
    pub fn find(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match element.cmp(&node.data) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Deletes the first node on the search path whose element equals `element` and returns
    /// that element. The node's children are re-linked so the rest of the tree stays a valid
    /// BST. A node with two children is replaced by its in-order predecessor (the largest
    /// element of its left subtree).
    ///
    /// Moved nodes keep their stored depth and [`height`][Self::height] is not lowered.
    ///
    /// # Errors
    ///
    /// [`RemoveError::EmptyTree`] if there is nothing to remove and [`RemoveError::NotFound`]
    /// if no node matches. The tree is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, RemoveError};
    ///
    /// let mut tree: OrderedTree<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(RemoveError::NotFound));
    ///
    /// let mut seen = Vec::new();
    /// tree.pre_order(|x| seen.push(*x));
    /// assert_eq!(seen, [3, 8]);
    /// ```
    pub fn remove(&mut self, element: &T) -> Result<T, RemoveError>
    where
        T: Ord,
    {
        if self.root.is_none() {
            debug!("remove called on an empty tree");
            return Err(RemoveError::EmptyTree);
        }

        let slot = Node::locate(&mut self.root, element);
        let Some(mut target) = slot.take() else {
            debug!("remove found no matching element");
            return Err(RemoveError::NotFound);
        };

        *slot = match (target.left.take(), target.right.take()) {
            (None, None) => {
                trace!("removing leaf at depth {}", target.depth);
                None
            }
            (None, Some(right)) => {
                trace!("promoting right child of node at depth {}", target.depth);
                Some(right)
            }
            (Some(left), None) => {
                trace!("promoting left child of node at depth {}", target.depth);
                Some(left)
            }
            (Some(left), Some(right)) => {
                trace!("promoting predecessor of node at depth {}", target.depth);
                Some(Node::splice_predecessor(left, right))
            }
        };
        self.len -= 1;

        let Node { data, .. } = *target;
        Ok(data)
    }
}

impl<T> Node<T> {
    fn new(data: T, depth: usize) -> Self {
        Self {
            data,
            depth,
            left: None,
            right: None,
        }
    }

    fn subtree_height(subtree: &Subtree<T>) -> usize {
        match subtree {
            None => 0,
            Some(node) => {
                1 + Self::subtree_height(&node.left).max(Self::subtree_height(&node.right))
            }
        }
    }

    /// Copies `subtree` without recursing. Nodes are rebuilt in post-order so both children of
    /// a node are on top of `built` by the time the node itself is copied.
    fn clone_subtree(subtree: &Subtree<T>) -> Subtree<T>
    where
        T: Clone,
    {
        let mut pending = vec![(subtree.as_deref()?, false)];
        let mut built: Vec<Box<Self>> = Vec::new();

        while let Some((node, children_built)) = pending.pop() {
            if children_built {
                let right = node.right.as_ref().and_then(|_| built.pop());
                let left = node.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Self {
                    data: node.data.clone(),
                    depth: node.depth,
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right.as_deref().map(|right| (right, false)));
                pending.extend(node.left.as_deref().map(|left| (left, false)));
            }
        }

        built.pop()
    }

    /// Walks down from `slot` and returns the slot owning the first node equal to `element`, or
    /// the empty slot where the search fell off the tree.
    fn locate<'a>(mut slot: &'a mut Subtree<T>, element: &T) -> &'a mut Subtree<T>
    where
        T: Ord,
    {
        // The direction is decided through a shared borrow so the cursor only moves in a
        // branch that always reassigns it.
        while let Some(go_left) = slot
            .as_deref()
            .and_then(|node| (*element != node.data).then(|| *element < node.data))
        {
            if let Some(node) = slot {
                slot = if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
        slot
    }

    /// Detaches the rightmost node of `self`'s right subtree, handing its left subtree to the
    /// slot it leaves behind. Returns `None` when `self` has no right child, in which case
    /// `self` is the largest node of its own subtree.
    fn detach_max_right(&mut self) -> Subtree<T> {
        let mut slot = &mut self.right;
        while slot.as_ref().map_or(false, |node| node.right.is_some()) {
            slot = &mut slot.as_mut()?.right;
        }

        let mut max = slot.take()?;
        *slot = max.left.take();
        Some(max)
    }

    /// Builds the replacement for a removed node from its two orphaned subtrees. The largest
    /// node of `left` becomes the new subtree root and takes over both subtrees.
    fn splice_predecessor(mut left: Box<Self>, right: Box<Self>) -> Box<Self>
    where
        T: Ord,
    {
        let mut predecessor = match left.detach_max_right() {
            Some(mut predecessor) => {
                predecessor.left = Some(left);
                predecessor
            }
            // The left child has no right subtree so it's the predecessor and keeps its own
            // left subtree.
            None => left,
        };
        predecessor.right = Some(right);

        if cfg!(debug_assertions) {
            if let Some(left) = &predecessor.left {
                assert!(left.data <= predecessor.data);
            }
            if let Some(right) = &predecessor.right {
                assert!(right.data >= predecessor.data);
            }
        }
        predecessor
    }
}
