//! Whole-tree traversals. Each walk visits every node exactly once and hands the visitor a
//! shared reference to the node's element, so the tree can't be changed mid-walk.

use crate::tree::Subtree;

/// The order in which a traversal visits a node relative to its two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. For a BST this yields the
    /// elements in non-decreasing order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

impl Order {
    /// Every order, in the sequence they're usually listed.
    pub const ALL: [Order; 3] = [Order::PreOrder, Order::InOrder, Order::PostOrder];
}

/// Recursively walks `subtree` in the given `order`. An empty subtree is a no-op.
pub(crate) fn walk<T, F>(subtree: &Subtree<T>, order: Order, visit: &mut F)
where
    F: FnMut(&T),
{
    let Some(node) = subtree else {
        return;
    };

    match order {
        Order::PreOrder => {
            visit(&node.data);
            walk(&node.left, order, visit);
            walk(&node.right, order, visit);
        }
        Order::InOrder => {
            walk(&node.left, order, visit);
            visit(&node.data);
            walk(&node.right, order, visit);
        }
        Order::PostOrder => {
            walk(&node.left, order, visit);
            walk(&node.right, order, visit);
            visit(&node.data);
        }
    }
}
