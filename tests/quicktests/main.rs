mod properties;

use ordered_tree::{Order, OrderedTree};

/// Collects the elements of `tree` in the given order.
pub(crate) fn collect<T: Clone>(tree: &OrderedTree<T>, order: Order) -> Vec<T> {
    let mut seen = Vec::new();
    tree.traverse(order, |x| seen.push(x.clone()));
    seen
}
