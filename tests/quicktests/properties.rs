use ordered_tree::{Order, OrderedTree, RemoveError};

use std::collections::HashSet;

use crate::collect;

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
        for delete in &deletes {
            let _ = tree.remove(delete);
        }

        collect(&tree, Order::InOrder).windows(2).all(|w| w[0] <= w[1])
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<i8> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<i8> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.find(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
        let mut still_present = xs;

        for delete in &deletes {
            let outcome = tree.remove(delete);
            match still_present.iter().position(|x| x == delete) {
                Some(pos) => {
                    still_present.swap_remove(pos);
                    if outcome != Ok(*delete) {
                        return false;
                    }
                }
                None if still_present.is_empty() => {
                    if outcome != Err(RemoveError::EmptyTree) {
                        return false;
                    }
                }
                None => {
                    if outcome != Err(RemoveError::NotFound) {
                        return false;
                    }
                }
            }
        }

        // A deleted value stays findable only while another copy of it remains.
        deletes
            .iter()
            .all(|x| tree.find(x) == still_present.contains(x))
            && still_present.iter().all(|x| tree.find(x))
            && tree.len() == still_present.len()
    }
}

quickcheck::quickcheck! {
    fn traversal_counts_match_len(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
        for delete in &deletes {
            let _ = tree.remove(delete);
        }

        Order::ALL
            .iter()
            .all(|order| collect(&tree, *order).len() == tree.len())
    }
}

quickcheck::quickcheck! {
    fn height_monotone_under_inserts(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        let mut heights = Vec::new();
        for x in xs {
            tree.insert(x);
            heights.push(tree.height());
        }

        heights.windows(2).all(|w| w[0] <= w[1])
    }
}

quickcheck::quickcheck! {
    fn bulk_matches_repeated_insert(xs: Vec<i8>) -> bool {
        let bulk: OrderedTree<i8> = xs.iter().copied().collect();
        let mut repeated = OrderedTree::new();
        for x in &xs {
            repeated.insert(*x);
        }

        Order::ALL
            .iter()
            .all(|order| collect(&bulk, *order) == collect(&repeated, *order))
    }
}

quickcheck::quickcheck! {
    fn tracked_height_bounds_live_height(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
        for delete in &deletes {
            let _ = tree.remove(delete);
        }

        tree.live_height() <= tree.height()
    }
}
