//! Errors surfaced by [`OrderedTree`][crate::OrderedTree] operations.

/// Why a [`remove`][crate::OrderedTree::remove] could not delete anything. The tree is left
/// untouched in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RemoveError {
    /// The tree has no root.
    #[error("cannot remove from an empty tree")]
    EmptyTree,
    /// No node holds an element equal to the one requested.
    #[error("element not found in tree")]
    NotFound,
}
