use std::error::Error;
use std::fmt;

/// Everything that can go wrong while operating on an [`RBTree`](crate::RBTree).
///
/// `UnrelatedNodes` is an internal-invariant failure rather than a user error; a
/// correct tree never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// An absent key was passed to `insert` or `contains`.
    InvalidInput,
    /// The key is already stored in the tree.
    DuplicateKey,
    /// A rotation was requested between two nodes that are not parent and child.
    UnrelatedNodes,
    /// `try_next` was called after the in-order walk finished.
    IteratorExhausted,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::InvalidInput => write!(f, "this tree cannot store absent keys"),
            TreeError::DuplicateKey => write!(f, "this tree already contains that key"),
            TreeError::UnrelatedNodes => write!(f, "given parent and child are not related"),
            TreeError::IteratorExhausted => write!(f, "there are no more keys in the tree"),
        }
    }
}

impl Error for TreeError {}
