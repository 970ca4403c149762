mod candidate;
mod error;
mod node;
mod tree;

pub use candidate::Candidate;
pub use error::TreeError;
pub use node::{Color, Node, NodeRef};
pub use tree::{InOrder, RBTree};
