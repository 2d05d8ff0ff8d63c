//! In-memory representation of a parsed tree.
//!
//! Nodes are either directories (which can contain other nodes) or files.
//! Child order is the order entries appeared in the source text and is the
//! order they are later created on disk.

mod forest;
mod node;

pub use forest::TreeForest;
pub use node::{NodeKind, TreeNode};
