//! Plain binary search tree with parent links, shared by the balanced trees of this crate.

mod node;
mod tree;

pub use self::node::{Node, Side};
pub use self::tree::Tree;
