//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! Every node keeps a link back to its parent, so rebalancing after an update walks upwards from
//! the modified node instead of unwinding a recorded search path.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{AvlMap, AvlMapIntoIter, AvlMapIter, AvlMapKeys, AvlMapValues};
pub use self::node::NodeRef;
pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};
