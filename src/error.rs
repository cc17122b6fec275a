//! Error types.

use thiserror::Error;

/// Returned when looking up a key that is not in the map.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("key does not exist")]
pub struct KeyError;

/// A violated structural invariant, reported by `AvlMap::check`.
///
/// Nodes are identified by their depth (the root has depth 0) or, for ordering violations, by
/// their position in in-order traversal.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InvariantError {
    #[error("root node has a parent")]
    RootHasParent,
    #[error("node at depth {depth} does not point back at its parent")]
    BrokenParentLink { depth: usize },
    #[error("key at in-order position {position} is not greater than its predecessor")]
    OutOfOrder { position: usize },
    #[error("node at depth {depth} stores balance {stored} but its subtrees differ by {actual}")]
    StaleBalance { depth: usize, stored: i8, actual: i64 },
    #[error("node at depth {depth} has subtree height difference {actual}")]
    Unbalanced { depth: usize, actual: i64 },
    #[error("map reports {expected} entries but {actual} are reachable from the root")]
    LengthMismatch { expected: usize, actual: usize },
}
