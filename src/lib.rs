//! An ordered map and set backed by an avl tree whose nodes link back to their parents, plus a
//! predicate that checks whether all root-to-leaf paths of a binary tree have equal length.
//!
//! # Examples
//!
//! ```
//! use avl_collections::avl_tree::AvlMap;
//! use avl_collections::equal_paths;
//!
//! let mut map = AvlMap::new();
//! for key in 1..8 {
//!     map.insert(key, key * 10);
//! }
//!
//! assert_eq!(map.height(), 3);
//! assert!(equal_paths(map.root()));
//! ```

mod arena;
mod bst;
mod entry;
pub mod avl_tree;
pub mod binary_tree;
pub mod compare;
pub mod error;

mod equal_paths;

pub use crate::entry::Entry;
pub use crate::equal_paths::equal_paths;
