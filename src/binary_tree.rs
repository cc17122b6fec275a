//! Plain binary trees and the shape abstraction shared with the balanced maps.

/// A node of a binary tree that can hand out its children.
///
/// Implemented by references into owned trees (`&TreeNode<T>`) and by cursors into an `AvlMap`
/// (`NodeRef`), so shape predicates run on either.
pub trait BinaryNode: Sized {
    fn left(&self) -> Option<Self>;

    fn right(&self) -> Option<Self>;

    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}

/// An owned binary tree node with no ordering or balancing constraints.
///
/// # Examples
///
/// ```
/// use avl_collections::binary_tree::TreeNode;
///
/// let tree = TreeNode::new(1, Some(TreeNode::leaf(2)), None);
/// assert_eq!(tree.left.as_ref().map(|node| node.value), Some(2));
/// assert!(tree.right.is_none());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    pub fn leaf(value: T) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn new(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        TreeNode {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
}

impl<'a, T> BinaryNode for &'a TreeNode<T> {
    fn left(&self) -> Option<Self> {
        let node: &'a TreeNode<T> = *self;
        node.left.as_deref()
    }

    fn right(&self) -> Option<Self> {
        let node: &'a TreeNode<T> = *self;
        node.right.as_deref()
    }
}
