//! Decides whether every root-to-leaf path of a binary tree has the same length.

use crate::binary_tree::BinaryNode;

/// Returns `true` if every leaf of the tree rooted at `root` lies at the same depth. An empty tree
/// trivially satisfies this. A node with exactly one child is not a leaf, so the tree does not
/// need to be full.
///
/// # Examples
///
/// ```
/// use avl_collections::binary_tree::TreeNode;
/// use avl_collections::equal_paths;
///
/// let tree = TreeNode::new(1, Some(TreeNode::leaf(2)), Some(TreeNode::leaf(3)));
/// assert!(equal_paths(Some(&tree)));
///
/// let tree = TreeNode::new(
///     1,
///     Some(TreeNode::new(2, Some(TreeNode::leaf(4)), None)),
///     Some(TreeNode::leaf(3)),
/// );
/// assert!(!equal_paths(Some(&tree)));
///
/// assert!(equal_paths::<&TreeNode<u32>>(None));
/// ```
pub fn equal_paths<N>(root: Option<N>) -> bool
where
    N: BinaryNode,
{
    let mut leaf_depth = None;
    visit(root, 0, &mut leaf_depth)
}

fn visit<N>(node: Option<N>, depth: usize, leaf_depth: &mut Option<usize>) -> bool
where
    N: BinaryNode,
{
    let node = match node {
        Some(node) => node,
        None => return true,
    };

    let (left, right) = (node.left(), node.right());
    if left.is_none() && right.is_none() {
        return *leaf_depth.get_or_insert(depth) == depth;
    }

    visit(left, depth + 1, leaf_depth) && visit(right, depth + 1, leaf_depth)
}
