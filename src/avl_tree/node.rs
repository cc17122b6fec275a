use crate::arena::Handle;
use crate::avl_tree::tree::Tree;
use crate::binary_tree::BinaryNode;
use crate::bst::{self, Side};

/// An avl tree node is a plain tree node augmented with its balance factor: the height of its
/// left subtree minus the height of its right subtree.
pub type Node<T, U> = bst::Node<T, U, i8>;

impl<T, U> bst::Node<T, U, i8> {
    pub fn balance(&self) -> i8 {
        self.aux
    }

    pub fn set_balance(&mut self, balance: i8) {
        self.aux = balance;
    }

    pub fn update_balance(&mut self, diff: i8) {
        self.aux += diff;
    }
}

/// A read-only cursor pointing at a node of an `AvlMap`.
///
/// Cursors make the shape of the tree observable: from the root returned by `AvlMap::root` a
/// cursor can walk to either child or back to the parent.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(10, ());
/// map.insert(20, ());
/// map.insert(30, ());
///
/// let root = map.root().unwrap();
/// assert_eq!(root.key(), &20);
/// assert_eq!(root.left().map(|node| *node.key()), Some(10));
/// assert_eq!(root.right().map(|node| *node.key()), Some(30));
/// assert_eq!(root.balance(), 0);
/// ```
pub struct NodeRef<'a, T, U, C>
where
    T: 'a,
    U: 'a,
    C: 'a,
{
    tree: &'a Tree<T, U, C>,
    handle: Handle,
}

impl<'a, T, U, C> NodeRef<'a, T, U, C> {
    pub(crate) fn new(tree: &'a Tree<T, U, C>, handle: Handle) -> Self {
        NodeRef { tree, handle }
    }

    fn node(&self) -> &'a Node<T, U> {
        self.tree.node(self.handle)
    }

    fn at(&self, handle: Option<Handle>) -> Option<Self> {
        handle.map(|handle| NodeRef::new(self.tree, handle))
    }

    pub fn key(&self) -> &'a T {
        self.node().key()
    }

    pub fn value(&self) -> &'a U {
        self.node().value()
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance(&self) -> i8 {
        self.node().balance()
    }

    pub fn parent(&self) -> Option<Self> {
        self.at(self.node().parent)
    }

    pub fn left(&self) -> Option<Self> {
        self.at(self.node().child(Side::Left))
    }

    pub fn right(&self) -> Option<Self> {
        self.at(self.node().child(Side::Right))
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
}

impl<'a, T, U, C> Clone for NodeRef<'a, T, U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, U, C> Copy for NodeRef<'a, T, U, C> {}

impl<'a, T, U, C> BinaryNode for NodeRef<'a, T, U, C> {
    fn left(&self) -> Option<Self> {
        self.at(self.node().left)
    }

    fn right(&self) -> Option<Self> {
        self.at(self.node().right)
    }
}

#[cfg(test)]
mod tests {
    use crate::avl_tree::AvlMap;

    #[test]
    fn test_balance_accessors() {
        let mut map = AvlMap::new();
        map.insert(2, ());
        map.insert(1, ());

        let root = map.root().unwrap();
        assert_eq!(root.balance(), 1);
        assert!(!root.is_leaf());
        assert!(root.parent().is_none());

        let left = root.left().unwrap();
        assert_eq!(left.key(), &1);
        assert!(left.is_leaf());
        assert_eq!(left.parent().map(|node| *node.key()), Some(2));
        assert!(root.right().is_none());
    }

    #[test]
    fn test_update_balance() {
        let mut node = super::Node::new(1, (), None, 0);
        node.update_balance(1);
        assert_eq!(node.balance(), 1);
        node.update_balance(-2);
        assert_eq!(node.balance(), -1);
        node.set_balance(0);
        assert_eq!(node.balance(), 0);
    }
}
