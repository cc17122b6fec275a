use crate::arena::{Arena, Handle};
use crate::bst::node::{Node, Side};
use crate::compare::Compare;
use log::debug;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// A parent-linked binary search tree whose nodes live in an arena.
///
/// The tree itself never restructures: callers place and unlink nodes through `attach`,
/// `replace_child` and `node_swap`, and are responsible for keeping keys ordered under `cmp`.
#[derive(Clone, Debug)]
pub struct Tree<T, U, A, C> {
    nodes: Arena<Node<T, U, A>>,
    root: Option<Handle>,
    cmp: C,
}

impl<T, U, A, C> Tree<T, U, A, C> {
    pub fn new(cmp: C) -> Self {
        Tree {
            nodes: Arena::new(),
            root: None,
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> Option<Handle> {
        self.root
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    pub fn node(&self, handle: Handle) -> &Node<T, U, A> {
        &self.nodes[handle]
    }

    pub fn node_mut(&mut self, handle: Handle) -> &mut Node<T, U, A> {
        &mut self.nodes[handle]
    }

    /// Returns the parent of a node together with the side of the parent the node hangs from.
    pub fn side_of(&self, handle: Handle) -> Option<(Handle, Side)> {
        self.nodes[handle].parent.map(|parent| {
            if self.nodes[parent].left == Some(handle) {
                (parent, Side::Left)
            } else {
                (parent, Side::Right)
            }
        })
    }

    pub fn find<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            curr = match self.cmp.compare(key, node.entry.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns the node with the greatest key less than or equal to `key`.
    pub fn floor<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        let mut curr = self.root;
        let mut best = None;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            curr = match self.cmp.compare(key, node.entry.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    best = Some(handle);
                    node.right
                },
                Ordering::Equal => return Some(handle),
            };
        }
        best
    }

    /// Returns the node with the least key greater than or equal to `key`.
    pub fn ceil<V>(&self, key: &V) -> Option<Handle>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        let mut curr = self.root;
        let mut best = None;
        while let Some(handle) = curr {
            let node = &self.nodes[handle];
            curr = match self.cmp.compare(key, node.entry.key.borrow()) {
                Ordering::Less => {
                    best = Some(handle);
                    node.left
                },
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        best
    }

    pub fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes[handle].left {
            handle = left;
        }
        handle
    }

    pub fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes[handle].right {
            handle = right;
        }
        handle
    }

    pub fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    pub fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.rightmost(root))
    }

    /// Returns the in-order predecessor of a node.
    pub fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.nodes[handle].left {
            return Some(self.rightmost(left));
        }
        let mut child = handle;
        let mut parent = self.nodes[handle].parent;
        while let Some(curr) = parent {
            if self.nodes[curr].right == Some(child) {
                return Some(curr);
            }
            child = curr;
            parent = self.nodes[curr].parent;
        }
        None
    }

    /// Returns the in-order successor of a node.
    pub fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.nodes[handle].right {
            return Some(self.leftmost(right));
        }
        let mut child = handle;
        let mut parent = self.nodes[handle].parent;
        while let Some(curr) = parent {
            if self.nodes[curr].left == Some(child) {
                return Some(curr);
            }
            child = curr;
            parent = self.nodes[curr].parent;
        }
        None
    }

    /// Allocates a new node and hangs it from `parent` on the given side, or installs it as the
    /// root. The target slot must be empty.
    pub fn attach(&mut self, parent: Option<(Handle, Side)>, key: T, value: U, aux: A) -> Handle {
        let handle = self
            .nodes
            .allocate(Node::new(key, value, parent.map(|(parent, _)| parent), aux));
        match parent {
            Some((parent, side)) => self.nodes[parent].set_child(side, Some(handle)),
            None => self.root = Some(handle),
        }
        handle
    }

    /// Puts `new` into the slot of `parent` currently holding `old` (the root slot if `parent` is
    /// `None`) and points `new` back at `parent`.
    pub fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
        match parent {
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
            None => self.root = new,
        }
    }

    /// Exchanges the positions of two nodes. Entries and augmentation data stay with their
    /// nodes; every link into, out of and between the two nodes is rewired.
    pub fn node_swap(&mut self, a: Handle, b: Handle) {
        if a == b {
            return;
        }
        let relabel = |link: Option<Handle>| {
            link.map(|handle| {
                if handle == a {
                    b
                } else if handle == b {
                    a
                } else {
                    handle
                }
            })
        };

        let (a_parent, a_left, a_right) = {
            let node = &self.nodes[a];
            (node.parent, node.left, node.right)
        };
        let (b_parent, b_left, b_right) = {
            let node = &self.nodes[b];
            (node.parent, node.left, node.right)
        };

        let mut neighbours = Vec::with_capacity(6);
        for link in &[a_parent, a_left, a_right, b_parent, b_left, b_right] {
            if let Some(handle) = *link {
                if handle != a && handle != b && !neighbours.contains(&handle) {
                    neighbours.push(handle);
                }
            }
        }

        {
            let node = &mut self.nodes[a];
            node.parent = relabel(b_parent);
            node.left = relabel(b_left);
            node.right = relabel(b_right);
        }
        {
            let node = &mut self.nodes[b];
            node.parent = relabel(a_parent);
            node.left = relabel(a_left);
            node.right = relabel(a_right);
        }
        for handle in neighbours {
            let node = &mut self.nodes[handle];
            node.parent = relabel(node.parent);
            node.left = relabel(node.left);
            node.right = relabel(node.right);
        }
        self.root = relabel(self.root);
    }

    /// Frees a node that has already been unlinked from the tree.
    pub fn release(&mut self, handle: Handle) -> Node<T, U, A> {
        self.nodes.free(handle)
    }

    /// Releases every node, children before their parents.
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push((root, false));
        }
        let mut released = 0;
        while let Some((handle, expanded)) = stack.pop() {
            if expanded {
                self.nodes.free(handle);
                released += 1;
                continue;
            }
            stack.push((handle, true));
            let node = &self.nodes[handle];
            if let Some(right) = node.right {
                stack.push((right, false));
            }
            if let Some(left) = node.left {
                stack.push((left, false));
            }
        }
        self.nodes.clear();
        debug!("cleared tree, released {} nodes", released);
    }
}
