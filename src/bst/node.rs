use crate::arena::Handle;
use crate::entry::Entry;
use std::mem;

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

/// A struct representing a node of a parent-linked binary search tree.
///
/// `A` is augmentation data owned by whichever balancing scheme sits on top of the plain tree.
#[derive(Clone, Debug)]
pub struct Node<T, U, A> {
    pub entry: Entry<T, U>,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub aux: A,
}

impl<T, U, A> Node<T, U, A> {
    pub fn new(key: T, value: U, parent: Option<Handle>, aux: A) -> Self {
        Node {
            entry: Entry { key, value },
            parent,
            left: None,
            right: None,
            aux,
        }
    }

    pub fn key(&self) -> &T {
        &self.entry.key
    }

    pub fn value(&self) -> &U {
        &self.entry.value
    }

    pub fn set_value(&mut self, value: U) -> U {
        mem::replace(&mut self.entry.value, value)
    }

    pub fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
