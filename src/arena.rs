//! Slot arena that owns the nodes of a single tree.

use std::mem;
use std::ops::{Index, IndexMut};

/// A copyable reference to an object stored in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    index: usize,
}

#[derive(Clone, Debug)]
enum Block<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// An allocator for objects of a single type.
///
/// Freed slots are threaded onto a free list and handed out again by later allocations, so
/// handles are only meaningful while the object they were returned for is alive.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    blocks: Vec<Block<T>>,
    head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            blocks: Vec::new(),
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head {
            None => {
                self.blocks.push(Block::Occupied(value));
                Handle {
                    index: self.blocks.len() - 1,
                }
            },
            Some(index) => {
                match mem::replace(&mut self.blocks[index], Block::Occupied(value)) {
                    Block::Vacant(next) => self.head = next,
                    Block::Occupied(_) => panic!("Error: free list points at an occupied block."),
                }
                Handle { index }
            },
        }
    }

    /// Releases the object behind `handle` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to a live object.
    pub fn free(&mut self, handle: Handle) -> T {
        if handle.index >= self.blocks.len() {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(&mut self.blocks[handle.index], Block::Vacant(self.head));
        match old_block {
            Block::Vacant(next) => {
                self.blocks[handle.index] = Block::Vacant(next);
                panic!("Error: attempting to free vacant block.");
            },
            Block::Occupied(value) => {
                self.head = Some(handle.index);
                self.len -= 1;
                value
            },
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.blocks.get(handle.index) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.blocks.get_mut(handle.index) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Drops every object and forgets all slots.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle refers to a vacant block.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle refers to a vacant block.")
    }
}
