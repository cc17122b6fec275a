use crate::arena::Handle;
use crate::bst::{self, Side};
use crate::compare::Compare;
use crate::entry::Entry;
use crate::error::InvariantError;
use log::trace;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};

pub type Tree<T, U, C> = bst::Tree<T, U, i8, C>;

/// How the height of a subtree changed after a structural edit below it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeightChange {
    Grew,
    Shrank,
}

/// Rotates `node` to the left and returns the node now occupying its position. Balances are left
/// untouched. A missing node or a missing right child makes this a no-op.
pub fn rotate_left<T, U, C>(tree: &mut Tree<T, U, C>, node: Option<Handle>) -> Option<Handle> {
    let x = match node {
        Some(x) => x,
        None => return node,
    };
    let pivot = match tree.node(x).right {
        Some(pivot) => pivot,
        None => return node,
    };
    let parent = tree.node(x).parent;
    let inner = tree.node(pivot).left;

    tree.replace_child(parent, x, Some(pivot));
    tree.node_mut(x).right = inner;
    if let Some(inner) = inner {
        tree.node_mut(inner).parent = Some(x);
    }
    tree.node_mut(pivot).left = Some(x);
    tree.node_mut(x).parent = Some(pivot);

    trace!("rotated {:?} left around {:?}", x, pivot);
    Some(pivot)
}

/// Rotates `node` to the right and returns the node now occupying its position. Balances are left
/// untouched. A missing node or a missing left child makes this a no-op.
pub fn rotate_right<T, U, C>(tree: &mut Tree<T, U, C>, node: Option<Handle>) -> Option<Handle> {
    let x = match node {
        Some(x) => x,
        None => return node,
    };
    let pivot = match tree.node(x).left {
        Some(pivot) => pivot,
        None => return node,
    };
    let parent = tree.node(x).parent;
    let inner = tree.node(pivot).right;

    tree.replace_child(parent, x, Some(pivot));
    tree.node_mut(x).left = inner;
    if let Some(inner) = inner {
        tree.node_mut(inner).parent = Some(x);
    }
    tree.node_mut(pivot).right = Some(x);
    tree.node_mut(x).parent = Some(pivot);

    trace!("rotated {:?} right around {:?}", x, pivot);
    Some(pivot)
}

fn set_balances<T, U, C>(tree: &mut Tree<T, U, C>, balances: &[(Handle, i8)]) {
    for &(handle, balance) in balances {
        tree.node_mut(handle).set_balance(balance);
    }
}

/// Restores the balance of a node whose balance is +2 or -2 with a single or double rotation and
/// returns the root of the rotated subtree. Every node moved by the rotation gets its correct
/// balance; the balance of the heavy child decides between the single and the double case, and a
/// heavy child of balance 0 takes the single rotation.
pub fn rebalance_node<T, U, C>(tree: &mut Tree<T, U, C>, node: Handle) -> Handle {
    let balance = tree.node(node).balance();
    if balance > 1 {
        let child = match tree.node(node).left {
            Some(child) => child,
            None => return node,
        };
        let child_balance = tree.node(child).balance();
        if child_balance >= 0 {
            rotate_right(tree, Some(node));
            if child_balance == 0 {
                set_balances(tree, &[(node, 1), (child, -1)]);
            } else {
                set_balances(tree, &[(node, 0), (child, 0)]);
            }
            child
        } else {
            let grandchild = match tree.node(child).right {
                Some(grandchild) => grandchild,
                None => return node,
            };
            let grandchild_balance = tree.node(grandchild).balance();
            rotate_left(tree, Some(child));
            rotate_right(tree, Some(node));
            set_balances(
                tree,
                &[
                    (child, if grandchild_balance < 0 { 1 } else { 0 }),
                    (node, if grandchild_balance > 0 { -1 } else { 0 }),
                    (grandchild, 0),
                ],
            );
            grandchild
        }
    } else if balance < -1 {
        let child = match tree.node(node).right {
            Some(child) => child,
            None => return node,
        };
        let child_balance = tree.node(child).balance();
        if child_balance <= 0 {
            rotate_left(tree, Some(node));
            if child_balance == 0 {
                set_balances(tree, &[(node, -1), (child, 1)]);
            } else {
                set_balances(tree, &[(node, 0), (child, 0)]);
            }
            child
        } else {
            let grandchild = match tree.node(child).left {
                Some(grandchild) => grandchild,
                None => return node,
            };
            let grandchild_balance = tree.node(grandchild).balance();
            rotate_right(tree, Some(child));
            rotate_left(tree, Some(node));
            set_balances(
                tree,
                &[
                    (child, if grandchild_balance > 0 { -1 } else { 0 }),
                    (node, if grandchild_balance < 0 { 1 } else { 0 }),
                    (grandchild, 0),
                ],
            );
            grandchild
        }
    } else {
        node
    }
}

/// Walks from `start` towards the root after the subtree on `side` of `start` changed height,
/// fixing balances and rotating where a node falls out of balance. The walk stops at the first
/// node whose subtree height is unaffected.
pub fn rebalance_upwards<T, U, C>(
    tree: &mut Tree<T, U, C>,
    start: Handle,
    side: Side,
    change: HeightChange,
) {
    let mut curr = start;
    let mut side = side;
    loop {
        let diff = match (change, side) {
            (HeightChange::Grew, Side::Left) | (HeightChange::Shrank, Side::Right) => 1,
            (HeightChange::Grew, Side::Right) | (HeightChange::Shrank, Side::Left) => -1,
        };
        tree.node_mut(curr).update_balance(diff);
        let balance = tree.node(curr).balance();

        let top = if balance > 1 || balance < -1 {
            let pivot = rebalance_node(tree, curr);
            trace!("rebalanced {:?}, new subtree root {:?}", curr, pivot);
            // a rotation after an insertion restores the old height; after a removal it does so
            // only when the pivot ends up with a nonzero balance
            if change == HeightChange::Grew || tree.node(pivot).balance() != 0 {
                return;
            }
            pivot
        } else {
            let height_changed = match change {
                HeightChange::Grew => balance != 0,
                HeightChange::Shrank => balance == 0,
            };
            if !height_changed {
                return;
            }
            curr
        };

        match tree.side_of(top) {
            Some((parent, parent_side)) => {
                curr = parent;
                side = parent_side;
            },
            None => return,
        }
    }
}

/// Exchanges the positions of two nodes, keeping each balance attached to its position.
fn node_swap<T, U, C>(tree: &mut Tree<T, U, C>, a: Handle, b: Handle) {
    tree.node_swap(a, b);
    let a_balance = tree.node(a).balance();
    let b_balance = tree.node(b).balance();
    tree.node_mut(a).set_balance(b_balance);
    tree.node_mut(b).set_balance(a_balance);
}

pub fn insert<T, U, C>(tree: &mut Tree<T, U, C>, key: T, value: U) -> Option<U>
where
    C: Compare<T>,
{
    let mut parent = None;
    let mut curr = tree.root();
    while let Some(handle) = curr {
        let ordering = tree.comparator().compare(&key, tree.node(handle).key());
        let side = match ordering {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => return Some(tree.node_mut(handle).set_value(value)),
        };
        parent = Some((handle, side));
        curr = tree.node(handle).child(side);
    }

    tree.attach(parent, key, value, 0);
    if let Some((parent, side)) = parent {
        rebalance_upwards(tree, parent, side, HeightChange::Grew);
    }
    None
}

pub fn remove<T, U, C, V>(tree: &mut Tree<T, U, C>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    C: Compare<V>,
    V: ?Sized,
{
    let handle = tree.find(key)?;

    if tree.node(handle).left.is_some() && tree.node(handle).right.is_some() {
        if let Some(predecessor) = tree.predecessor(handle) {
            node_swap(tree, handle, predecessor);
        }
    }

    let child = {
        let node = tree.node(handle);
        node.left.or(node.right)
    };
    let parent = tree.side_of(handle);
    tree.replace_child(parent.map(|(parent, _)| parent), handle, child);
    let node = tree.release(handle);

    if let Some((parent, side)) = parent {
        rebalance_upwards(tree, parent, side, HeightChange::Shrank);
    }
    Some(node.entry)
}

/// Returns the height of the tree by following the taller child from the root.
pub fn height<T, U, C>(tree: &Tree<T, U, C>) -> usize {
    let mut height = 0;
    let mut curr = tree.root();
    while let Some(handle) = curr {
        height += 1;
        let node = tree.node(handle);
        curr = if node.balance() >= 0 {
            node.left
        } else {
            node.right
        };
    }
    height
}

fn check_subtree<T, U, C>(
    tree: &Tree<T, U, C>,
    handle: Option<Handle>,
    depth: usize,
) -> Result<(usize, usize), InvariantError> {
    let handle = match handle {
        Some(handle) => handle,
        None => return Ok((0, 0)),
    };
    let node = tree.node(handle);
    for child in [node.left, node.right].iter().flatten() {
        if tree.node(*child).parent != Some(handle) {
            return Err(InvariantError::BrokenParentLink { depth: depth + 1 });
        }
    }

    let (left_height, left_len) = check_subtree(tree, node.left, depth + 1)?;
    let (right_height, right_len) = check_subtree(tree, node.right, depth + 1)?;
    let actual = left_height as i64 - right_height as i64;
    if actual.abs() > 1 {
        return Err(InvariantError::Unbalanced { depth, actual });
    }
    if actual != i64::from(node.balance()) {
        return Err(InvariantError::StaleBalance {
            depth,
            stored: node.balance(),
            actual,
        });
    }
    Ok((
        cmp::max(left_height, right_height) + 1,
        left_len + right_len + 1,
    ))
}

/// Verifies every structural invariant of the tree and returns its height.
pub fn check<T, U, C>(tree: &Tree<T, U, C>) -> Result<usize, InvariantError>
where
    C: Compare<T>,
{
    if let Some(root) = tree.root() {
        if tree.node(root).parent.is_some() {
            return Err(InvariantError::RootHasParent);
        }
    }

    let (height, len) = check_subtree(tree, tree.root(), 0)?;
    if len != tree.len() {
        return Err(InvariantError::LengthMismatch {
            expected: tree.len(),
            actual: len,
        });
    }

    let mut prev: Option<Handle> = None;
    let mut curr = tree.first();
    let mut position = 0;
    while let Some(handle) = curr {
        if let Some(prev) = prev {
            let ordering = tree
                .comparator()
                .compare(tree.node(prev).key(), tree.node(handle).key());
            if ordering != Ordering::Less {
                return Err(InvariantError::OutOfOrder { position });
            }
        }
        prev = Some(handle);
        curr = tree.successor(handle);
        position += 1;
    }
    Ok(height)
}
