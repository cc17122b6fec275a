use crate::arena::Handle;
use crate::avl_tree::node::NodeRef;
use crate::avl_tree::tree::{self, Tree};
use crate::compare::{Compare, Natural};
use crate::entry::Entry;
use crate::error::{InvariantError, KeyError};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::ops::{Index, IndexMut};
use std::vec;

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every node also links back to
/// its parent, which lets removal and iteration walk upwards without keeping a path.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
#[derive(Clone)]
pub struct AvlMap<T, U, C = Natural> {
    tree: Tree<T, U, C>,
}

impl<T, U> AvlMap<T, U> {
    /// Constructs a new, empty `AvlMap<T, U>` ordered by the keys' `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap {
            tree: Tree::new(Natural),
        }
    }
}

impl<T, U, C> AvlMap<T, U, C> {
    /// Constructs a new, empty map ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// map.insert(1u32, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        AvlMap {
            tree: Tree::new(cmp),
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced and the old value is returned. The stored key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        C: Compare<T>,
    {
        tree::insert(&mut self.tree, key, value)
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the map untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        tree::remove(&mut self.tree, key).map(Entry::into_pair)
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        self.tree.find(key).map(|handle| self.tree.node(handle).value())
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        match self.tree.find(key) {
            Some(handle) => Some(&mut self.tree.node_mut(handle).entry.value),
            None => None,
        }
    }

    /// Returns the value associated with a particular key, or a `KeyError` if the key does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    /// use avl_collections::error::KeyError;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.try_get(&1), Ok(&1));
    /// assert_eq!(map.try_get(&2), Err(KeyError));
    /// ```
    pub fn try_get<V>(&self, key: &V) -> Result<&U, KeyError>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        self.get(key).ok_or(KeyError)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        self.tree.floor(key).map(|handle| self.tree.node(handle).key())
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        self.tree.ceil(key).map(|handle| self.tree.node(handle).key())
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.first().map(|handle| self.tree.node(handle).key())
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.last().map(|handle| self.tree.node(handle).key())
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty map has
    /// height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, ()> = (1..8).map(|key| (key, ())).collect();
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns a cursor at the root of the tree, or `None` if the map is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T, U, C>> {
        self.tree
            .root()
            .map(|handle| NodeRef::new(&self.tree, handle))
    }

    /// Walks the whole tree and verifies ordering, parent links, balance factors and the element
    /// count. Returns the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.check(), Ok(map.height()));
    /// ```
    pub fn check(&self) -> Result<usize, InvariantError>
    where
        C: Compare<T>,
    {
        tree::check(&self.tree)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlMapIter<'_, T, U, C> {
        AvlMapIter {
            tree: &self.tree,
            front: self.tree.first(),
            back: self.tree.last(),
            remaining: self.len(),
        }
    }

    /// Returns an iterator over the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn keys(&self) -> AvlMapKeys<'_, T, U, C> {
        AvlMapKeys { iter: self.iter() }
    }

    /// Returns an iterator over the values of the map, ordered by their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// assert_eq!(map.values().collect::<Vec<&char>>(), vec![&'a', &'b']);
    /// ```
    pub fn values(&self) -> AvlMapValues<'_, T, U, C> {
        AvlMapValues { iter: self.iter() }
    }
}

impl<T, U, C> IntoIterator for AvlMap<T, U, C> {
    type IntoIter = AvlMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        let mut tree = self.tree;
        let mut handles = Vec::with_capacity(tree.len());
        let mut curr = tree.first();
        while let Some(handle) = curr {
            handles.push(handle);
            curr = tree.successor(handle);
        }
        let entries = handles
            .into_iter()
            .map(|handle| tree.release(handle).entry.into_pair())
            .collect::<Vec<(T, U)>>();
        AvlMapIntoIter {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, T, U, C> IntoIterator for &'a AvlMap<T, U, C>
where
    T: 'a,
    U: 'a,
    C: 'a,
{
    type IntoIter = AvlMapIter<'a, T, U, C>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct AvlMapIntoIter<T, U> {
    entries: vec::IntoIter<(T, U)>,
}

impl<T, U> Iterator for AvlMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T, U> DoubleEndedIterator for AvlMapIntoIter<T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<T, U> ExactSizeIterator for AvlMapIntoIter<T, U> {}

impl<T, U> FusedIterator for AvlMapIntoIter<T, U> {}

/// An iterator for `AvlMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references. It
/// steps between nodes through parent links and needs no auxiliary stack.
pub struct AvlMapIter<'a, T, U, C>
where
    T: 'a,
    U: 'a,
    C: 'a,
{
    tree: &'a Tree<T, U, C>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T, U, C> Iterator for AvlMapIter<'a, T, U, C>
where
    T: 'a,
    U: 'a,
    C: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        self.front.map(|handle| {
            self.front = tree.successor(handle);
            self.remaining -= 1;
            let node = tree.node(handle);
            (node.key(), node.value())
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U, C> DoubleEndedIterator for AvlMapIter<'a, T, U, C>
where
    T: 'a,
    U: 'a,
    C: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        self.back.map(|handle| {
            self.back = tree.predecessor(handle);
            self.remaining -= 1;
            let node = tree.node(handle);
            (node.key(), node.value())
        })
    }
}

impl<'a, T, U, C> ExactSizeIterator for AvlMapIter<'a, T, U, C> {}

impl<'a, T, U, C> FusedIterator for AvlMapIter<'a, T, U, C> {}

/// An iterator over the keys of an `AvlMap<T, U, C>`.
pub struct AvlMapKeys<'a, T, U, C>
where
    T: 'a,
    U: 'a,
    C: 'a,
{
    iter: AvlMapIter<'a, T, U, C>,
}

impl<'a, T, U, C> Iterator for AvlMapKeys<'a, T, U, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T, U, C> DoubleEndedIterator for AvlMapKeys<'a, T, U, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|pair| pair.0)
    }
}

/// An iterator over the values of an `AvlMap<T, U, C>`.
pub struct AvlMapValues<'a, T, U, C>
where
    T: 'a,
    U: 'a,
    C: 'a,
{
    iter: AvlMapIter<'a, T, U, C>,
}

impl<'a, T, U, C> Iterator for AvlMapValues<'a, T, U, C> {
    type Item = &'a U;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|pair| pair.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T, U, C> DoubleEndedIterator for AvlMapValues<'a, T, U, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|pair| pair.1)
    }
}

impl<T, U> Default for AvlMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, C> fmt::Debug for AvlMap<T, U, C>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U, C> PartialEq for AvlMap<T, U, C>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U, C> Eq for AvlMap<T, U, C>
where
    T: Eq,
    U: Eq,
{
}

impl<T, U, C> FromIterator<(T, U)> for AvlMap<T, U, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = AvlMap::with_comparator(C::default());
        map.extend(iter);
        map
    }
}

impl<T, U, C> Extend<(T, U)> for AvlMap<T, U, C>
where
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, T, U, C, V> Index<&'a V> for AvlMap<T, U, C>
where
    T: Borrow<V>,
    C: Compare<V>,
    V: ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        match self.try_get(key) {
            Ok(value) => value,
            Err(error) => panic!("Error: {}.", error),
        }
    }
}

impl<'a, T, U, C, V> IndexMut<&'a V> for AvlMap<T, U, C>
where
    T: Borrow<V>,
    C: Compare<V>,
    V: ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("Error: {}.", KeyError),
        }
    }
}

impl<T, U, C> Serialize for AvlMap<T, U, C>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (key, value) in self {
            seq.serialize_element(&Entry { key, value })?;
        }
        seq.end()
    }
}

impl<'de, T, U, C> Deserialize<'de> for AvlMap<T, U, C>
where
    T: Deserialize<'de>,
    U: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry<T, U>>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(Entry::into_pair).collect())
    }
}
