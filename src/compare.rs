//! Pluggable key orderings.

use std::cmp::Ordering;

/// A strict weak ordering over values of type `K`.
///
/// Trees only ever ask a comparator whether one key is less than, equal to, or greater than
/// another, so any consistent total order works. Closures of type `Fn(&K, &K) -> Ordering` are
/// comparators.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
/// map.insert(1u32, "one");
/// map.insert(2, "two");
///
/// assert_eq!(map.min(), Some(&2));
/// ```
pub trait Compare<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The ordering given by a key type's `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<K> Compare<K> for Natural
where
    K: Ord + ?Sized,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Compare<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{Compare, Natural};
    use std::cmp::Ordering;

    #[test]
    fn test_natural() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert_eq!(Natural.compare(&3, &3), Ordering::Equal);
    }

    #[test]
    fn test_closure() {
        let reverse = |a: &u32, b: &u32| b.cmp(a);
        assert_eq!(reverse.compare(&1u32, &2u32), Ordering::Greater);
    }
}
