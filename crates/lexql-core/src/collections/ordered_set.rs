//! Insertion-ordered set.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

/// A set that remembers the order in which elements were first inserted.
///
/// Membership is answered by a hash table while enumeration walks a separate
/// append-only sequence. Every element lives in both structures exactly once.
///
/// ```
/// use lexql_core::collections::OrderedSet;
///
/// let mut set: OrderedSet<&str> = ["c", "a", "c", "b"].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.values(), &["c", "a", "b"]);
///
/// set.add("a");
/// assert_eq!(set.values(), &["c", "a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    presence: HashSet<T>,
    order: Vec<T>,
}

impl<T> OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            presence: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Builds a set from an optional initializer. `None` yields an empty set.
    #[must_use]
    pub fn from_optional<I>(items: Option<I>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.map_or_else(Self::new, |items| items.into_iter().collect())
    }

    /// Number of distinct elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts `item` unless it is already present. An existing element keeps
    /// its original position.
    pub fn add(&mut self, item: T) -> &mut Self {
        if !self.presence.contains(&item) {
            self.presence.insert(item.clone());
            self.order.push(item);
        }
        self
    }

    /// Removes `item`, returning whether it was present.
    pub fn delete<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.presence.remove(item) {
            return false;
        }
        if let Some(index) = self
            .order
            .iter()
            .position(|x| <T as Borrow<Q>>::borrow(x) == item)
        {
            self.order.remove(index);
        }
        true
    }

    /// Returns true if `item` is a member.
    #[must_use]
    pub fn has<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.presence.contains(item)
    }

    /// Members in insertion order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.order
    }

    /// Same as [`values`](Self::values).
    #[must_use]
    pub fn keys(&self) -> &[T] {
        self.values()
    }

    /// Pairs of each member with itself, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.order.iter().map(|x| (x, x))
    }

    /// Calls `f` once per member, in insertion order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.order.iter().for_each(f);
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.presence.clear();
        self.order.clear();
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }
}

impl<T> Default for OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
