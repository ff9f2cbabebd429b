//! Single-pass grouping into an insertion-ordered table.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use super::hash::{GroupHasher, HashMap};
use crate::producer::Continuable;
use crate::reduce;

// =============================================================================
// GroupTable
// =============================================================================

/// An insertion-ordered mapping from group keys to aggregated values.
///
/// Keys appear in the order in which they were first seen. The table is
/// returned by value and owned by the caller.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let by_length = from_iter(["ab", "c", "de", "f", "ghi"]).group_by(|word| word.len());
/// assert_eq!(by_length.get(&2), Some(&vec!["ab", "de"]));
/// assert_eq!(by_length.keys().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
/// ```
#[derive(Clone)]
pub struct GroupTable<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> GroupTable<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::with_hasher(GroupHasher::default()),
        }
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns `true` if the table has a group for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K, V> GroupTable<K, V> {
    /// Returns the number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the groups in first-seen order.
    #[inline]
    pub fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Iterates over `(key, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates over the keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in first-seen key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Consumes the table, returning its groups in first-seen order.
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K, V> Default for GroupTable<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for GroupTable<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for GroupTable<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for GroupTable<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for GroupTable<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Builds a table from pairs; a repeated key keeps its first position
    /// and takes the last value.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut table = Self::new();
        for (key, value) in pairs {
            match table.index.get(&key) {
                Some(&position) => table.entries[position].1 = value,
                None => {
                    table.index.insert(key.clone(), table.entries.len());
                    table.entries.push((key, value));
                }
            }
        }
        table
    }
}

impl<K, V> IntoIterator for GroupTable<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a GroupTable<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Grouping
// =============================================================================

/// Groups the elements of `producer` by `key`, seeding each group with
/// `seed(element)` and folding later elements in with `combine`.
///
/// The producer is driven exactly once.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
/// use continuable::structure::group_by_reduce_with;
///
/// let counts = group_by_reduce_with(
///     &from_iter("hello".chars()),
///     |c| *c,
///     |_| 1,
///     |count, _| count + 1,
/// );
/// assert_eq!(counts.get(&'l'), Some(&2));
/// assert_eq!(counts.keys().collect::<String>(), "helo");
/// ```
pub fn group_by_reduce_with<C, K, V, KeyFn, SeedFn, CombineFn>(
    producer: &C,
    mut key: KeyFn,
    mut seed: SeedFn,
    mut combine: CombineFn,
) -> GroupTable<K, V>
where
    C: Continuable + ?Sized,
    K: Hash + Eq + Clone,
    KeyFn: FnMut(&C::Item) -> K,
    SeedFn: FnMut(C::Item) -> V,
    CombineFn: FnMut(V, C::Item) -> V,
{
    let mut index = HashMap::with_hasher(GroupHasher::default());
    let mut keys: Vec<K> = Vec::new();
    let mut slots: Vec<Option<V>> = Vec::new();

    let flow = reduce::try_for_each(producer, |item| {
        let group = key(&item);
        if let Some(&position) = index.get(&group) {
            let slot: &mut Option<V> = &mut slots[position];
            *slot = slot.take().map(|value| combine(value, item));
        } else {
            index.insert(group.clone(), keys.len());
            keys.push(group);
            slots.push(Some(seed(item)));
        }
        ControlFlow::Continue(())
    });
    reduce::settle("group_by", flow);

    GroupTable {
        entries: keys.into_iter().zip(slots.into_iter().flatten()).collect(),
        index,
    }
}

/// Groups the elements of `producer` by `key`, combining elements of a group
/// left to right with `combine`. The first element of a group is its seed.
pub fn group_by_reduce<C, K, KeyFn, CombineFn>(
    producer: &C,
    key: KeyFn,
    combine: CombineFn,
) -> GroupTable<K, C::Item>
where
    C: Continuable + ?Sized,
    K: Hash + Eq + Clone,
    KeyFn: FnMut(&C::Item) -> K,
    CombineFn: FnMut(C::Item, C::Item) -> C::Item,
{
    group_by_reduce_with(producer, key, |item| item, combine)
}

/// Groups the elements of `producer` into vectors by `key`.
pub fn group_by<C, K, KeyFn>(producer: &C, key: KeyFn) -> GroupTable<K, Vec<C::Item>>
where
    C: Continuable + ?Sized,
    K: Hash + Eq + Clone,
    KeyFn: FnMut(&C::Item) -> K,
{
    group_by_reduce_with(
        producer,
        key,
        |item| vec![item],
        |mut group, item| {
            group.push(item);
            group
        },
    )
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for GroupTable<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct GroupTableVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> (K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for GroupTableVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq + Clone,
    V: serde::Deserialize<'de>,
{
    type Value = GroupTable<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of groups")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(pair) = access.next_entry()? {
            pairs.push(pair);
        }
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for GroupTable<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq + Clone,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(GroupTableVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
