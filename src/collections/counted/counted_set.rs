use std::borrow::Borrow;
use std::collections::hash_map::{Entry, HashMap};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::num::NonZeroUsize;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Sub, SubAssign};

use log::{debug, trace};

use super::{CountError, CountOverflow, Distinct, Elements, InsufficientCount, Iter};
use crate::collections::traits::Multiset;
use crate::util::fmt::DebugRaw;

/// An unordered collection of elements which may each occur more than once, relying on the
/// elements implementing [`Hash`].
///
/// Each distinct element is stored once, alongside the number of times it has been inserted (minus
/// the number of times it has been removed). Counts are stored as [`NonZeroUsize`]: when the last
/// occurrence of an element is removed, so is the element.
///
/// None of the basic operations can fail. Removing an element which isn't present does nothing.
///
/// It is a logic error for elements in a CountedSet to be manipulated in a way that changes their
/// hash. Because of this, CountedSet's API prevents mutable access to its elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of distinct elements in the CountedSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `unique_count` | `O(1)` |
/// | `total_count` | `O(n)` |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `count` | `O(1)`* |
/// | `contains` | `O(1)`* |
///
/// \* Amortized, and assuming a reasonable hasher. `insert` may need to grow the backing map.
pub struct CountedSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: HashMap<T, NonZeroUsize, B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> CountedSet<T, B> {
    /// Creates a new, empty CountedSet with the default value for `B`. Memory will be allocated
    /// on the first insertion.
    pub fn new() -> CountedSet<T, B> {
        CountedSet {
            inner: HashMap::with_hasher(B::default()),
        }
    }

    /// Creates a new CountedSet able to hold at least `cap` distinct elements without
    /// reallocating. The default hasher will be used.
    pub fn with_cap(cap: usize) -> CountedSet<T, B> {
        CountedSet {
            inner: HashMap::with_capacity_and_hasher(cap, B::default()),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> CountedSet<T, B> {
    /// Creates a new, empty CountedSet with the provided `hasher`.
    pub fn with_hasher(hasher: B) -> CountedSet<T, B> {
        CountedSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new CountedSet with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> CountedSet<T, B> {
        CountedSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of distinct elements in the CountedSet. Each element is counted once, no
    /// matter how many times it occurs. See [`total_count`](CountedSet::total_count) for the
    /// number of occurrences.
    pub fn unique_count(&self) -> usize {
        self.inner.len()
    }

    /// Returns the number of occurrences of all elements combined, saturating at [`usize::MAX`].
    pub fn total_count(&self) -> usize {
        self.inner.values().fold(0, |total, count| total.saturating_add(count.get()))
    }

    /// Returns true if the CountedSet contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of distinct elements the CountedSet can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the CountedSet's hasher builder.
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Inserts one occurrence of `item`. If `item` wasn't present, it is added with a count of 1.
    ///
    /// As with the standard library, an equal element that is already present isn't replaced.
    ///
    /// The count saturates at [`usize::MAX`] rather than overflowing, see
    /// [`insert_many`](CountedSet::insert_many) for a checked alternative.
    pub fn insert(&mut self, item: T) {
        match self.inner.entry(item) {
            Entry::Occupied(mut entry) => {
                let count = entry.get_mut();
                *count = count.saturating_add(1);
            },
            Entry::Vacant(entry) => {
                entry.insert(NonZeroUsize::MIN);
            },
        }
    }

    /// Inserts `n` occurrences of `item`, returning its new count. Inserting 0 occurrences leaves
    /// the CountedSet unchanged.
    ///
    /// If the count would overflow, the CountedSet is left unchanged and an error is returned.
    pub fn insert_many(&mut self, item: T, n: usize) -> Result<usize, CountOverflow> {
        let Some(additional) = NonZeroUsize::new(n) else {
            return Ok(self.count(&item));
        };

        match self.inner.entry(item) {
            Entry::Occupied(mut entry) => {
                let count = *entry.get();
                let updated = count.checked_add(n).ok_or_else(|| {
                    debug!("rejected insertion of {n} occurrences into a count of {count}");
                    CountOverflow {
                        count: count.get(),
                        additional: n,
                    }
                })?;
                entry.insert(updated);
                Ok(updated.get())
            },
            Entry::Vacant(entry) => {
                entry.insert(additional);
                Ok(n)
            },
        }
    }

    /// Removes one occurrence of `item`. If it was the last occurrence, the element itself is
    /// removed. If `item` isn't present, nothing happens.
    pub fn remove<Q>(&mut self, item: &Q)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(count) = self.inner.get_mut(item) {
            // Counts are non-zero, so this can't underflow.
            match NonZeroUsize::new(count.get() - 1) {
                Some(decremented) => *count = decremented,
                None => {
                    self.inner.remove(item);
                },
            }
        }
    }

    /// Removes exactly `n` occurrences of `item`, returning the number that remain.
    ///
    /// If fewer than `n` occurrences are present, the CountedSet is left unchanged and an error is
    /// returned. Removing 0 occurrences always succeeds.
    pub fn remove_many<Q>(&mut self, item: &Q, n: usize) -> Result<usize, InsufficientCount>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let available = self.count(item);
        let Some(remaining) = available.checked_sub(n) else {
            debug!("rejected removal of {n} occurrences from a count of {available}");
            return Err(InsufficientCount {
                requested: n,
                available,
            });
        };

        self.replace_count(item, remaining);
        Ok(remaining)
    }

    /// Removes every occurrence of `item`, returning how many there were.
    pub fn remove_all<Q>(&mut self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.inner.remove(item).map_or(0, NonZeroUsize::get);
        trace!("removed all {removed} occurrences of an element");
        removed
    }

    /// Sets the number of occurrences of `item` to exactly `count`, returning the previous count.
    /// A `count` of 0 removes the element.
    pub fn set_count(&mut self, item: T, count: usize) -> usize {
        let previous = match NonZeroUsize::new(count) {
            Some(count) => self.inner.insert(item, count),
            None => self.inner.remove(&item),
        };
        previous.map_or(0, NonZeroUsize::get)
    }

    /// Inserts or removes occurrences of `item` depending on the sign of `delta`, returning the new
    /// count. This is a combination of [`insert_many`](CountedSet::insert_many) and
    /// [`remove_many`](CountedSet::remove_many), and fails under the same conditions.
    pub fn adjust(&mut self, item: T, delta: isize) -> Result<usize, CountError> {
        if delta >= 0 {
            Ok(self.insert_many(item, delta.unsigned_abs())?)
        } else {
            Ok(self.remove_many(&item, delta.unsigned_abs())?)
        }
    }

    /// Returns the number of occurrences of `item`, or 0 if it isn't present.
    pub fn count<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(item).map_or(0, |count| count.get())
    }

    /// Returns true if at least one occurrence of `item` is present.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        trace!("clearing {} distinct elements", self.inner.len());
        self.inner.clear()
    }

    /// Reserves capacity for at least `extra` more distinct elements.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Returns an iterator over all entries in the CountedSet, as an element reference and its
    /// count.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over each distinct element, ignoring counts.
    pub fn distinct(&self) -> Distinct<'_, T> {
        Distinct(self.inner.keys())
    }

    /// Returns an iterator over every occurrence, producing each element as many times as it
    /// occurs.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements {
            inner: self.iter(),
            current: None,
            remaining: 0,
        }
    }

    /// Replaces the count of an element, removing it if `count` is 0. Elements which aren't
    /// already present are never added.
    fn replace_count<Q>(&mut self, item: &Q, count: usize)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match NonZeroUsize::new(count) {
            Some(count) => {
                if let Some(existing) = self.inner.get_mut(item) {
                    *existing = count;
                }
            },
            None => {
                self.inner.remove(item);
            },
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Multiset<T> for CountedSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn count(&self, item: &T) -> usize {
        self.inner.get(item).map_or(0, |count| count.get())
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        Iter(self.inner.iter())
    }

    fn unique_count(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for CountedSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for CountedSet<T, B> {
    fn clone(&self) -> Self {
        CountedSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for CountedSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for CountedSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for CountedSet<T, B> {
    fn from(value: [T; N]) -> Self {
        let mut set = CountedSet::with_cap(N);

        for item in value {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for CountedSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = CountedSet::with_cap(iter.size_hint().0);

        for item in iter {
            set.insert(item);
        }

        set
    }
}

/// Collects `(element, count)` pairs. Counts for repeated elements are added together and zero
/// counts are skipped.
impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<(T, usize)> for CountedSet<T, B> {
    fn from_iter<I: IntoIterator<Item = (T, usize)>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = CountedSet::with_cap(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for CountedSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<(T, usize)> for CountedSet<T, B> {
    fn extend<I: IntoIterator<Item = (T, usize)>>(&mut self, iter: I) {
        for (item, count) in iter {
            let Some(count) = NonZeroUsize::new(count) else {
                continue;
            };

            self.inner.entry(item)
                .and_modify(|existing| *existing = existing.saturating_add(count.get()))
                .or_insert(count);
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Add for &CountedSet<T, B> {
    type Output = CountedSet<T, B>;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(rhs).map(|(item, count)| (item.clone(), count)).collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> AddAssign for CountedSet<T, B> {
    fn add_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &CountedSet<T, B> {
    type Output = CountedSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).map(|(item, count)| (item.clone(), count)).collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &CountedSet<T, B> {
    type Output = CountedSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).map(|(item, count)| (item.clone(), count)).collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &CountedSet<T, B> {
    type Output = CountedSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).map(|(item, count)| (item.clone(), count)).collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for CountedSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for (item, count) in rhs {
            let remaining = self.count(&item).saturating_sub(count);
            self.replace_count(&item, remaining);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for CountedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountedSet")
            .field("entries", &DebugRaw(format!(
                "#{{{}}}",
                self.iter()
                    .map(|(item, count)| format!("{item:?}: {count}"))
                    .collect::<Vec<String>>()
                    .join(", ")
            )))
            .field("unique_count", &self.unique_count())
            .field("total_count", &self.total_count())
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for CountedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|(item, count)| format!("{item}: {count}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
