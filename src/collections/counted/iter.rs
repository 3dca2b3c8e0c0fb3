use std::collections::hash_map::{IntoIter as MapIntoIter, Iter as MapIter, Keys as MapKeys};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use super::CountedSet;

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for CountedSet<T, B> {
    type Item = (T, usize);

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

pub struct IntoIter<T>(
    pub(crate) MapIntoIter<T, NonZeroUsize>,
);

impl<T> Iterator for IntoIter<T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(item, count)| (item, count.get()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a CountedSet<T, B> {
    type Item = (&'a T, usize);

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.iter())
    }
}

pub struct Iter<'a, T>(
    pub(crate) MapIter<'a, T, NonZeroUsize>,
);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(item, count)| (item, count.get()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// Can't derive, that would require T: Clone.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

pub struct Distinct<'a, T>(
    pub(crate) MapKeys<'a, T, NonZeroUsize>,
);

impl<'a, T> Iterator for Distinct<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Distinct<'_, T> {}

impl<T> FusedIterator for Distinct<'_, T> {}

/// An iterator over every occurrence in a [`CountedSet`], where each element is produced once
/// per occurrence. Occurrences of the same element are always produced consecutively.
pub struct Elements<'a, T> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) current: Option<&'a T>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining == 0 {
            let (item, count) = self.inner.next()?;
            self.current = Some(item);
            self.remaining = count;
        }

        self.remaining -= 1;
        self.current
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every remaining entry produces at least one more element. The upper bound would need the
        // counts of all remaining entries, which means walking them.
        let (entries, _) = self.inner.size_hint();
        (self.remaining.saturating_add(entries), None)
    }
}

impl<T> FusedIterator for Elements<'_, T> {}
