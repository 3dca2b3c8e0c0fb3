use std::cmp;
use std::iter::FusedIterator;

/// A collection which holds each distinct element once, alongside the number of times it occurs.
///
/// Implementors only need to provide counted lookups and entry iteration. Everything else,
/// including the multiset algebra, is derived from those two operations.
///
/// All entries produced by this trait have a count of at least 1, and each distinct element is
/// produced at most once per iterator.
pub trait Multiset<T>: IntoIterator<Item = (T, usize)> + Sized {
    type Iter<'a>: Iterator<Item = (&'a T, usize)> where Self: 'a, T: 'a;

    /// Returns the number of occurrences of `item`, or 0 if it isn't present.
    fn count(&self, item: &T) -> usize;

    /// Returns an iterator over all entries in the multiset, as an element reference and its
    /// count.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if at least one occurrence of `item` is present.
    fn contains(&self, item: &T) -> bool {
        self.count(item) > 0
    }

    /// Returns the number of distinct elements, ignoring how many times each occurs.
    fn unique_count(&self) -> usize {
        self.iter().count()
    }

    /// Returns the sum of all occurrence counts, saturating at [`usize::MAX`].
    fn total_count(&self) -> usize {
        self.iter().fold(0, |total, (_, count)| total.saturating_add(count))
    }

    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Creates a borrowed iterator over every element of `self` or `other`, where counts are
    /// added together. (`self ⊎ other`)
    fn sum<'a>(&'a self, other: &'a Self) -> Sum<'a, Self, T> where T: 'a {
        Sum(Merge::new(self, other, usize::saturating_add))
    }

    /// Creates a borrowed iterator over every element of `self` or `other`, with the greater of
    /// the two counts. (`self ∪ other`)
    fn union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> where T: 'a {
        Union(Merge::new(self, other, cmp::max))
    }

    /// Creates a borrowed iterator over every element in both `self` and `other`, with the lesser
    /// of the two counts. (`self ∩ other`)
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> where T: 'a {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over the occurrences in `self` which aren't matched by an
    /// occurrence in `other`. Elements for which `other` holds as many or more are skipped.
    /// (`self \ other`)
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> where T: 'a {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Returns true if no element occurs more often in `self` than in `other`. (`self ⊆ other`)
    fn is_submultiset(&self, other: &Self) -> bool {
        other.is_supermultiset(self)
    }

    /// Returns true if every element occurs at least as often in `self` as in `other`.
    /// (`self ⊇ other`)
    fn is_supermultiset(&self, other: &Self) -> bool {
        other.iter().all(|(item, count)| self.count(item) >= count)
    }
}

/// Walks all of `lhs`, combining each count with the matching count in `rhs`, then the entries
/// only found in `rhs`.
struct Merge<'a, S: Multiset<T>, T: 'a> {
    lhs: &'a S,
    rhs: &'a S,
    left: S::Iter<'a>,
    right: S::Iter<'a>,
    combine: fn(usize, usize) -> usize,
}

impl<'a, S: Multiset<T>, T: 'a> Merge<'a, S, T> {
    fn new(lhs: &'a S, rhs: &'a S, combine: fn(usize, usize) -> usize) -> Merge<'a, S, T> {
        Merge {
            lhs,
            rhs,
            left: lhs.iter(),
            right: rhs.iter(),
            combine,
        }
    }
}

impl<'a, S: Multiset<T>, T: 'a> Iterator for Merge<'a, S, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((item, count)) = self.left.next() {
            return Some((item, (self.combine)(count, self.rhs.count(item))));
        }

        // Anything shared with lhs has already been combined.
        let lhs = self.lhs;
        self.right.find(|(item, _)| !lhs.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, left_upper) = self.left.size_hint();
        let (_, right_upper) = self.right.size_hint();
        (lower, left_upper.zip(right_upper).and_then(|(l, r)| l.checked_add(r)))
    }
}

pub struct Sum<'a, S: Multiset<T>, T: 'a>(Merge<'a, S, T>);

impl<'a, S: Multiset<T>, T: 'a> Iterator for Sum<'a, S, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, S: Multiset<T>, T: 'a> FusedIterator for Sum<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct Union<'a, S: Multiset<T>, T: 'a>(Merge<'a, S, T>);

impl<'a, S: Multiset<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, S: Multiset<T>, T: 'a> FusedIterator for Union<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct Intersection<'a, S: Multiset<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Multiset<T>, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find_map(|(item, count)| {
            let shared = cmp::min(count, other.count(item));
            (shared > 0).then_some((item, shared))
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Multiset<T>, T: 'a> FusedIterator for Intersection<'a, S, T>
where
    S::Iter<'a>: FusedIterator,
{}

pub struct Difference<'a, S: Multiset<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Multiset<T>, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find_map(|(item, count)| {
            let remaining = count.saturating_sub(other.count(item));
            (remaining > 0).then_some((item, remaining))
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Multiset<T>, T: 'a> FusedIterator for Difference<'a, S, T>
where
    S::Iter<'a>: FusedIterator,
{}
