use crate::list::{Node, SortedList};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `SortedList`, in ascending order.
///
/// The iterator holds the next node to visit, or `None` when the chain is
/// exhausted. The borrow of the node chain keeps the list immutable for
/// the iterator's lifetime.
///
/// # Examples
///
/// ```compile_fail
/// use sorted_list::SortedList;
/// use std::iter::FromIterator;
///
/// let mut list = SortedList::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.insert(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    node: Option<&'a Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a SortedList<T>) -> Self {
        Self {
            node: list.head.as_deref(),
            #[cfg(feature = "length")]
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node,
            #[cfg(feature = "length")]
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let mut node = self.node;
        while let Some(current) = node {
            f.field(&current.element);
            node = current.next.as_deref();
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the current element and advance to its successor, or return
    /// `None` if the chain is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.node?;
        self.node = current.next.as_deref();
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `SortedList`, in ascending
/// order.
///
/// This `struct` is created by the [`into_iter`] method on [`SortedList`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: SortedList::into_iter
pub struct IntoIter<T> {
    list: SortedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    /// Builds a sorted list from elements in any order, each placed by
    /// [`insert`](SortedList::insert); ties keep the insertion tie rule.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SortedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.insert(element));
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
