use crate::list::{Node, SortedList};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr;

impl<T: PartialEq> PartialEq for SortedList<T> {
    /// Two lists are equal when they hold equal elements at every
    /// position. A list compared with itself is equal without walking
    /// the chain.
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SortedList<T> {}

impl<T: PartialOrd> PartialOrd for SortedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for SortedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for SortedList<T> {
    /// Deep copy: a new chain of nodes, each holding a clone of the
    /// source's element. The source is left untouched and its order is
    /// preserved, so the copy is built by appending at the tail in a
    /// single pass rather than by repeated sorted insertion.
    fn clone(&self) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for element in self.iter() {
            tail = &mut tail.insert(Node::boxed(element.clone())).next;
        }
        #[cfg(feature = "length")]
        {
            list.len = self.len;
        }
        list
    }
}

impl<T: Hash> Hash for SortedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> SortedList<T> {
    /// Merges `other` into `self` by relinking nodes; both chains must
    /// already be sorted, which the container guarantees. After the call,
    /// `self` is the stable sorted merge of both chains and `other` is
    /// empty. No element is copied or reallocated.
    ///
    /// Tie-break contract: when the two candidate heads compare equal,
    /// the node from `self` is taken, so equal keys from `self` precede
    /// equal keys from `other` in the result.
    ///
    /// A merge whose destination is a third, distinct list is written as
    /// an assignment, which releases the destination's previous chain:
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut first = SortedList::from_iter([1, 3]);
    /// let mut second = SortedList::from_iter([2, 4]);
    /// let mut destination = SortedList::from_iter([9]);
    /// assert_eq!(destination.front(), Some(&9));
    ///
    /// first.merge(&mut second);
    /// destination = first; // the old chain of `destination` is released here
    ///
    /// assert_eq!(Vec::from_iter(&destination), vec![&1, &2, &3, &4]);
    /// assert!(second.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m* + *n*) time and *O*(1)
    /// memory; once one chain is exhausted the remainder of the other is
    /// spliced on wholesale.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SortedList::from_iter([1, 3, 5]);
    /// let mut other = SortedList::from_iter([2, 4]);
    ///
    /// list.merge(&mut other);
    ///
    /// assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4, &5]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        #[cfg(feature = "length")]
        {
            self.len += std::mem::take(&mut other.len);
        }
        let mut first = self.head.take();
        let mut second = other.head.take();
        let mut tail = &mut self.head;
        loop {
            match (first, second) {
                (None, None) => break,
                // one side exhausted: splice the remaining chain wholesale
                (Some(node), None) | (None, Some(node)) => {
                    *tail = Some(node);
                    break;
                }
                (Some(mut a), Some(mut b)) => {
                    if b.element < a.element {
                        second = b.next.take();
                        first = Some(a);
                        tail = &mut tail.insert(b).next;
                    } else {
                        // ties land here: the first source wins
                        first = a.next.take();
                        second = Some(b);
                        tail = &mut tail.insert(a).next;
                    }
                }
            }
        }
    }

    /// Returns a new list containing one freshly allocated node per
    /// element position present in both `self` and `other`, walking both
    /// sorted chains with two cursors. Neither source is modified; the
    /// elements of the result are clones.
    ///
    /// Duplicates intersect by multiplicity: a value occurring twice in
    /// both sources occurs twice in the result.
    ///
    /// Either source may be the same list as the other
    /// (`list.intersection(&list)` clones the whole list), and replacing
    /// a source with the result is an assignment:
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SortedList::from_iter([1, 2, 3]);
    /// let other = SortedList::from_iter([2, 3, 4]);
    ///
    /// list = list.intersection(&other);
    ///
    /// assert_eq!(Vec::from_iter(&list), vec![&2, &3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m* + *n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let first = SortedList::from_iter([1, 2, 3, 4]);
    /// let second = SortedList::from_iter([2, 4, 6]);
    ///
    /// let common = first.intersection(&second);
    ///
    /// assert_eq!(Vec::from_iter(&common), vec![&2, &4]);
    /// // the sources are unchanged
    /// assert_eq!(Vec::from_iter(&first), vec![&1, &2, &3, &4]);
    /// assert_eq!(Vec::from_iter(&second), vec![&2, &4, &6]);
    /// ```
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Ord + Clone,
    {
        let mut result = Self::new();
        #[cfg(feature = "length")]
        let mut len = 0;
        let mut tail = &mut result.head;
        let mut first = self.head.as_deref();
        let mut second = other.head.as_deref();
        while let (Some(a), Some(b)) = (first, second) {
            match a.element.cmp(&b.element) {
                Ordering::Less => first = a.next.as_deref(),
                Ordering::Greater => second = b.next.as_deref(),
                Ordering::Equal => {
                    tail = &mut tail.insert(Node::boxed(a.element.clone())).next;
                    #[cfg(feature = "length")]
                    {
                        len += 1;
                    }
                    first = a.next.as_deref();
                    second = b.next.as_deref();
                }
            }
        }
        #[cfg(feature = "length")]
        {
            result.len = len;
        }
        result
    }
}
