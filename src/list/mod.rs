use std::fmt::{self, Debug, Display, Formatter};

use crate::{IntoIter, Iter};

pub mod iterator;

mod algorithms;

/// The `SortedList` is a singly-linked list with owned nodes that keeps its
/// elements in non-decreasing order, as defined by `T`'s [`Ord`]. Inserting,
/// searching and removing all take *O*(*n*) time; the order invariant makes
/// two-list merge and intersection single linear passes.
///
/// The `SortedList` contains:
/// - a `head` link owning the first node (or `None` when the list is empty;
///   there is no sentinel node);
/// - a length field `len` indicating the length of the list. It can be
///   disabled by disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// sorted_list = { default-features = false }
/// ```
///
/// # Naming Conventions
///
/// - `cursor`: a `&mut Link<T>` pointing at the link *slot* before a node,
///   so a node can be unlinked or a new node linked in without a separate
///   predecessor pointer;
/// - `chain`: the sequence of nodes reachable from a link.
pub struct SortedList<T> {
    head: Link<T>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

/// A link slot: either owns the next node of the chain, or marks its end.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Create a boxed node with no successor.
    pub(crate) fn boxed(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            next: None,
        })
    }
}

impl<T> SortedList<T> {
    /// Create an empty `SortedList`.
    ///
    /// # Examples
    /// ```
    /// use sorted_list::SortedList;
    /// let list: SortedList<u32> = SortedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `SortedList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert!(list.is_empty());
    ///
    /// list.insert("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `SortedList`. Enabled by `feature = "length"`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// #![cfg(feature = "length")]
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::new();
    ///
    /// list.insert(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.insert(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `SortedList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::new();
    ///
    /// list.insert(2);
    /// list.insert(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// #[cfg(feature = "length")]
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Inserts an element at its sorted position, taking ownership of it.
    ///
    /// The new node is linked before the first element that is not less
    /// than the new one, so an element equal to elements already present
    /// is placed *before* them. This tie position is a stable contract.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SortedList::new();
    ///
    /// list.insert(3);
    /// list.insert(1);
    /// list.insert(2);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, element: T)
    where
        T: Ord,
    {
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .map_or(false, |node| node.element < element)
        {
            cursor = &mut cursor.as_mut().unwrap().next;
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { element, next }));
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Returns a reference to the first element equal to `query`, or `None`
    /// if there is no such element.
    ///
    /// The scan walks the whole chain in order and stops at the first
    /// match; it does not exploit the ordering, since `==` need not agree
    /// with `<` for every caller-supplied element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = SortedList::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.retrieve(&2), Some(&2));
    /// assert_eq!(list.retrieve(&4), None);
    /// ```
    pub fn retrieve(&self, query: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|&element| element == query)
    }

    /// Removes the first element equal to `query` and returns it, or
    /// returns `None` and leaves the list unchanged.
    ///
    /// The node shell is released; ownership of the element passes to the
    /// caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SortedList::from_iter([1, 2, 2, 3]);
    ///
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3]);
    ///
    /// assert_eq!(list.remove(&4), None);
    /// ```
    pub fn remove(&mut self, query: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return None,
                Some(node) if node.element == *query => break,
                Some(node) => cursor = &mut node.next,
            }
        }
        let node = cursor.take()?;
        let Node { element, next } = *node;
        *cursor = next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(element)
    }

    /// Returns `true` if the `SortedList` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = SortedList::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty. The front element is a minimum of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.insert(2);
    /// list.insert(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Removes the front element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.insert(3);
    /// list.insert(1);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { element, next } = *node;
        self.head = next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(element)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = SortedList::from_iter([2, 0, 1]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Debug> Debug for SortedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Streams every element in order using the element's own [`Display`].
///
/// The container contributes no formatting of its own: no separators,
/// headers, or node punctuation. Element types that want spacing must
/// render it themselves.
///
/// # Examples
///
/// ```
/// use sorted_list::SortedList;
/// use std::iter::FromIterator;
///
/// let list = SortedList::from_iter([3, 1, 2]);
/// assert_eq!(list.to_string(), "123");
/// ```
impl<T: Display> Display for SortedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for element in self.iter() {
            element.fmt(f)?;
        }
        Ok(())
    }
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SortedList<T> {
    /// Releases every owned node and its element in chain order.
    ///
    /// The chain is unlinked node by node rather than relying on the
    /// recursive drop glue of `Box<Node<T>>`, so a long list cannot
    /// overflow the stack when dropped.
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `SortedList` and its iterators are covariant in their type
// parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: SortedList<&'static str>) -> SortedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
