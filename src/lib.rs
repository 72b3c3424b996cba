//! This crate provides a singly-linked, always-sorted list with owned
//! nodes.
//!
//! The [`SortedList`] keeps its elements in non-decreasing order, as
//! defined by the element type's [`Ord`]. Every element is placed by
//! [`insert`], searched by [`retrieve`] and unlinked by [`remove`] in
//! *O*(*n*) time; because both chains are always sorted, merging two
//! lists and intersecting two lists are single linear passes.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sorted_list::SortedList;
//! use std::iter::FromIterator;
//!
//! let mut list = SortedList::new();
//!
//! list.insert(5);
//! list.insert(1);
//! list.insert(3);
//! assert_eq!(Vec::from_iter(&list), vec![&1, &3, &5]);
//!
//! let mut other = SortedList::from_iter([2, 4]);
//! list.merge(&mut other); // relinks nodes, no elements are copied
//! assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4, &5]);
//! assert!(other.is_empty());
//!
//! assert_eq!(list.remove(&4), Some(4));
//! assert_eq!(list.retrieve(&3), Some(&3));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                ╔═══════════╗
//!    ║ element T ║           ║ element T ║                ║ element T ║
//! ┌→ ╟───────────╢ ────────→ ╟───────────╢ ─→ ┄┄ ───────→ ╟───────────╢ ─→ None
//! │  ║   next    ║           ║   next    ║   Node 2, ...  ║   next    ║
//! │  ╚═══════════╝           ╚═══════════╝                ╚═══════════╝
//! │      Node 0                  Node 1                     Node n - 1
//! │
//! ╔═══════════╗
//! ║   head    ║
//! ╟───────────╢
//! ║   (len)   ║
//! ╚═══════════╝
//!  SortedList
//! ```
//! The `SortedList` contains:
//! - a link `head` that owns the first node, or `None` when the list is
//!   empty (there is no sentinel node);
//! - a length field `len` indicating the length of the list. It can be
//!   disabled by disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! sorted_list = { default-features = false }
//! ```
//!
//! Each node of the list `SortedList<T>` is allocated on the heap and is
//! owned by exactly one link: its predecessor's `next`, or `head` for the
//! first node. Walking the chain from `head` visits the elements in
//! non-decreasing order.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IntoIter`] iterators,
//! which yield the elements in ascending order and are fused. There is no
//! mutable iterator: handing out `&mut T` could silently break the order
//! invariant, so elements can only be replaced by removing and
//! re-inserting them.
//!
//! ## Examples
//!
//! ```
//! use sorted_list::SortedList;
//! use std::iter::FromIterator;
//!
//! let list = SortedList::from_iter([2, 3, 1]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! ```
//!
//! # Merging and Intersecting
//!
//! [`merge`] splices the nodes of another list into this one; it is
//! destructive on the other source, which ends up empty. When the two
//! candidate heads compare equal, the node from `self` is taken, so equal
//! keys from the first source precede equal keys from the second.
//!
//! [`intersection`] is non-destructive: it walks both chains read-only
//! and builds a new list of freshly allocated nodes holding clones of the
//! elements present in both.
//!
//! ```
//! use sorted_list::SortedList;
//! use std::iter::FromIterator;
//!
//! let first = SortedList::from_iter([1, 2, 3, 4]);
//! let second = SortedList::from_iter([2, 4, 6]);
//!
//! let common = first.intersection(&second);
//! assert_eq!(Vec::from_iter(common), vec![2, 4]);
//! ```
//!
//! # Bulk Loading
//!
//! A list can be filled from a textual source with
//! [`build_from`]/[`load_from`], which parse whitespace-separated records
//! via [`FromStr`] and skip malformed ones.
//!
//! [`SortedList`]: crate::SortedList
//! [`Iter`]: crate::Iter
//! [`IntoIter`]: crate::IntoIter
//! [`insert`]: crate::SortedList::insert
//! [`retrieve`]: crate::SortedList::retrieve
//! [`remove`]: crate::SortedList::remove
//! [`merge`]: crate::SortedList::merge
//! [`intersection`]: crate::SortedList::intersection
//! [`build_from`]: crate::SortedList::build_from
//! [`load_from`]: crate::SortedList::load_from
//! [`FromStr`]: std::str::FromStr

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::SortedList;

pub mod list;

mod loader;
