//! Bulk loading of a [`SortedList`] from a textual data source.
//!
//! Records are whitespace-separated tokens parsed with the element type's
//! [`FromStr`] implementation. A token that fails to parse is skipped and
//! loading continues with the next one; only I/O errors abort the load.

use crate::SortedList;
use std::io::{self, BufRead};
use std::str::FromStr;

impl<T: FromStr + Ord> SortedList<T> {
    /// Builds a new list by reading records from `reader` until
    /// end-of-input.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying reader. Malformed
    /// records are not errors; they are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::io::Cursor;
    /// use std::iter::FromIterator;
    ///
    /// let input = Cursor::new("5 1 3");
    /// let list: SortedList<i32> = SortedList::build_from(input).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5]);
    /// ```
    pub fn build_from<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut list = SortedList::new();
        list.load_from(reader)?;
        Ok(list)
    }

    /// Reads records from `reader` until end-of-input, inserting each
    /// well-formed one into the list at its sorted position.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying reader. Malformed
    /// records are not errors; they are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    /// use std::io::Cursor;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SortedList::from_iter([2]);
    /// list.load_from(Cursor::new("3 1")).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn load_from<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            for record in line.split_whitespace() {
                if let Ok(element) = record.parse::<T>() {
                    self.insert(element);
                }
            }
        }
        Ok(())
    }
}
