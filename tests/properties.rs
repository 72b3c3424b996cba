//! Property tests for the sorted list invariants: ordering after every
//! insertion, deep-copy independence, merge totality, intersection
//! correctness, and remove/retrieve duality.

use proptest::prelude::*;
use sorted_list::SortedList;
use std::collections::HashMap;

fn collected(list: &SortedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

fn is_sorted(list: &SortedList<i32>) -> bool {
    let elements = collected(list);
    elements.windows(2).all(|pair| pair[0] <= pair[1])
}

fn counts(values: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0_usize) += 1;
    }
    counts
}

/// Independent multiset-intersection oracle: each value appears
/// min(occurrences in `a`, occurrences in `b`) times, in ascending order.
fn expected_intersection(a: &[i32], b: &[i32]) -> Vec<i32> {
    let counts_a = counts(a);
    let counts_b = counts(b);
    let mut values: Vec<i32> = counts_a.keys().copied().collect();
    values.sort_unstable();
    let mut result = Vec::new();
    for value in values {
        let common = counts_a[&value].min(counts_b.get(&value).copied().unwrap_or(0));
        result.extend(std::iter::repeat(value).take(common));
    }
    result
}

proptest! {
    /// The list is sorted after every single insertion, for any insertion
    /// sequence, and ends up holding exactly the input multiset.
    #[test]
    fn insertion_preserves_order(elements in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = SortedList::new();
        for &element in &elements {
            list.insert(element);
            prop_assert!(is_sorted(&list), "list out of order after inserting {}", element);
        }
        #[cfg(feature = "length")]
        prop_assert_eq!(list.len(), elements.len());

        let mut expected = elements.clone();
        expected.sort_unstable();
        prop_assert_eq!(collected(&list), expected);
    }

    /// A clone compares equal to its source, and mutating the clone never
    /// changes the source.
    #[test]
    fn clone_round_trip_and_independence(
        elements in prop::collection::vec(any::<i32>(), 0..64),
        extra: i32
    ) {
        let list: SortedList<i32> = elements.iter().copied().collect();
        let mut copy = list.clone();
        prop_assert_eq!(&copy, &list);

        let before = collected(&list);
        copy.insert(extra);
        copy.pop_front();
        prop_assert_eq!(collected(&list), before, "mutating the copy changed the source");
    }

    /// Merging two lists of sizes m and n yields a sorted list of size
    /// m + n holding both multisets, and the consumed source is empty.
    #[test]
    fn merge_totality(
        a in prop::collection::vec(any::<i32>(), 0..64),
        b in prop::collection::vec(any::<i32>(), 0..64)
    ) {
        let mut list: SortedList<i32> = a.iter().copied().collect();
        let mut other: SortedList<i32> = b.iter().copied().collect();

        list.merge(&mut other);

        prop_assert!(other.is_empty());
        prop_assert!(is_sorted(&list));
        #[cfg(feature = "length")]
        prop_assert_eq!(list.len(), a.len() + b.len());

        let mut expected: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        expected.sort_unstable();
        prop_assert_eq!(collected(&list), expected);
    }

    /// Merging never reorders elements beyond the documented tie rule:
    /// merging with an empty list leaves the list exactly as it was.
    #[test]
    fn merge_with_empty_is_identity(a in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list: SortedList<i32> = a.iter().copied().collect();
        let before = collected(&list);

        let mut empty = SortedList::new();
        list.merge(&mut empty);
        prop_assert_eq!(collected(&list), before.clone());

        let mut receiver = SortedList::new();
        receiver.merge(&mut list);
        prop_assert!(list.is_empty());
        prop_assert_eq!(collected(&receiver), before);
    }

    /// Every element of the intersection appears in both sources, with
    /// matching multiplicity, and neither source is modified.
    #[test]
    fn intersection_correctness(
        a in prop::collection::vec(-20..20i32, 0..64),
        b in prop::collection::vec(-20..20i32, 0..64)
    ) {
        let first: SortedList<i32> = a.iter().copied().collect();
        let second: SortedList<i32> = b.iter().copied().collect();
        let first_before = collected(&first);
        let second_before = collected(&second);

        let common = first.intersection(&second);

        prop_assert!(is_sorted(&common));
        prop_assert_eq!(collected(&common), expected_intersection(&a, &b));
        prop_assert_eq!(collected(&first), first_before);
        prop_assert_eq!(collected(&second), second_before);
    }

    /// A list intersected with itself is a copy of itself.
    #[test]
    fn intersection_with_itself(a in prop::collection::vec(any::<i32>(), 0..64)) {
        let list: SortedList<i32> = a.iter().copied().collect();
        prop_assert_eq!(list.intersection(&list), list);
    }

    /// If retrieve finds a match, remove succeeds and takes exactly one
    /// occurrence; if retrieve fails, remove fails and the list is
    /// unchanged. The list stays sorted either way.
    #[test]
    fn remove_retrieve_duality(
        elements in prop::collection::vec(-5..5i32, 0..32),
        query in -5..5i32
    ) {
        let mut list: SortedList<i32> = elements.iter().copied().collect();
        let occurrences = elements.iter().filter(|&&e| e == query).count();

        match list.retrieve(&query) {
            Some(&found) => {
                prop_assert_eq!(found, query);
                prop_assert_eq!(list.remove(&query), Some(query));
                let remaining = collected(&list).iter().filter(|&&e| e == query).count();
                prop_assert_eq!(remaining, occurrences - 1);
                prop_assert!(is_sorted(&list));
            }
            None => {
                prop_assert_eq!(occurrences, 0);
                let before = collected(&list);
                prop_assert_eq!(list.remove(&query), None);
                prop_assert_eq!(collected(&list), before);
            }
        }
    }
}
