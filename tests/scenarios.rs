//! Concrete end-to-end scenarios: rendering, merging, intersecting and
//! bulk loading small known lists.

use rstest::rstest;
use sorted_list::SortedList;
use std::fmt::{self, Display, Formatter};
use std::io::Cursor;

/// Renders as the number followed by a space, the way the record types
/// this container was designed for print themselves; the container adds
/// no separators of its own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Spaced(i32);

impl Display for Spaced {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.0)
    }
}

fn list_of(values: &[i32]) -> SortedList<i32> {
    values.iter().copied().collect()
}

fn values_of(list: &SortedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[rstest]
#[case(vec![5, 1, 3], "1 3 5")]
#[case(vec![2, 2, 1], "1 2 2")]
#[case(vec![], "")]
fn inserted_elements_render_in_ascending_order(#[case] input: Vec<i32>, #[case] rendered: &str) {
    let mut list = SortedList::new();
    for value in input {
        list.insert(Spaced(value));
    }
    assert_eq!(list.to_string().trim_end(), rendered);
}

#[rstest]
#[case(vec![1, 3, 5], vec![2, 4], vec![1, 2, 3, 4, 5])]
#[case(vec![], vec![2, 4], vec![2, 4])]
#[case(vec![1, 3], vec![], vec![1, 3])]
#[case(vec![], vec![], vec![])]
#[case(vec![1, 1, 2], vec![1, 3], vec![1, 1, 1, 2, 3])]
fn merge_combines_chains_and_empties_the_source(
    #[case] first: Vec<i32>,
    #[case] second: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    let mut list = list_of(&first);
    let mut other = list_of(&second);

    list.merge(&mut other);

    assert_eq!(values_of(&list), expected);
    assert!(other.is_empty());
    #[cfg(feature = "length")]
    assert_eq!(list.len(), first.len() + second.len());
}

#[rstest]
#[case(vec![1, 2, 3, 4], vec![2, 4, 6], vec![2, 4])]
#[case(vec![1, 3, 5], vec![2, 4, 6], vec![])]
#[case(vec![1, 1, 2], vec![1, 1, 3], vec![1, 1])]
#[case(vec![], vec![1, 2], vec![])]
fn intersection_collects_common_elements_without_consuming_sources(
    #[case] first: Vec<i32>,
    #[case] second: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    let first_list = list_of(&first);
    let second_list = list_of(&second);

    let common = first_list.intersection(&second_list);

    assert_eq!(values_of(&common), expected);
    assert_eq!(values_of(&first_list), first);
    assert_eq!(values_of(&second_list), second);
}

#[rstest]
#[case("5 1 3", vec![1, 3, 5])]
#[case("3 oops 1 4x 2", vec![1, 2, 3])]
#[case("", vec![])]
fn loader_inserts_well_formed_records(#[case] input: &str, #[case] expected: Vec<i32>) {
    let list = SortedList::<i32>::build_from(Cursor::new(input)).unwrap();
    assert_eq!(values_of(&list), expected);
}
