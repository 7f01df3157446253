//! Integration tests for the public API.
//!
//! These go through the `fluent_collection` facade only, the way a dependent
//! crate would.

use expect_test::expect;
use fluent_collection::{Collection, Error, Result, collection};
use pretty_assertions::assert_eq;

#[test]
fn test_cull_odd() {
    let mut c = collection![1, 2, 3, 4, 5];
    c.cull(|x| x % 2 != 0);
    assert_eq!(c, collection![1, 3, 5]);
}

#[test]
fn test_add_at_middle() {
    let mut c = collection![1, 2, 4, 5];
    c.add_at(3, 2).expect("index 2 is in range");
    assert_eq!(c, collection![1, 2, 3, 4, 5]);
}

#[test]
fn test_trim_one_each_side() {
    let mut c = collection![1, 2, 3, 4, 5, 6, 7];
    c.trim(1, 1).expect("trim fits");
    assert_eq!(c, collection![2, 3, 4, 5, 6]);
}

#[test]
fn test_fill_strings() {
    let mut c = Collection::new();
    c.fill(3, "x");
    assert_eq!(c, collection!["x", "x", "x"]);
}

#[test]
fn test_to_string() {
    expect!["[1, 2, 3, 4, 5]"].assert_eq(&collection![1, 2, 3, 4, 5].to_string());
}

#[test]
fn test_split_halves() {
    let halves = collection![1, 2, 3, 4, 5, 6]
        .split(2)
        .expect("split point leaves a non-empty tail");

    let first = halves.first().unwrap();
    let second = halves.last().unwrap();
    assert_eq!(first.first(), Ok(&1));
    assert_eq!(first.last(), Ok(&3));
    assert_eq!(second.first(), Ok(&4));
    assert_eq!(second.last(), Ok(&6));
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn take_middle(c: &mut Collection<char>) -> Result<char> {
        let middle = c.count() / 2;
        c.pop_from(middle)
    }

    fn drain_all(c: &mut Collection<char>) -> Result<Vec<char>> {
        let mut taken = Vec::new();
        loop {
            match take_middle(c) {
                Ok(ch) => taken.push(ch),
                Err(Error::IndexOutOfRange { len: 0, .. }) => return Ok(taken),
                Err(e) => return Err(e),
            }
        }
    }

    let mut c = Collection::with_elements("abcde".chars());
    assert_eq!(drain_all(&mut c), Ok(vec!['c', 'd', 'b', 'e', 'a']));
    assert!(c.is_empty());
    assert_eq!(c.first(), Err(Error::EmptyCollection));
}

#[test]
fn test_last_index() {
    assert_eq!(collection![1, 2, 3, 4, 5].last_index(), Some(4));
    assert_eq!(Collection::<u8>::new().last_index(), None);
}
