use rand::prelude::*;
use seq_list::{Error, List};
use std::iter::FromIterator;

fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// `len()` must agree with a full traversal in both directions.
fn check_len<T>(list: &List<T>) {
    assert_eq!(list.iter().count(), list.len());
    assert_eq!(list.iter().rev().count(), list.len());
    assert_eq!(list.is_empty(), list.len() == 0);
}

#[test]
fn random_operations_match_vec() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut list = List::new();
    let mut model: Vec<i32> = Vec::new();

    for i in 0..5_000 {
        match rng.gen_range(0..10) {
            0 => assert_eq!(list.pop_back().ok(), model.pop()),
            1 => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(list.pop_front().ok(), expected);
            }
            2 => {
                list.push_front(i);
                model.insert(0, i);
            }
            3 => {
                list.push_back(i);
                model.push(i);
            }
            4 => {
                let at = rng.gen_range(0..=model.len());
                list.insert(at, i).unwrap();
                model.insert(at, i);
            }
            5 if !model.is_empty() => {
                let at = rng.gen_range(0..model.len());
                assert_eq!(list.remove(at), Ok(model.remove(at)));
            }
            6 => {
                let start = rng.gen_range(0..=model.len());
                let end = rng.gen_range(start..=model.len().min(start + 4));
                list.erase_range(start..end).unwrap();
                model.drain(start..end);
            }
            7 => {
                let at = rng.gen_range(0..=model.len());
                let items: Vec<i32> = (0..rng.gen_range(0..4)).map(|k| i * 10 + k).collect();
                list.insert_iter(at, items.clone()).unwrap();
                model.splice(at..at, items).for_each(drop);
            }
            8 => {
                let at = rng.gen_range(0..=model.len());
                let mut other = List::from([i, -i]);
                list.splice_at(at, &mut other).unwrap();
                assert!(other.is_empty());
                model.splice(at..at, vec![i, -i]).for_each(drop);
            }
            _ => {
                let at = model.len() + 1;
                assert_eq!(
                    list.insert(at, i).map(|_| ()),
                    Err(Error::OutOfBounds { op: "insert" })
                );
            }
        }
        check_len(&list);
        assert_eq!(list.len(), model.len());
    }
    assert_eq!(to_vec(&list), model);
}

#[test]
fn push_then_pop_restores() {
    let mut list = List::from_iter(0..5);
    let before = list.clone();

    list.push_back(9);
    assert_eq!(list.pop_back(), Ok(9));
    assert_eq!(list, before);

    list.push_front(9);
    assert_eq!(list.pop_front(), Ok(9));
    assert_eq!(list, before);
    check_len(&list);
}

#[test]
fn copy_is_independent() {
    let original = List::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();
    copy.front_mut().unwrap().push('!');
    copy.push_back(String::from("c"));
    assert_eq!(to_vec(&original), vec!["a", "b"]);
    assert_eq!(to_vec(&copy), vec!["a!", "b", "c"]);

    let mut assigned = List::from_iter((0..10).map(|i| i.to_string()));
    assigned.clone_from(&original);
    assert_eq!(assigned, original);
    assigned.clear();
    assert_eq!(original.len(), 2);
}

#[test]
fn merge_sorted() {
    let mut list = List::from([1, 3, 5]);
    let mut other = List::from([2, 4, 6]);
    list.merge(&mut other);
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(list.len(), 6);
    assert!(other.is_empty());
    check_len(&list);
    check_len(&other);
}

#[test]
fn merge_random_sorted_lists() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut left: Vec<u8> = (0..rng.gen_range(0..30)).map(|_| rng.gen_range(0..10)).collect();
        let mut right: Vec<u8> = (0..rng.gen_range(0..30)).map(|_| rng.gen_range(0..10)).collect();
        left.sort_unstable();
        right.sort_unstable();

        let mut list = List::from_iter(left.iter().copied());
        let mut other = List::from_iter(right.iter().copied());
        list.merge(&mut other);

        let mut expected = [left, right].concat();
        expected.sort_unstable();
        assert_eq!(to_vec(&list), expected);
        assert!(other.is_empty());
        check_len(&list);
    }
}

#[test]
fn reverse_order() {
    let mut list = List::from([1, 2, 3]);
    list.reverse();
    assert_eq!(to_vec(&list), vec![3, 2, 1]);
    check_len(&list);

    list.reverse();
    assert_eq!(to_vec(&list), vec![1, 2, 3]);
}

#[test]
fn unique_collapses_runs() {
    let mut list = List::from([1, 1, 2, 2, 2, 3, 1]);
    list.unique();
    assert_eq!(to_vec(&list), vec![1, 2, 3, 1]);
    check_len(&list);
}

#[test]
fn sort_values() {
    let mut list = List::from([5, 3, 1, 4, 1, 5, 9, 2, 6]);
    list.sort();
    assert_eq!(to_vec(&list), vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);

    let sorted = list.clone();
    list.sort();
    assert_eq!(list, sorted);

    let mut empty = List::<i32>::new();
    empty.sort();
    assert!(empty.is_empty());
}

#[test]
fn sort_random_is_stable() {
    let mut rng = StdRng::seed_from_u64(1234);
    for len in [0usize, 1, 2, 7, 8, 9, 31, 200, 1000].iter().copied() {
        let input: Vec<(u8, usize)> = (0..len).map(|i| (rng.gen_range(0..16), i)).collect();
        let mut list = List::from_iter(input.iter().copied());
        list.sort_by(|a, b| a.0.cmp(&b.0));

        let mut expected = input;
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(to_vec(&list), expected);
        check_len(&list);
    }
}

#[test]
fn splice_before_position() {
    let mut list = List::from([1, 2, 3]);
    let mut other = List::from([7, 8]);
    let mut cursor = list.cursor_mut(1).unwrap();
    cursor.splice(&mut other);
    assert_eq!(cursor.current(), Some(&2));
    assert_eq!(to_vec(&list), vec![1, 7, 8, 2, 3]);
    assert_eq!(list.len(), 5);
    assert!(other.is_empty());
}

#[test]
fn equality() {
    assert!(List::from([1, 2, 3]) == List::from([1, 2, 3]));
    assert!(!(List::from([1, 2, 3]) == List::from([1, 2])));
    assert!(List::from([1, 2, 3]) != List::from([1, 2]));
    assert!(List::from([1, 2, 3]) != List::from([1, 2, 4]));
}

#[test]
fn erase_range_from_cursor() {
    let mut list = List::from([1, 2, 3, 4, 5]);
    let mut cursor = list.cursor_start_mut();
    cursor.move_next().unwrap();
    assert_eq!(cursor.erase_to(3), Ok(2));
    assert_eq!(cursor.current(), Some(&4));
    assert_eq!(to_vec(&list), vec![1, 4, 5]);
    assert_eq!(list.len(), 3);
}

#[test]
fn cursor_bounds_errors() {
    let list = List::from([1, 2]);
    let mut cursor = list.cursor_end();
    assert_eq!(cursor.move_next(), Err(Error::OutOfBounds { op: "move_next" }));

    let mut cursor = list.cursor_start();
    assert_eq!(cursor.move_prev(), Err(Error::OutOfBounds { op: "move_prev" }));

    let mut empty = List::<i32>::new();
    assert_eq!(empty.front(), Err(Error::Empty { op: "front" }));
    assert_eq!(empty.back(), Err(Error::Empty { op: "back" }));
    assert_eq!(empty.pop_back(), Err(Error::Empty { op: "pop_back" }));
    assert_eq!(empty.pop_front(), Err(Error::Empty { op: "pop_front" }));
    assert!(empty.cursor_end_mut().erase().is_err());
}

#[test]
fn drop_releases_every_element() {
    use std::rc::Rc;

    let token = Rc::new(());
    let mut list = List::new();
    for _ in 0..10 {
        list.push_back(Rc::clone(&token));
    }
    let mut other = list.split_off(4).unwrap();
    list.erase_range(0..2).unwrap();
    list.merge_by(&mut other, |_, _| std::cmp::Ordering::Equal);
    assert_eq!(Rc::strong_count(&token), 9);
    drop(list);
    assert_eq!(Rc::strong_count(&token), 1);
}
