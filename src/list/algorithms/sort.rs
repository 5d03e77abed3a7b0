//! Node-range merge sort. Ranges are half-open `start..end` runs of linked
//! nodes; `end` may be the tail sentinel. Nodes are relinked, never copied
//! or allocated.

use crate::list::{connect, next_of, prev_of, List, Node};
use std::ptr::NonNull;

const INSERTION_SORT_THRESHOLD: usize = 8;

pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let (start, end) = (list.front_node(), list.tail_node());
    // SAFETY: `front..tail` spans every real node of the list.
    unsafe {
        match list.len() {
            0 | 1 => {}
            len if len <= INSERTION_SORT_THRESHOLD => {
                insertion_sort_range(start, end, &mut less);
            }
            _ => {
                merge_sort_range(start, end, &mut less);
            }
        }
    }
}

/// Merge the sorted run `mid..end` into the sorted run `start..mid`, keeping
/// nodes of the left run ahead of equal ones from the right run.
///
/// Both runs must be non-empty and adjacent. Returns the new first node of
/// the merged range.
pub(crate) unsafe fn merge_range<T, F>(
    mut start: NonNull<Node<T>>,
    mid: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    // `start..to_merge` is merged, `to_merge..end` is still waiting. Each
    // round finds the first merged node greater than `*to_merge`, then moves
    // the whole waiting run that is less than it in one relink.
    let (mut merged, left_back, mut to_merge) = (start, prev_of(mid), mid);
    // Once the first waiting node is not less than the left back, the rest
    // is already in place.
    while to_merge != end && less(element(to_merge), element(left_back)) {
        while merged != to_merge && !less(element(to_merge), element(merged)) {
            merged = next_of(merged);
        }
        if merged == to_merge {
            break;
        }

        let mut run_end = next_of(to_merge);
        while run_end != end && less(element(run_end), element(merged)) {
            run_end = next_of(run_end);
        }
        if merged == start {
            start = to_merge;
        }
        move_nodes(to_merge, prev_of(run_end), merged);
        to_merge = run_end;
    }
    start
}

/// Return the middle node of `start..end` and the length of the range.
unsafe fn mid_of_range<T>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
) -> (NonNull<Node<T>>, usize) {
    let mut mid = start;
    let mut len = 0;
    while start != end {
        len += 1;
        start = next_of(start);
        if start != end {
            len += 1;
            start = next_of(start);
            mid = next_of(mid);
        }
    }
    (mid, len)
}

unsafe fn merge_sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut mid, len) = mid_of_range(start, end);
    if len <= INSERTION_SORT_THRESHOLD {
        return insertion_sort_range(start, end, less);
    }

    // Both halves hold at least `INSERTION_SORT_THRESHOLD / 2` nodes here.
    start = merge_sort_range(start, mid, less);
    mid = merge_sort_range(mid, end, less);
    merge_range(start, mid, end, less)
}

unsafe fn insertion_sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    if start == end {
        return start;
    }
    let (mut sorted_back, mut to_sort) = (start, next_of(start));
    loop {
        // Skip the nodes that already extend the sorted prefix.
        while to_sort != end && !less(element(to_sort), element(sorted_back)) {
            sorted_back = to_sort;
            to_sort = next_of(to_sort);
        }
        if to_sort == end {
            break;
        }
        let mut sorted = start;
        while sorted != to_sort && !less(element(to_sort), element(sorted)) {
            sorted = next_of(sorted);
        }
        if sorted == to_sort {
            // `less` disagreed with itself; leave the node in place.
            sorted_back = to_sort;
            to_sort = next_of(to_sort);
            continue;
        }
        if sorted == start {
            start = to_sort;
        }
        let next = next_of(to_sort);
        move_node(std::mem::replace(&mut to_sort, next), sorted);
    }
    start
}

#[inline]
unsafe fn element<'a, T>(node: NonNull<Node<T>>) -> &'a T {
    &(*node.as_ptr()).element
}

unsafe fn move_node<T>(from: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    move_nodes(from, from, to);
}

/// Unlink `from_front..=from_back` and relink it right before `to`.
unsafe fn move_nodes<T>(
    from_front: NonNull<Node<T>>,
    from_back: NonNull<Node<T>>,
    to: NonNull<Node<T>>,
) {
    connect(prev_of(from_front), next_of(from_back));
    connect(prev_of(to), from_front);
    connect(from_back, to);
}
