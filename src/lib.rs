//! This crate provides a doubly-linked sequence container with owned nodes,
//! bracketed by a head and a tail sentinel.
//!
//! The [`List`] allows inserting, removing elements at any known position in
//! constant time. In compromise, reaching a position by its index takes *O*(*n*)
//! time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use seq_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&0));
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 3, 4]));
//!
//! cursor.seek_to(3).unwrap(); // move the cursor to position 3, and erase it.
//! assert_eq!(cursor.erase(), Ok(3));
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 4]));
//!
//! list.push_front(5);
//! assert_eq!(list, List::from([5, 0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    List { head, tail, len }
//!             │     │
//!             ↓     └─────────────────────────────────────────┐
//!      ┌──────────┐      ╔═══════════╗      ╔═══════════╗      ┌──────────┐
//!      │   next   │ ───→ ║   next    ║ ───→ ║   next    ║ ───→ │   next   │ ─┐
//!      ├──────────┤      ╟───────────╢      ╟───────────╢      ├──────────┤  │
//!   ┌─ │   prev   │ ←─── ║   prev    ║ ←─── ║   prev    ║ ←─── │   prev   │  │
//!   │  ├──────────┤      ╟───────────╢      ╟───────────╢      ├──────────┤  │
//!   │  ┊no payload┊      ║ payload T ║      ║ payload T ║      ┊no payload┊  │
//!   │  └╌╌╌╌╌╌╌╌╌╌┘      ╚═══════════╝      ╚═══════════╝      └╌╌╌╌╌╌╌╌╌╌┘  │
//!   └──→  Head              Node 0             Node 1             Tail  ←──┘
//! ```
//! The `List` contains:
//! - a pointer `head` to the head sentinel;
//! - a pointer `tail` to the tail sentinel;
//! - a length field `len`, always equal to the number of nodes between the
//!   two sentinels.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the tail sentinel
//!   if it is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the head
//!   sentinel if it is the first element in the list);
//! - the actual payload `T`, except the sentinels.
//!
//! An empty list has `head.next == tail` and `tail.prev == head`. The unused
//! links `head.prev` and `tail.next` point to the sentinel itself.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the tail sentinel is always indexed by *n*, the past-the-end
//! position. The head sentinel has no index: no cursor ever points to it.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended, exact-size and fused iterators. [`IterMut`] provides mutability
//! of the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use seq_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] are positions in a list. In a list
//! with length *n*, there are *n* + 1 valid locations for the cursor, indexed
//! by 0, 1, ..., *n*. Moving a cursor past the end, or before the first
//! element, fails with [`Error::OutOfBounds`] and leaves the cursor in place.
//!
//! A cursor borrows its list. While a [`Cursor`] is alive, the list cannot be
//! changed; while a [`CursorMut`] is alive, it is the only way to change the
//! list. So no cursor can observe a node that was unlinked or freed.
//!
//! [`CursorMut`] provides the editing operations:
//! - [`insert`]: insert a new item before the cursor;
//! - [`insert_iter`]: insert many items before the cursor;
//! - [`erase`]: remove the item at the cursor;
//! - [`erase_to`]: remove the items from the cursor up to an index;
//! - [`split`]: split the list into a new one, from the cursor position to the end;
//! - [`splice`]: move another list before the cursor position.
//!
//! ## Examples
//!
//! ```
//! use seq_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 5
//! assert!(cursor.seek_forward(3).is_ok());
//! assert_eq!(cursor.erase(), Ok(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//! assert!(cursor.seek_forward(5).is_err());
//!
//! assert_eq!(list, List::from([5, 1, 2, 4]));
//! ```
//!
//! # Algorithms
//!
//! Whole-list algorithms relink nodes instead of copying elements:
//! [`List::merge`], [`List::splice_at`], [`List::reverse`], [`List::unique`]
//! and [`List::sort`] (a stable merge sort).
//!
//! ```
//! use seq_list::List;
//!
//! let mut list = List::from([5, 1, 4]);
//! list.sort();
//! list.merge(&mut List::from([2, 3]));
//! list.reverse();
//! assert_eq!(list, List::from([5, 4, 3, 2, 1]));
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Result`], and never change the list on error.
//! [`Error::Empty`] reports access to the first or last element of an empty
//! list, and [`Error::OutOfBounds`] a position outside of `0..=len`.
//!
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`insert_iter`]: crate::list::cursor::CursorMut::insert_iter
//! [`erase`]: crate::list::cursor::CursorMut::erase
//! [`erase_to`]: crate::list::cursor::CursorMut::erase_to
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut, Position};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

mod error;
pub mod list;
