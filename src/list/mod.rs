use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Range;
use std::ptr::{self, NonNull};

use crate::list::cursor::{Cursor, CursorMut};
use crate::{Error, IntoIter, Iter, IterMut, Result};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked sequence container with owned nodes, bracketed
/// by a pair of sentinel nodes.
/// It allows inserting, removing elements at any known position in constant time.
/// In compromise, reaching a position by its index takes *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `head` to the head sentinel, whose `next` is the first element
///   (or `tail` if the list is empty);
/// - a pointer `tail` to the tail sentinel, whose `prev` is the last element
///   (or `head` if the list is empty);
/// - a length field `len`, always equal to the number of nodes strictly between
///   `head` and `tail`.
///
/// The sentinels are never exposed: a cursor at `tail` denotes the past-the-end
/// position, and no cursor ever points at `head`.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the tail sentinel).
pub struct List<T> {
    head: NonNull<Node<Erased>>,
    tail: NonNull<Node<Erased>>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Payload of the sentinel nodes. Only `next` and `prev` of a sentinel are
/// ever read, so a sentinel can be viewed as a `Node<T>` through its links.
#[derive(Default)]
struct Erased;

/// Nodes fragment detached from a list, used in list splitting, splicing
/// or range erasing.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Read the `next` link of a node or a sentinel.
///
/// It is unsafe because `node` must be a live node (or sentinel) of a list.
#[inline]
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    ptr::addr_of!((*node.as_ptr()).next).read()
}

/// Read the `prev` link of a node or a sentinel.
///
/// It is unsafe because `node` must be a live node (or sentinel) of a list.
#[inline]
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    ptr::addr_of!((*node.as_ptr()).prev).read()
}

/// Link `prev` and `next` so that they become adjacent.
///
/// Only the link fields are touched, so sentinels are valid arguments.
#[inline]
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    ptr::addr_of_mut!((*prev.as_ptr()).next).write(next);
    ptr::addr_of_mut!((*next.as_ptr()).prev).write(prev);
}

/// Exchange the `next` and `prev` links of a node or a sentinel.
#[inline]
pub(crate) unsafe fn swap_links<T>(node: NonNull<Node<T>>) {
    let (next, prev) = (next_of(node), prev_of(node));
    ptr::addr_of_mut!((*node.as_ptr()).next).write(prev);
    ptr::addr_of_mut!((*node.as_ptr()).prev).write(next);
}

// private methods
impl<T> List<T> {
    pub(crate) fn head_node(&self) -> NonNull<Node<T>> {
        self.head.cast()
    }
    pub(crate) fn tail_node(&self) -> NonNull<Node<T>> {
        self.tail.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `head.next` is always valid (either `tail`, or the first element
        // in the list).
        unsafe { next_of(self.head_node()) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `tail.prev` is always valid (either `head`, or the last element
        // in the list).
        unsafe { prev_of(self.tail_node()) }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list,
    /// or whether it is a sentinel.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        connect(prev_of(node), next_of(node));
        Box::from_raw(node.as_ptr())
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// of `len` nodes (i.e. `front` must **NOT** be at the right of `back`), or
    /// whether it belongs to the list.
    ///
    /// If `front..=back` is not a valid range or it does not belong to the list,
    /// this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        connect(prev_of(front), next_of(back));
        DetachedNodes::new(front, back, len)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid range.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }

    /// Construct a list from detached nodes.
    ///
    /// It is safe because the detached nodes is guaranteed to be a valid range
    /// when construction.
    pub(crate) fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = List::new();
        unsafe {
            list.attach_nodes(list.head_node(), list.tail_node(), detached);
        }
        list
    }

    fn check_position(&self, at: usize, op: &'static str) -> Result<()> {
        if at > self.len {
            return Err(Error::OutOfBounds { op });
        }
        Ok(())
    }

    fn check_element(&self, at: usize, op: &'static str) -> Result<()> {
        if at >= self.len {
            return Err(Error::OutOfBounds { op });
        }
        Ok(())
    }
}

impl<T> List<T> {
    /// Create an empty `List`: two fresh sentinels linked to each other.
    ///
    /// # Examples
    /// ```
    /// use seq_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let head = new_sentinel();
        let tail = new_sentinel();
        // SAFETY: both sentinels are freshly allocated and owned by nobody else.
        unsafe { connect(head, tail) };
        Self {
            head,
            tail,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a `List` holding `count` default-valued elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let list: List<i32> = List::with_len(3);
    /// assert_eq!(list.len(), 3);
    /// assert!(list.iter().all(|x| *x == 0));
    /// ```
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        (0..count).map(|_| T::default()).collect()
    }

    /// Returns `true` if the `List` is empty, i.e. `head.next` is the tail
    /// sentinel.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.tail_node()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`. The sentinels are linked to each
    /// other again.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Ok(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.front().is_err());
    /// ```
    pub fn clear(&mut self) {
        if let Some(detached) = self.detach_all_nodes() {
            detached.free();
        }
    }

    /// Provides a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(Error::Empty { op: "front" }));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.cursor_start()
            .current()
            .ok_or(Error::Empty { op: "front" })
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.front_mut().is_err());
    ///
    /// list.push_front(1);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::Empty { op: "front_mut" });
        }
        // SAFETY: the list is not empty, so the front node holds an element.
        unsafe { Ok(&mut (*self.front_node().as_ptr()).element) }
    }

    /// Provides a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(Error::Empty { op: "back" }));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.cursor_end()
            .previous()
            .ok_or(Error::Empty { op: "back" })
    }

    /// Provides a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// if let Ok(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::Empty { op: "back_mut" });
        }
        // SAFETY: the list is not empty, so the back node holds an element.
        unsafe { Ok(&mut (*self.back_node().as_ptr()).element) }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_front().is_err());
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert!(list.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty { op: "pop_front" });
        }
        // SAFETY: the list is not empty, so the front node is a real node.
        unsafe { Ok(self.detach_node(self.front_node()).into_element()) }
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from a list and returns it. The node is
    /// unlinked and freed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_back().is_err());
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty { op: "pop_back" });
        }
        // SAFETY: the list is not empty, so the back node is a real node.
        unsafe { Ok(self.detach_node(self.back_node()).into_element()) }
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the tail sentinel if `at == len`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        self.check_position(at, "cursor")?;
        let mut cursor = self.cursor_start();
        cursor.seek_to(at)?;
        Ok(cursor)
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the tail sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the past-the-end position (the tail sentinel).
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail_node(), self.len)
    }

    /// Provides a cursor with editing operations at the node with given index.
    ///
    /// By convention, the cursor is pointing to the tail sentinel if `at == len`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert_eq!(list.cursor_mut(3).unwrap().current_mut(), None);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>> {
        self.check_position(at, "cursor_mut")?;
        let mut cursor = self.cursor_start_mut();
        cursor.seek_to(at)?;
        Ok(cursor)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the tail sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// Provides a cursor with editing operations at the past-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// if let Some(x) = cursor.previous_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.previous(), Some(&15));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (tail, len) = (self.tail_node(), self.len);
        CursorMut::new(self, tail, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
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

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Inserts `elt` before the node with given index, and returns a cursor at
    /// the new element. `at == len` is the past-the-end position, which is the
    /// same as [`List::push_back`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time to reach the position,
    /// and *O*(1) time to insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let cursor = list.insert(2, 4).unwrap();
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(cursor.index(), 2);
    /// list.insert(4, 5).unwrap();
    ///
    /// assert_eq!(list, List::from([1, 2, 4, 3, 5]));
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> Result<CursorMut<'_, T>> {
        self.check_position(at, "insert")?;
        let mut cursor = self.cursor_mut(at)?;
        cursor.insert(elt);
        Ok(cursor)
    }

    /// Inserts every element of `iter`, in order, before the node with given
    /// index. Returns a cursor at the first inserted element, or at `at` if
    /// `iter` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 5]);
    /// let cursor = list.insert_iter(1, vec![2, 3, 4]).unwrap();
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn insert_iter<I>(&mut self, at: usize, iter: I) -> Result<CursorMut<'_, T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(at, "insert_iter")?;
        let mut cursor = self.cursor_mut(at)?;
        cursor.insert_iter(iter);
        Ok(cursor)
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        self.check_element(at, "remove")?;
        self.cursor_mut(at)?.erase()
    }

    /// Removes the elements in the half-open index range `range` in one pass,
    /// and returns a cursor at the node that followed the range (which now sits
    /// at index `range.start`).
    ///
    /// An empty range is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `range.start > range.end` or
    /// `range.end > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// let cursor = list.erase_range(1..3).unwrap();
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(list, List::from([1, 4, 5]));
    /// ```
    pub fn erase_range(&mut self, range: Range<usize>) -> Result<CursorMut<'_, T>> {
        if range.start > range.end || range.end > self.len {
            return Err(Error::OutOfBounds { op: "erase_range" });
        }
        let mut cursor = self.cursor_mut(range.start)?;
        cursor.erase_to(range.end)?;
        Ok(cursor)
    }

    /// Replaces the contents of the list with the elements of `iter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.assign(vec![7, 8]);
    /// assert_eq!(list, List::from([7, 8]));
    /// ```
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(iter);
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1, List::from(['a', 'b', 'c']));
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.tail_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.tail_node(), detached) }
        }
    }

    /// Moves all elements from `other` to the begin of the list.
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list2.prepend(&mut list1);
    ///
    /// assert_eq!(list2, List::from(['a', 'b', 'c']));
    /// assert!(list1.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.head_node()` and `self.front_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.head_node(), self.front_node(), detached) }
        }
    }

    /// Splits the list into two at the given index. Returns everything after
    /// the given index (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    /// let split = list.split_off(2).unwrap();
    ///
    /// assert_eq!(split, List::from([1]));
    /// assert_eq!(list, List::from([3, 2]));
    /// ```
    pub fn split_off(&mut self, at: usize) -> Result<List<T>> {
        self.check_position(at, "split_off")?;
        if at == self.len {
            return Ok(List::new());
        }
        Ok(self.cursor_mut(at)?.split().unwrap_or_default())
    }

    /// Moves all elements of `other` to the position before the node with
    /// given index. After this operation, `other` becomes empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time to reach the position,
    /// and *O*(1) time to splice.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut other = List::from([4, 5, 6]);
    ///
    /// list.splice_at(2, &mut other).unwrap();
    ///
    /// assert_eq!(list, List::from([1, 2, 4, 5, 6, 3]));
    /// assert!(other.is_empty());
    /// ```
    pub fn splice_at(&mut self, at: usize, other: &mut Self) -> Result<()> {
        self.check_position(at, "splice_at")?;
        self.cursor_mut(at)?.splice(other);
        Ok(())
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its links are dangling
    /// until it is attached to a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// If is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range and its length must be equal to `len`.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }

    /// Drop the elements and free the nodes, from `front` to `back`.
    pub(crate) fn free(self) {
        let mut node = self.front;
        for _ in 0..self.len {
            // SAFETY: `front..=back` is a valid range of `len` nodes owned
            // exclusively by `self`, so each of them is freed exactly once.
            unsafe {
                let next = next_of(node);
                drop(Box::from_raw(node.as_ptr()));
                node = next;
            }
        }
    }
}

fn new_sentinel() -> NonNull<Node<Erased>> {
    let sentinel = Node::new_detached(Erased::default());
    // SAFETY: `sentinel` is freshly allocated. Pointing its links to itself
    // keeps the unused `head.prev` and `tail.next` from dangling.
    unsafe { connect(sentinel, sentinel) };
    sentinel
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(next_of(prev), next);
        assert_eq!(prev_of(next), prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: both sentinels were leaked from boxes in `new_sentinel`
        // and are released only here.
        unsafe {
            drop(Box::from_raw(self.head.as_ptr()));
            drop(Box::from_raw(self.tail.as_ptr()));
        }
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
