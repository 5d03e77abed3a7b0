use crate::list::{next_of, prev_of, List, Node};
use crate::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the past-the-end position (the tail
/// sentinel of the list).
///
/// A cursor borrows its list, so a structural change of the list can never
/// leave a cursor dangling.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The tail sentinel
/// of the list is denoted by `#`).
/// ```
/// use seq_list::List;
///
/// // Create a list: [ A B C D #]
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Moving past the end is refused: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// assert_eq!(cursor.index(), 4);
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list and have the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use seq_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1;
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different list, different positions.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use seq_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1;
/// cursor2.move_next().unwrap();
/// // They belong to the same list, can compare.
/// assert!(cursor1 < cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_end();
/// // They belong to different lists, cannot compare.
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index().cmp(&other.index()))
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor. See the documents for details.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the past-the-end position.
///
/// # Examples
///
/// ```compile_fail
/// use seq_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_end_node(&self) -> bool {
                self.current == self.list.tail_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.head_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current` is a real node or the tail sentinel, and
                // `next` of both is always valid.
                unsafe { next_of(self.current) }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current` is never the head sentinel, so `current.prev`
                // is a real node or the head sentinel.
                unsafe { prev_of(self.current) }
            }

            /// Move forward the cursor by given steps, without checking whether
            /// it will pass through the tail sentinel.
            ///
            /// It is unsafe because if the moving passes through the tail sentinel,
            /// the cursor will be invalid.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                self.index += steps;
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward the cursor by given steps, without checking whether
            /// it will pass through the head sentinel.
            ///
            /// It is unsafe because if the moving passes through the head sentinel,
            /// the cursor will be invalid.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                self.index -= steps;
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor, i.e. the number of elements
            /// before it.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns the length of the `List`. See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is at the past-the-end position.
            pub fn is_end(&self) -> bool {
                self.is_end_node()
            }

            /// Move the cursor to the next position, or return an error
            /// if the cursor is already at the past-the-end position.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use seq_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the past-the-end position
            /// assert_eq!(cursor.previous(), Some(&3));
            ///
            /// // Forbid to move passing through the tail sentinel
            /// assert!(cursor.move_next().is_err());
            ///
            /// // the cursor is still at the past-the-end position
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_next(&mut self) -> Result<()> {
                if self.is_end_node() {
                    return Err(Error::OutOfBounds { op: "move_next" });
                }
                self.index += 1;
                self.current = self.next_node();
                Ok(())
            }

            /// Move the cursor to the previous position, or return an error
            /// if the cursor is already at the first position.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use seq_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Forbid to move passing through the head sentinel
            /// assert!(cursor.move_prev().is_err());
            ///
            /// // The cursor is stiil at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) -> Result<()> {
                if self.is_front_node() {
                    return Err(Error::OutOfBounds { op: "move_prev" });
                }
                self.index -= 1;
                self.current = self.prev_node();
                Ok(())
            }

            /// Move forward the cursor by given steps, or return an error
            /// if it would pass the past-the-end position.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use seq_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_forward(5).is_err());
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// assert!(cursor.seek_forward(3).is_ok());
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<()> {
                if steps > self.list.len() - self.index {
                    return Err(Error::OutOfBounds { op: "seek_forward" });
                }
                // SAFETY: the steps are checked to stay in the list.
                unsafe { self.seek_forward_fast(steps) };
                Ok(())
            }

            /// Move backward the cursor by given steps, or return an error
            /// if it would pass the first position.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use seq_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.seek_backward(5).is_err());
            /// assert_eq!(cursor.previous(), Some(&3));
            ///
            /// assert!(cursor.seek_backward(3).is_ok());
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn seek_backward(&mut self, steps: usize) -> Result<()> {
                if steps > self.index {
                    return Err(Error::OutOfBounds { op: "seek_backward" });
                }
                // SAFETY: the steps are checked to stay in the list.
                unsafe { self.seek_backward_fast(steps) };
                Ok(())
            }

            /// Move the cursor to the given position `target`, or return an error
            /// when `target > len`. It walks from whichever of the cursor, the
            /// first node and the past-the-end position is the nearest.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use seq_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Move cursor to a valid place (at the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Forbid to move to a invalid place
            /// assert!(cursor.seek_to(5).is_err());
            ///
            /// // The cursor is still at the third node
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<()> {
                if target == self.index {
                    return Ok(());
                }
                let len = self.list.len();
                match target {
                    target if target > len => return Err(Error::OutOfBounds { op: "seek_to" }),
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    _ => unsafe {
                        // current=c, target=t, end=#
                        if target > self.index {
                            // target is at the right side of current: [   c----->t   #]
                            if target - self.index <= len - target {
                                // target is near the right side of current: [    c-->t     #]
                                self.seek_forward_fast(target - self.index);
                            } else {
                                // target is far from the right side of current: [ c     t<--#]
                                self.move_to_end();
                                self.seek_backward_fast(len - target);
                            }
                        } else {
                            // target is at the left side of current: [   t<-----c   #]
                            if self.index - target <= target {
                                // target is near the left side of current: [    t<--c     #]
                                self.seek_backward_fast(self.index - target);
                            } else {
                                // target is far from the left side of current: [-->t      c #]
                                self.move_to_start();
                                self.seek_forward_fast(target);
                            }
                        }
                    },
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Set the cursor to the past-the-end position (i.e. the tail sentinel).
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use seq_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_to_end();
            /// assert_eq!(cursor.index(), 3);
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = self.list.tail_node();
            }

            /// Return the signed number of steps from `other` to `self`.
            ///
            /// Both cursors are expected to be on the same list.
            ///
            /// # Examples
            ///
            /// ```
            /// use seq_list::List;
            ///
            /// let list = List::from([1, 2, 3, 4]);
            /// let start = list.cursor_start();
            /// let end = list.cursor_end();
            /// assert_eq!(end.distance(&start), 4);
            /// assert_eq!(start.distance(&end), -4);
            /// ```
            pub fn distance<C: Position>(&self, other: &C) -> isize {
                self.index as isize - other.position() as isize
            }
        }

        impl<'a, T: 'a> Position for $CURSOR<'a, T> {
            fn position(&self) -> usize {
                self.index
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }

        /// Shows the node address, and the element unless the cursor is at
        /// the past-the-end position: `[@0x.., val = 3]` or `[@0x.., end]`.
        impl<'a, T: fmt::Display + 'a> fmt::Display for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                match self.current() {
                    Some(value) => write!(f, "[@{:p}, val = {}]", self.current, value),
                    None => write!(f, "[@{:p}, end]", self.current),
                }
            }
        }
    };
}

/// The index of a cursor in its list, used to measure distances between
/// cursors of either kind.
pub trait Position {
    /// The number of elements before the cursor.
    fn position(&self) -> usize;
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }

    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is at the past-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(0).unwrap().current(), Some(&1));
    /// assert_eq!(list.cursor(2).unwrap().current(), Some(&3));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_end_node() {
            return None;
        }
        // SAFETY: it is safe because non-sentinel nodes must hold a
        // valid element.
        unsafe { Some(&(*self.current.as_ptr()).element) }
    }

    /// Return an immutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(0).unwrap().previous(), None);
    /// assert_eq!(list.cursor(1).unwrap().previous(), Some(&1));
    /// assert_eq!(list.cursor(3).unwrap().previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: it is safe because the previous node of a non-first node
        // is never a sentinel, and non-sentinel nodes must hold a valid element.
        unsafe { Some(&(*self.prev_node().as_ptr()).element) }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is at the past-the-end position.
    pub fn current(&self) -> Option<&T> {
        if self.is_end_node() {
            return None;
        }
        // SAFETY: it is safe because non-sentinel nodes must hold a
        // valid element.
        unsafe { Some(&(*self.current.as_ptr()).element) }
    }

    /// Return an immutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    pub fn previous(&self) -> Option<&T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first node is never a sentinel.
        unsafe { Some(&(*self.prev_node().as_ptr()).element) }
    }

    /// Return an mutable reference of current node of the cursor,
    /// or return `None` if it is at the past-the-end position.
    ///
    /// The reference borrows the cursor, so the element cannot be reached
    /// after the cursor moves or edits the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element in the current node.
    /// let mut cursor = list.cursor_mut(0).unwrap();
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the past-the-end position.
    /// assert!(list.cursor_mut(3).unwrap().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_end_node() {
            return None;
        }
        // SAFETY: it is safe because non-sentinel nodes must hold a
        // valid element, and the cursor holds the only borrow of the list.
        unsafe { Some(&mut (*self.current.as_ptr()).element) }
    }

    /// Return a mutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(3).unwrap();
    /// if let Some(x) = cursor.previous_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.previous(), Some(&15));
    ///
    /// assert!(list.cursor_mut(0).unwrap().previous_mut().is_none());
    /// ```
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first node is never a sentinel.
        unsafe { Some(&mut (*self.prev_node().as_ptr()).element) }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to read while a
    /// mutable cursor is created and being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Ok(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(list, List::from([4, 1, 2, 3]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert an element before the cursor position, and move the cursor
    /// to the new element. The index of the cursor stays the same.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 1);
    /// assert_eq!(cursor.current(), Some(&4));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 4);
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// assert_eq!(list, List::from([1, 4, 2, 3, 5]));
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = Node::new_detached(item);
        // SAFETY: `self.current.prev` and `self.current` are valid nodes in the
        // list, and they are adjacent, so it is safe.
        unsafe { self.list.attach_node(self.prev_node(), self.current, node) };
        self.current = node;
    }

    /// Insert every element of `iter`, in order, before the cursor position,
    /// and returns how many were inserted.
    ///
    /// The cursor is moved to the first inserted element, or stays put if
    /// `iter` is empty. Its index stays the same.
    ///
    /// This operation should compute in *O*(*k*) time, where *k* is the number
    /// of inserted elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 5]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// assert_eq!(cursor.insert_iter(vec![2, 3, 4]), 3);
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.index(), 1);
    ///
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn insert_iter<I>(&mut self, iter: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let next = self.current;
        let mut first = None;
        let mut count = 0;
        for item in iter {
            let node = Node::new_detached(item);
            // SAFETY: `next.prev` and `next` are adjacent nodes in the list.
            unsafe { self.list.attach_node(prev_of(next), next, node) };
            first.get_or_insert(node);
            count += 1;
        }
        if let Some(first) = first {
            self.current = first;
        }
        count
    }

    /// Remove the element at the cursor and return it. After removal, the
    /// cursor is moved to the node that followed the removed one, with the
    /// same index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the cursor is at the past-the-end
    /// position; the list is unchanged.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5).unwrap();
    ///
    /// assert_eq!(cursor.erase(), Ok(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.erase(), Ok(0)); // becomes [1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// cursor.move_to_end();
    /// assert!(cursor.erase().is_err());
    /// assert_eq!(cursor.index(), 8);
    ///
    /// assert_eq!(list, List::from([1, 2, 3, 4, 6, 7, 8, 9]));
    /// ```
    pub fn erase(&mut self) -> Result<T> {
        if self.is_end_node() {
            return Err(Error::OutOfBounds { op: "erase" });
        }
        let next = self.next_node();
        // SAFETY: `self.current` is a valid non-sentinel node in the list, so it is safe.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = next;
        Ok(Node::into_element(node))
    }

    /// Remove the elements from the cursor up to (excluding) the position with
    /// index `end`, in one pass, and return how many were removed. After removal,
    /// the cursor is moved to the node that followed the range, with the same
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `end` is before the cursor or after the
    /// past-the-end position; the list is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// assert_eq!(cursor.erase_to(3), Ok(2));
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert!(cursor.erase_to(0).is_err());
    ///
    /// assert_eq!(list, List::from([1, 4, 5]));
    /// ```
    pub fn erase_to(&mut self, end: usize) -> Result<usize> {
        if end < self.index || end > self.list.len() {
            return Err(Error::OutOfBounds { op: "erase_to" });
        }
        let count = end - self.index;
        if count == 0 {
            return Ok(0);
        }
        let front = self.current;
        let mut back = front;
        // SAFETY: `end` is checked, so the `count` nodes from `front` are all
        // real nodes of the list.
        unsafe {
            (1..count).for_each(|_| back = next_of(back));
            self.current = next_of(back);
            self.list.detach_nodes(front, back, count).free();
        }
        Ok(count)
    }

    /// Split the list into two after the current element (inclusive). This will
    /// return a new list consisting of everything after the cursor (inclusive),
    /// with the original list retaining everything before (exclusive).
    ///
    /// If the cursor is at the past-the-end position, `None` will be returned.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5).unwrap();
    ///
    /// let list2 = cursor.split().unwrap();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.index(), 5);
    ///
    /// assert_eq!(list2, List::from_iter(5..10));
    /// assert_eq!(list, List::from_iter(0..5));
    /// ```
    pub fn split(&mut self) -> Option<List<T>> {
        if self.is_end_node() {
            return None;
        }
        let len = self.list.len() - self.index;
        // After splitting, the cursor is at the past-the-end position.
        let current = std::mem::replace(&mut self.current, self.list.tail_node());
        // SAFETY: since current is a non-sentinel node, the range from current to
        // the back node is a valid range in the list, and thus it is safe.
        unsafe {
            let back = self.list.back_node();
            Some(List::from_detached(
                self.list.detach_nodes(current, back, len),
            ))
        }
    }

    /// Move all elements of `other` between the current node and its previous
    /// node. The cursor stays at the same node, and its index grows by the
    /// number of moved elements. After this operation, `other` becomes empty.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut other = List::from([7, 8]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.splice(&mut other);
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.index(), 3);
    ///
    /// assert_eq!(list, List::from([1, 7, 8, 2, 3]));
    /// assert!(other.is_empty());
    /// ```
    pub fn splice(&mut self, other: &mut List<T>) {
        if let Some(detached) = other.detach_all_nodes() {
            self.index += detached.len;
            // SAFETY: `self.current.prev` and `self.current` are valid nodes in the list,
            // and they are adjacent, so it is safe.
            unsafe {
                self.list
                    .attach_nodes(self.prev_node(), self.current, detached);
            }
        }
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::{Error, List};
    use std::iter::FromIterator;

    #[test]
    fn cursor_bounds() {
        let list = List::from_iter(0..4);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.move_prev(), Err(Error::OutOfBounds { op: "move_prev" }));
        assert_eq!(cursor.index(), 0);

        for i in 1..=4 {
            cursor.move_next().unwrap();
            assert_eq!(cursor.index(), i);
        }
        assert!(cursor.is_end());
        assert_eq!(cursor.move_next(), Err(Error::OutOfBounds { op: "move_next" }));
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.previous(), Some(&3));

        let empty = List::<i32>::new();
        let mut cursor = empty.cursor_start();
        assert!(cursor.is_end());
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor, empty.cursor_end());
    }

    #[test]
    fn cursor_seek() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_start();
        for &target in &[7, 2, 9, 0, 10, 5, 1, 8, 8, 3] {
            cursor.seek_to(target).unwrap();
            assert_eq!(cursor.index(), target);
            assert_eq!(cursor.current().copied(), (0..10).nth(target));
        }
        assert!(cursor.seek_to(11).is_err());
        assert_eq!(cursor.index(), 3);

        assert!(cursor.seek_forward(8).is_err());
        assert_eq!(cursor.index(), 3);
        cursor.seek_forward(7).unwrap();
        assert!(cursor.is_end());

        assert!(cursor.seek_backward(11).is_err());
        cursor.seek_backward(10).unwrap();
        assert_eq!(cursor.current(), Some(&0));
    }

    #[test]
    fn cursor_distance() {
        let mut list = List::from_iter(0..6);
        let begin = list.cursor_start();
        let mut cursor = begin;
        cursor.seek_forward(4).unwrap();
        assert_eq!(cursor.distance(&begin), 4);
        assert_eq!(begin.distance(&cursor), -4);
        assert_eq!(list.cursor_end().distance(&begin), list.len() as isize);

        let cursor = list.cursor_mut(2).unwrap();
        assert_eq!(cursor.distance(&cursor.as_cursor()), 0);
        assert_eq!(cursor.as_cursor().distance(&cursor), 0);
    }

    #[test]
    fn cursor_display() {
        let list = List::from([3]);
        let cursor = list.cursor_start();
        let shown = cursor.to_string();
        assert!(shown.starts_with("[@0x"));
        assert!(shown.ends_with(", val = 3]"));

        let shown = list.cursor_end().to_string();
        assert!(shown.ends_with(", end]"));
    }

    #[test]
    fn cursor_mut_insert_and_erase() {
        let mut list = List::from_iter(0..3);
        let mut cursor = list.cursor_start_mut();

        cursor.insert(10);
        assert_eq!(cursor.current(), Some(&10));
        assert_eq!(cursor.index(), 0);
        cursor.move_next().unwrap();
        cursor.move_next().unwrap();
        assert_eq!(cursor.erase(), Ok(1));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.erase(), Ok(2));
        assert!(cursor.is_end());
        assert_eq!(cursor.erase(), Err(Error::OutOfBounds { op: "erase" }));
        assert_eq!(cursor.len(), 2);
        assert_eq!(list, List::from([10, 0]));
    }

    #[test]
    fn cursor_mut_erase_to() {
        let mut list = List::from_iter(0..10);
        let mut cursor = list.cursor_mut(3).unwrap();
        assert!(cursor.erase_to(2).is_err());
        assert!(cursor.erase_to(11).is_err());
        assert_eq!(cursor.erase_to(3), Ok(0));
        assert_eq!(cursor.erase_to(10), Ok(7));
        assert!(cursor.is_end());
        assert_eq!(cursor.index(), 3);
        assert_eq!(list, List::from_iter(0..3));

        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.erase_to(3), Ok(3));
        assert!(cursor.is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_mut_split_and_splice() {
        let mut list = List::from_iter(0..6);
        let mut cursor = list.cursor_mut(4).unwrap();
        let mut tail = cursor.split().unwrap();
        assert!(cursor.split().is_none());
        assert_eq!(tail, List::from([4, 5]));

        cursor.seek_to(1).unwrap();
        cursor.splice(&mut tail);
        assert!(tail.is_empty());
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.current(), Some(&1));

        cursor.splice(&mut tail);
        assert_eq!(cursor.index(), 3);
        assert_eq!(list, List::from([0, 4, 5, 1, 2, 3]));
        assert_eq!(list.len(), 6);
    }
}
