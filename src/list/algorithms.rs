use crate::list::cursor::{Cursor, CursorMut};
use crate::list::{next_of, swap_links, List};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod sort;

/// Two lists are equal iff they have the same length and their elements are
/// pairwise equal in order. `!=` is always the negation of `==`.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Overwrite the common prefix in place, then drop the surplus nodes of
    /// `self` or append clones of the rest of `source`.
    fn clone_from(&mut self, source: &Self) {
        let mut source_iter = source.iter();
        let mut cursor = self.cursor_start_mut();
        while let Some(elem) = cursor.current_mut() {
            match source_iter.next() {
                Some(elem_source) => elem.clone_from(elem_source),
                None => break,
            }
            if cursor.move_next().is_err() {
                break;
            }
        }
        drop(cursor.split());
        self.extend(source_iter.cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|elt| elt.hash(state));
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a cursor at the first element equal to `x`, or `None` if there
    /// is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let list = List::from([4, 8, 15, 8]);
    /// assert_eq!(list.find(&8).map(|cursor| cursor.index()), Some(1));
    /// assert!(list.find(&16).is_none());
    /// ```
    pub fn find(&self, x: &T) -> Option<Cursor<'_, T>>
    where
        T: PartialEq<T>,
    {
        let mut cursor = self.cursor_start();
        while let Some(elem) = cursor.current() {
            if elem == x {
                return Some(cursor);
            }
            cursor.move_next().ok()?;
        }
        None
    }

    /// Returns a mutable cursor at the first element equal to `x`, or `None`
    /// if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([4, 8, 15]);
    /// if let Some(mut cursor) = list.find_mut(&8) {
    ///     cursor.insert(6);
    /// }
    /// assert_eq!(list, List::from([4, 6, 8, 15]));
    /// ```
    pub fn find_mut(&mut self, x: &T) -> Option<CursorMut<'_, T>>
    where
        T: PartialEq<T>,
    {
        let index = self.find(x)?.index();
        self.cursor_mut(index).ok()
    }

    /// Merges the sorted list `other` into this sorted list, by relinking
    /// `other`'s nodes. After this operation, `other` becomes empty.
    ///
    /// The merge is stable: of two equal elements, the one from `self` stays
    /// ahead. If either list is not sorted in ascending order, the resulting
    /// order is unspecified (but all elements are kept).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 3, 5]);
    /// let mut other = List::from([2, 4, 6]);
    ///
    /// list.merge(&mut other);
    ///
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5, 6]));
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, T::cmp);
    }

    /// Merges the list `other`, sorted by `compare`, into this list sorted by
    /// the same `compare`. See [`List::merge`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([5, 3, 1]);
    /// let mut other = List::from([6, 4, 2]);
    ///
    /// list.merge_by(&mut other, |a, b| b.cmp(a));
    ///
    /// assert_eq!(list, List::from([6, 5, 4, 3, 2, 1]));
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut Self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if other.is_empty() {
            return;
        }
        let was_empty = self.is_empty();
        let mid = other.front_node();
        self.append(other);
        if was_empty {
            return;
        }
        // SAFETY: `front..mid` and `mid..tail` are the two non-empty, adjacent
        // runs of `self` and of the former `other`.
        unsafe {
            sort::merge_range(self.front_node(), mid, self.tail_node(), &mut |a: &T, b: &T| {
                compare(a, b) == Ordering::Less
            });
        }
    }

    /// Reverses the order of the list in place, by swapping `next` and `prev`
    /// of every node and exchanging the roles of the two sentinels.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list, List::from([3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) {
        let (mut node, tail) = (self.head_node(), self.tail_node());
        // SAFETY: the walk visits `head`, every real node and `tail` exactly
        // once, reading `next` before it is swapped.
        unsafe {
            while node != tail {
                let next = next_of(node);
                swap_links(node);
                node = next;
            }
            swap_links(tail);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Removes consecutive duplicate elements, keeping the first element of
    /// each run.
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
    /// let mut list = List::from([1, 1, 2, 2, 2, 3, 1]);
    /// list.unique();
    /// assert_eq!(list, List::from([1, 2, 3, 1]));
    /// ```
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        self.unique_by(|a, b| a == b)
    }

    /// Removes consecutive elements for which `same(kept, current)` holds,
    /// where `kept` is the nearest element before `current` that was kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::from([10, 11, 20, 25, 31, 12]);
    /// list.unique_by(|a, b| a / 10 == b / 10);
    /// assert_eq!(list, List::from([10, 20, 31, 12]));
    /// ```
    pub fn unique_by<F>(&mut self, mut same: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut cursor = self.cursor_start_mut();
        while let Some(current) = cursor.current() {
            let duplicate = cursor
                .previous()
                .map_or(false, |kept| same(kept, current));
            let stepped = if duplicate {
                cursor.erase().map(drop)
            } else {
                cursor.move_next()
            };
            if stepped.is_err() {
                break;
            }
        }
    }

    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements). Empty and
    /// single-element lists are left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(log(*n*))
    /// memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a merge sort on node ranges: the range is cut
    /// at its middle node, both halves are sorted, and the halves are merged
    /// by relinking nodes. Short ranges are insertion sorted. No node is
    /// allocated or copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// let mut list = List::from([5, 3, 1, 4, 1, 5, 9, 2, 6]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list, List::from([1, 1, 2, 3, 4, 5, 5, 6, 9]));
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(v, List::from([1, 2, 3, 4, 5]));
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v, List::from([5, 4, 3, 2, 1]));
    ///
    /// let mut floats = List::from([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(floats, List::from([1.0, 2.0, 3.0, 4.0, 5.0]));
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements)
    /// and *O*(*m* \* *n* \* log(*n*)) worst-case, where the
    /// key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// let mut v = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(v, List::from([1, 2, -3, 4, -5]));
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        sort::merge_sort(self, |a, b| f(a).lt(&f(b)));
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality() {
        assert_eq!(List::from([1, 2, 3]), List::from([1, 2, 3]));
        assert_ne!(List::from([1, 2, 3]), List::from([1, 2]));
        assert_ne!(List::from([1, 2]), List::from([1, 2, 3]));
        assert!(List::from([1, 2, 3]) != List::from([1, 2, 4]));
        assert_eq!(List::<i32>::new(), List::new());
        assert!(List::from([1, 2]) < List::from([1, 3]));
        assert_eq!(
            hash_of(&List::from([1, 2, 3])),
            hash_of(&List::from([1, 2, 3]))
        );
    }

    #[test]
    fn clone_is_independent() {
        let original = List::from([1, 2, 3]);
        let mut copy = original.clone();
        *copy.front_mut().unwrap() = 10;
        copy.push_back(4);
        assert_eq!(original, List::from([1, 2, 3]));
        assert_eq!(copy, List::from([10, 2, 3, 4]));
    }

    #[test]
    fn clone_from_reuses_nodes() {
        let source = List::from([7, 8, 9]);

        let mut longer = List::from_iter(0..6);
        longer.clone_from(&source);
        assert_eq!(longer, source);
        assert_eq!(longer.len(), 3);

        let mut shorter = List::from([1]);
        let front = shorter.front_node();
        shorter.clone_from(&source);
        assert_eq!(shorter, source);
        assert_eq!(shorter.front_node(), front);

        let mut empty = List::new();
        empty.clone_from(&source);
        assert_eq!(empty, source);

        let mut same_len = List::from([0, 0, 0]);
        same_len.clone_from(&source);
        assert_eq!(same_len, source);

        let mut cleared = List::from([1, 2]);
        cleared.clone_from(&List::new());
        assert!(cleared.is_empty());
    }

    #[test]
    fn merge_sorted_lists() {
        let mut list = List::from([1, 3, 5]);
        let mut other = List::from([2, 4, 6]);
        list.merge(&mut other);
        assert_eq!(list, List::from([1, 2, 3, 4, 5, 6]));
        assert_eq!(list.len(), 6);
        assert!(other.is_empty());
        assert_eq!(other.len(), 0);

        let mut empty = List::new();
        empty.merge(&mut list);
        assert_eq!(empty.len(), 6);
        empty.merge(&mut list);
        assert_eq!(empty, List::from_iter(1..=6));

        let mut list = List::from([1, 2]);
        list.merge(&mut List::from([0, 3]));
        assert_eq!(list, List::from([0, 1, 2, 3]));
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn merge_is_stable() {
        let mut list = List::from([(1, 'a'), (2, 'a'), (2, 'b')]);
        let mut other = List::from([(1, 'x'), (2, 'x'), (3, 'x')]);
        list.merge_by(&mut other, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            list,
            List::from([(1, 'a'), (1, 'x'), (2, 'a'), (2, 'b'), (2, 'x'), (3, 'x')])
        );
    }

    #[test]
    fn reverse() {
        let mut list = List::from([1, 2, 3]);
        list.reverse();
        assert_eq!(list, List::from([3, 2, 1]));
        assert_eq!(list.back(), Ok(&1));
        list.push_back(0);
        list.push_front(4);
        assert_eq!(list, List::from([4, 3, 2, 1, 0]));
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

        let mut empty = List::<i32>::new();
        empty.reverse();
        assert!(empty.is_empty());
        empty.push_back(1);
        assert_eq!(empty.front(), Ok(&1));

        let mut single = List::from([1]);
        single.reverse();
        assert_eq!(single, List::from([1]));
    }

    #[test]
    fn unique() {
        let mut list = List::from([1, 1, 2, 2, 2, 3, 1]);
        list.unique();
        assert_eq!(list, List::from([1, 2, 3, 1]));
        assert_eq!(list.len(), 4);

        let mut list = List::from([5, 5, 5]);
        list.unique();
        assert_eq!(list, List::from([5]));

        let mut empty = List::<i32>::new();
        empty.unique();
        assert!(empty.is_empty());
    }

    #[test]
    fn find() {
        let mut list = List::from([3, 1, 4, 1, 5]);
        assert_eq!(list.find(&1).map(|cursor| cursor.index()), Some(1));
        assert_eq!(list.find(&5).and_then(|cursor| cursor.current()), Some(&5));
        assert!(list.find(&9).is_none());

        let mut cursor = list.find_mut(&4).unwrap();
        assert_eq!(cursor.erase(), Ok(4));
        assert_eq!(cursor.current(), Some(&1));
        assert!(list.find_mut(&4).is_none());
        assert!(!list.contains(&4));
    }

    #[test]
    fn sort() {
        let mut list = List::from([5, 3, 1, 4, 1, 5, 9, 2, 6]);
        list.sort();
        assert_eq!(list, List::from([1, 1, 2, 3, 4, 5, 5, 6, 9]));
        let sorted = list.clone();
        list.sort();
        assert_eq!(list, sorted);

        let mut empty = List::<i32>::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut list = List::from_iter((0..100).rev());
        list.sort();
        assert_eq!(list, List::from_iter(0..100));
        assert_eq!(list.back(), Ok(&99));
    }
}
