use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::ListError;
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, linked through a
/// permanent sentinel node so that the nodes form a ring. Inserting and
/// removing elements at any known position take *O*(1) time; reaching a
/// position takes *O*(*n*).
///
/// The `List` contains:
/// - `sentinel`: the boundary node, allocated once at construction and never
///   holding a user value. `sentinel.next` is the first element of the list
///   and `sentinel.prev` is the last; an empty list has the sentinel linked
///   to itself in both directions.
/// - `len`: the number of user elements, maintained by every mutation.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the sentinel node).
pub struct List<T> {
    sentinel: Box<Node<Vacant>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) value: T,
}

/// Placeholder payload of the sentinel. The sentinel never holds a user
/// value, and `repr(C)` keeps the links at the same offsets in `Node<Vacant>`
/// and `Node<T>`, so sentinel pointers can be cast for link traffic.
struct Vacant;

// private methods
impl<T> List<T> {
    pub(crate) fn sentinel_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.sentinel.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.next` is always valid (either the sentinel itself,
        // or the first element of the ring).
        unsafe { self.sentinel_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.prev` is always valid (either the sentinel itself,
        // or the last element of the ring).
        unsafe { self.sentinel_node().as_ref().prev }
    }

    pub(crate) unsafe fn connect(
        &mut self,
        mut prev: NonNull<Node<T>>,
        mut next: NonNull<Node<T>>,
    ) {
        prev.as_mut().next = next;
        next.as_mut().prev = prev;
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list, or whether `node` is the sentinel. Detaching a foreign node or
    /// the sentinel makes the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether `prev` and `next` are adjacent (only
    /// in `#[cfg(debug_assertions)]`). Attaching between foreign or
    /// non-adjacent nodes makes the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            sentinel: new_sentinel(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a `List` of `len` default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list: List<i32> = List::with_len(3);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.front(), Some(&0));
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        std::iter::repeat_with(T::default).take(len).collect()
    }

    /// Create a `List` of `len` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::with_value(3, 10);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.front(), Some(&10));
    /// assert_eq!(list.back(), Some(&10));
    /// ```
    pub fn with_value(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        std::iter::repeat(value).take(len).collect()
    }

    /// Create a `List` holding a copy of each value in the cursor range
    /// `start..end`, left inclusive and right exclusive, in order.
    ///
    /// Returns [`ListError::InvalidCursor`] if the cursors belong to
    /// different lists, or if `start` is past `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3, 4]);
    /// let copy = List::from_range(&list.cursor(1).unwrap(), &list.cursor(3).unwrap()).unwrap();
    /// assert_eq!(Vec::from_iter(copy), vec![2, 3]);
    ///
    /// // Cursors of another list do not address this list's nodes.
    /// let other = List::from_iter([1, 2]);
    /// assert_eq!(
    ///     List::from_range(&other.cursor_start(), &list.cursor_end()),
    ///     Err(ListError::InvalidCursor),
    /// );
    /// ```
    pub fn from_range(start: &Cursor<'_, T>, end: &Cursor<'_, T>) -> Result<Self, ListError>
    where
        T: Clone,
    {
        if !start.same_list_with(end) || start.index() > end.index() {
            return Err(ListError::InvalidCursor);
        }
        let mut list = List::new();
        let mut walk = start.clone();
        while walk != *end {
            list.push_back(walk.current().ok_or(ListError::InvalidCursor)?.clone());
            walk.move_next()?;
        }
        Ok(list)
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.sentinel_node()
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
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

    /// Removes all elements from the `List`, releasing every node from first
    /// to last and resetting the sentinel to its self-linked empty state.
    ///
    /// Clearing an already-empty list is a no-op.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let mut node = self.front_node();
        // SAFETY: the list is not empty, so the front node holds a value.
        unsafe { Some(&mut node.as_mut().value) }
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let mut node = self.back_node();
        // SAFETY: the list is not empty, so the back node holds a value.
        unsafe { Some(&mut node.as_mut().value) }
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
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.cursor_start_mut().insert(value);
    }

    /// Removes the first element and returns it, or
    /// [`ListError::EmptyContainer`] if the list is empty. A failing pop
    /// leaves the list untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.cursor_start_mut()
            .remove()
            .ok_or(ListError::EmptyContainer)
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
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.cursor_end_mut().insert(value);
    }

    /// Removes the last element from a list and returns it, or
    /// [`ListError::EmptyContainer`] if it is empty. A failing pop leaves
    /// the list untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        self.cursor_end_mut()
            .backspace()
            .ok_or(ListError::EmptyContainer)
    }

    /// Provides a cursor at the node with the given index, or
    /// [`ListError::InvalidCursor`] if `at > len`.
    ///
    /// By convention, the cursor is pointing to the sentinel if `at == len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>, ListError> {
        let mut cursor = self.cursor_start();
        cursor.seek_to(at)?;
        Ok(cursor)
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the sentinel, the end position of the list.
    ///
    /// The end cursor is never dereferenced; its `current` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.sentinel_node(), self.len)
    }

    /// Provides a cursor with editing operations at the node with the given
    /// index, or [`ListError::InvalidCursor`] if `at > len`.
    ///
    /// By convention, the cursor is pointing to the sentinel if `at == len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>, ListError> {
        let mut cursor = self.cursor_start_mut();
        cursor.seek_to(at)?;
        Ok(cursor)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, self.front_node(), 0)
    }

    /// Provides a cursor with editing operations at the sentinel, the end
    /// position of the list. Inserting at the end cursor appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(4);
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, self.sentinel_node(), self.len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
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
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for value in list.iter_mut() {
    ///     *value += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Adds an element at the given index in the list, or returns
    /// [`ListError::InvalidCursor`] if `at > len` without touching the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// assert!(list.insert(9, 6).is_err());
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, value: T) -> Result<(), ListError> {
        let mut cursor = self.cursor_mut(at)?;
        cursor.insert(value);
        Ok(())
    }

    /// Removes the element at the given index and returns it, or returns
    /// [`ListError::InvalidCursor`] if `at >= len` without touching the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(1).is_err());
    /// assert_eq!(list.remove(0), Ok(3));
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T, ListError> {
        let mut cursor = self.cursor_mut(at)?;
        cursor.remove().ok_or(ListError::InvalidCursor)
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
    /// Allocate a node that is not yet linked into any ring. The links are
    /// dangling until `attach_node` patches them; they are never read before
    /// that.
    pub(crate) fn new_unlinked(value: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            value,
        })))
    }

    pub(crate) fn into_value(self: Box<Self>) -> T {
        self.value
    }
}

fn new_sentinel() -> Box<Node<Vacant>> {
    let mut sentinel = Box::new(Node {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        value: Vacant,
    });
    // The boxed node has a stable heap address, so the self-links survive
    // moves of the box (and of the owning list).
    let ptr = NonNull::from(sentinel.as_mut());
    sentinel.next = ptr;
    sentinel.prev = ptr;
    sentinel
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
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

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    /// Walk the raw ring in both directions: every adjacent pair must be
    /// mutually linked, and the walk must return to the sentinel after
    /// exactly `len` steps.
    fn assert_ring<T>(list: &List<T>) {
        let sentinel = list.sentinel_node();
        let mut node = sentinel;
        let mut steps = 0;
        loop {
            let next = unsafe { node.as_ref().next };
            assert_eq!(unsafe { next.as_ref().prev }, node);
            node = next;
            if node == sentinel {
                break;
            }
            steps += 1;
        }
        assert_eq!(steps, list.len());

        let mut node = sentinel;
        let mut steps = 0;
        loop {
            let prev = unsafe { node.as_ref().prev };
            assert_eq!(unsafe { prev.as_ref().next }, node);
            node = prev;
            if node == sentinel {
                break;
            }
            steps += 1;
        }
        assert_eq!(steps, list.len());
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_ring(&list);
        list.push_back(1);
        assert!(!list.is_empty());
        assert_ring(&list);
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        assert_ring(&list);
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        // Values are released immediately and in order, front to back.
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
        assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_ring(&list);
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn pop_from_empty_never_corrupts() {
        let mut list = List::<i32>::new();
        for _ in 0..3 {
            assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
            assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
            assert_eq!(list.len(), 0);
            assert_ring(&list);
        }
        list.push_back(7);
        assert_eq!(list.front(), Some(&7));
    }

    #[test]
    fn sized_constructors() {
        let list = List::with_value(3, 10);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&10));
        assert_eq!(list.back(), Some(&10));
        assert_ring(&list);

        let list: List<i32> = List::with_len(2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&0));

        let list: List<i32> = List::with_len(0);
        assert!(list.is_empty());
        assert_ring(&list);
    }

    #[test]
    fn push_front_on_empty() {
        let mut list = List::new();
        list.push_front(20);
        assert_eq!(list.front(), Some(&20));
        assert_eq!(list.len(), 1);
        assert_ring(&list);
    }

    #[test]
    fn insert_before_start() {
        let mut list = List::with_value(3, 40);
        list.cursor_start_mut().insert(50);
        assert_eq!(list.front(), Some(&50));
        assert_eq!(list.len(), 4);
        assert_ring(&list);
    }

    #[test]
    fn pop_back_keeps_remaining() {
        let mut list = List::with_value(2, 10);
        assert_eq!(list.pop_back(), Ok(10));
        assert_eq!(list.len(), 1);
        assert_eq!(list.back(), Some(&10));
        assert_ring(&list);
    }

    #[test]
    fn list_insert_and_remove() {
        fn list_eq<I: IntoIterator<Item = i32>>(list: &List<i32>, expected: I) {
            assert_eq!(
                Vec::from_iter(list.iter().cloned()),
                Vec::from_iter(expected)
            );
            assert_ring(list);
        }

        let mut list = List::from_iter(0..10);
        list.insert(5, 10).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), Ok(11));
        assert_eq!(list.front(), Some(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(10, 12).unwrap();
        assert_eq!(list.back(), Some(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
    }

    #[test]
    fn indexed_ops_out_of_bounds() {
        let mut list = List::from_iter(0..3);
        assert_eq!(list.insert(4, 9), Err(ListError::InvalidCursor));
        assert_eq!(list.remove(3), Err(ListError::InvalidCursor));
        assert!(list.cursor(4).is_err());
        // No partial mutation on failure.
        assert_eq!(Vec::from_iter(list), vec![0, 1, 2]);
    }

    #[test]
    fn cursor_mut_borrows_are_sequential() {
        // Reads through the cursor observe earlier writes; the mutable
        // reference must be released before the next access.
        let mut list = List::from_iter(0..3);
        let mut cursor = list.cursor_start_mut();
        *cursor.current_mut().unwrap() = 7;
        assert_eq!(cursor.current(), Some(&7));
        *cursor.current_mut().unwrap() += 1;
        assert_eq!(cursor.current(), Some(&8));
        drop(cursor);
        assert_eq!(list.front(), Some(&8));
    }

    #[test]
    fn clone_is_independent() {
        let original = List::with_value(3, 60);
        let mut copy = original.clone();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.front(), Some(&60));

        copy.push_back(1);
        *copy.front_mut().unwrap() = 2;
        assert_eq!(original.len(), 3);
        assert_eq!(original.front(), Some(&60));
        assert_eq!(original.back(), Some(&60));
        assert_ring(&original);
        assert_ring(&copy);
    }

    #[test]
    fn clone_from_replaces_destination() {
        let source = List::from_iter(0..3);
        let mut destination = List::from_iter(10..20);
        destination.clone_from(&source);
        assert_eq!(destination, source);
        assert_eq!(destination.len(), 3);
        assert_ring(&destination);
    }

    #[test]
    fn take_drains_source() {
        let mut source = List::from_iter(0..5);
        let moved = std::mem::take(&mut source);
        assert!(source.is_empty());
        assert_eq!(source.len(), 0);
        assert_ring(&source);
        assert_eq!(Vec::from_iter(moved), vec![0, 1, 2, 3, 4]);

        // The drained source is a valid empty list, not a dangling shell.
        source.push_back(9);
        assert_eq!(source.front(), Some(&9));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut list = List::<i32>::new();
        list.clear();
        assert_eq!(list.len(), 0);

        list.extend(0..5);
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_ring(&list);

        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn from_range_copies_subrange() {
        let list = List::from_iter(0..6);
        let whole = List::from_range(&list.cursor_start(), &list.cursor_end()).unwrap();
        assert_eq!(whole, list);

        let middle = List::from_range(&list.cursor(2).unwrap(), &list.cursor(5).unwrap()).unwrap();
        assert_eq!(Vec::from_iter(middle), vec![2, 3, 4]);

        let empty = List::from_range(&list.cursor(3).unwrap(), &list.cursor(3).unwrap()).unwrap();
        assert!(empty.is_empty());

        // Reversed bounds do not address a forward range.
        assert_eq!(
            List::from_range(&list.cursor(4).unwrap(), &list.cursor(1).unwrap()),
            Err(ListError::InvalidCursor)
        );

        // Cursors are tied to their own list's node identities.
        let other = List::from_iter(0..6);
        assert_eq!(
            List::from_range(&other.cursor_start(), &list.cursor_end()),
            Err(ListError::InvalidCursor)
        );
    }

    #[test]
    fn len_tracks_every_mutation() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.len(), 1);

        list.pop_front().unwrap();
        assert_eq!(list.len(), 0);

        list.extend(0..5);
        assert_eq!(list.len(), 5);

        list.remove(3).unwrap();
        assert_eq!(list.len(), 4);

        list.insert(2, 7).unwrap();
        assert_eq!(list.len(), 5);

        assert_eq!(list.iter().count(), list.len());
        assert_eq!(list.iter().rev().count(), list.len());

        list.clear();
        assert_eq!(list.len(), 0);
    }
}
