use thiserror::Error;

/// Errors reported by the fallible `List` and cursor operations.
///
/// Every error is returned synchronously by the call that violates the
/// precondition, and a failing operation leaves the list untouched.
///
/// # Examples
///
/// ```
/// use sentinel_list::{List, ListError};
///
/// let mut list: List<i32> = List::new();
/// assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation needs at least one element, but the list is empty.
    #[error("cannot remove an element from an empty list")]
    EmptyContainer,
    /// The requested cursor position does not refer to a node of this list,
    /// either because it is out of bounds, past the sentinel boundary, or
    /// taken from a different list instance.
    #[error("cursor position is outside the list")]
    InvalidCursor,
}
