use std::fmt;
use std::fmt::Formatter;

/// Errors reported by fallible [`List`](crate::List) and cursor operations.
///
/// A failed operation never mutates the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A cursor was moved across a sentinel, or an index was outside of the
    /// list bounds.
    OutOfBounds {
        /// The name of the failing operation.
        op: &'static str,
    },
    /// An element was requested from an empty list.
    Empty {
        /// The name of the failing operation.
        op: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds { op } => write!(f, "{}: position out of bounds", op),
            Error::Empty { op } => write!(f, "{}: the list is empty", op),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn error_display() {
        let err = Error::Empty { op: "pop_back" };
        assert_eq!(err.to_string(), "pop_back: the list is empty");
        let err = Error::OutOfBounds { op: "move_next" };
        assert_eq!(err.to_string(), "move_next: position out of bounds");
    }
}
