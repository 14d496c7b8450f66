//! Error types for the Strand containers.
//!
//! Two failure modes exist: an index outside the range an operation
//! accepts ([`IndexError`]), and an aggregate query on a container with
//! no elements ([`EmptyCollectionError`]). Each operation returns the
//! narrowest of the two it can produce; [`CollectionError`] unifies them
//! for callers that mix operations under one `?`.

use std::error::Error;
use std::fmt;

/// The container operation that rejected its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Indexed read.
    Get,
    /// Indexed write.
    Set,
    /// Insertion before an index.
    Insert,
    /// Removal at an index.
    Remove,
    /// Removal returning the removed value.
    Pop,
    /// Smallest element.
    Min,
    /// Largest element.
    Max,
    /// Index of the smallest element.
    ArgMin,
    /// Index of the largest element.
    ArgMax,
}

impl Operation {
    /// Short lowercase name, as used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Insert => "insert",
            Self::Remove => "remove",
            Self::Pop => "pop",
            Self::Min => "min",
            Self::Max => "max",
            Self::ArgMin => "argmin",
            Self::ArgMax => "argmax",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An index argument outside the range accepted by an operation.
///
/// Reads, writes and removals accept `[0, len)`; insertion accepts
/// `[0, len]`. The container is left unmodified when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexError {
    /// The operation that rejected the index.
    pub op: Operation,
    /// The rejected index.
    pub index: usize,
    /// Container length at the time of the call.
    pub len: usize,
}

impl IndexError {
    /// Build an error for `op` rejecting `index` against length `len`.
    pub fn new(op: Operation, index: usize, len: usize) -> Self {
        Self { op, index, len }
    }

    /// Check `index < len`, the bound for reads, writes and removals.
    pub fn check_element(op: Operation, index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::new(op, index, len))
        }
    }

    /// Check `index <= len`, the bound for insertion.
    pub fn check_insert(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::new(Operation::Insert, index, len))
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: index {} out of bounds for length {}",
            self.op, self.index, self.len
        )
    }
}

impl Error for IndexError {}

/// An aggregate query or `pop()` on a container with zero elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyCollectionError {
    /// The operation that needed at least one element.
    pub op: Operation,
}

impl EmptyCollectionError {
    /// Build an error for `op`.
    pub fn new(op: Operation) -> Self {
        Self { op }
    }
}

impl fmt::Display for EmptyCollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on empty collection", self.op)
    }
}

impl Error for EmptyCollectionError {}

/// Either failure mode of a container operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// An index was out of bounds.
    Index(IndexError),
    /// The container was empty.
    Empty(EmptyCollectionError),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(e) => write!(f, "index error: {e}"),
            Self::Empty(e) => write!(f, "empty collection: {e}"),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Index(e) => Some(e),
            Self::Empty(e) => Some(e),
        }
    }
}

impl From<IndexError> for CollectionError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}

impl From<EmptyCollectionError> for CollectionError {
    fn from(e: EmptyCollectionError) -> Self {
        Self::Empty(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_bound_is_exclusive() {
        assert!(IndexError::check_element(Operation::Get, 2, 3).is_ok());
        let err = IndexError::check_element(Operation::Get, 3, 3).unwrap_err();
        assert_eq!(err, IndexError::new(Operation::Get, 3, 3));
    }

    #[test]
    fn insert_bound_is_inclusive() {
        assert!(IndexError::check_insert(3, 3).is_ok());
        let err = IndexError::check_insert(4, 3).unwrap_err();
        assert_eq!(err.op, Operation::Insert);
        assert_eq!(err.index, 4);
    }

    #[test]
    fn empty_container_rejects_every_element_index() {
        assert!(IndexError::check_element(Operation::Remove, 0, 0).is_err());
        assert!(IndexError::check_insert(0, 0).is_ok());
    }

    #[test]
    fn display_names_operation_and_bounds() {
        let err = IndexError::new(Operation::Remove, 7, 2);
        assert_eq!(err.to_string(), "remove: index 7 out of bounds for length 2");
        let err = EmptyCollectionError::new(Operation::ArgMax);
        assert_eq!(err.to_string(), "argmax on empty collection");
    }

    #[test]
    fn collection_error_wraps_and_exposes_source() {
        let err: CollectionError = EmptyCollectionError::new(Operation::Pop).into();
        assert!(matches!(err, CollectionError::Empty(_)));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "empty collection: pop on empty collection");

        let err: CollectionError = IndexError::new(Operation::Set, 1, 0).into();
        assert!(matches!(err, CollectionError::Index(_)));
    }
}
