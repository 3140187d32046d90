use strum_macros::Display;

/// The kind of a contract failure.
///
/// Every [`Error`] belongs to exactly one kind. Kinds describe what went
/// wrong independently of the operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// Unsupported operation.
    ///
    /// The container legally refuses this operation, for instance because it
    /// is immutable or append-only. A different operation may succeed.
    Unsupported,
    /// Invalid argument.
    ///
    /// The element violates a restriction the container declares.
    InvalidArgument,
    /// Type mismatch.
    ///
    /// Two elements could not be compared with each other.
    TypeMismatch,
    /// Out of bounds.
    ///
    /// A position or range lies outside the container.
    OutOfBounds,
    /// Illegal state.
    ///
    /// A cursor method was called out of the order its state machine
    /// requires, or the container cannot accept elements right now.
    IllegalState,
    /// No such element.
    ///
    /// A cursor was stepped past the end of its traversal.
    NoSuchElement,
    /// Concurrent modification.
    ///
    /// The container was structurally modified while a cursor was live,
    /// through a path other than that cursor.
    ConcurrentModification,
}

/// An operation a container may refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operation {
    Add,
    Remove,
    Clear,
    Set,
    Insert,
    RemoveAt,
}

/// Why a call was made in an illegal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Violation {
    #[strum(to_string = "no element returned since the last cursor move")]
    NoCurrentElement,
    #[strum(to_string = "element replaced since the last cursor move")]
    ReplacedSinceMove,
    #[strum(to_string = "container is at capacity")]
    CapacityReached,
}

/// A contract failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    #[error("unsupported operation: {0}")]
    Unsupported(Operation),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("elements are not mutually comparable")]
    Incomparable,
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("range {from}..{to} out of bounds for length {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },
    #[error("illegal state: {0}")]
    IllegalState(Violation),
    #[error("no such element")]
    NoSuchElement,
    #[error("concurrent modification")]
    ConcurrentModification,
}

static_assertions::assert_impl_all!(Error: std::error::Error, Send, Sync, Clone);

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unsupported(_) => ErrorKind::Unsupported,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Incomparable => ErrorKind::TypeMismatch,
            Error::IndexOutOfBounds { .. } | Error::RangeOutOfBounds { .. } => {
                ErrorKind::OutOfBounds
            }
            Error::IllegalState(_) => ErrorKind::IllegalState,
            Error::NoSuchElement => ErrorKind::NoSuchElement,
            Error::ConcurrentModification => ErrorKind::ConcurrentModification,
        }
    }

    /// Whether the error is a refusal of an optional operation.
    pub fn is_unsupported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check that `index` addresses an existing element: `index < len`.
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}

/// Check that `index` is a valid insertion point: `index <= len`.
pub fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}

/// Check that `from..to` is a valid range: `from <= to <= len`.
pub fn check_range(from: usize, to: usize, len: usize) -> Result<()> {
    if from <= to && to <= len {
        Ok(())
    } else {
        Err(Error::RangeOutOfBounds { from, to, len })
    }
}
