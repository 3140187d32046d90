//! Generic collection contracts.
//!
//! A container implements a handful of primitives of [`Bag`] (and, when
//! its elements have positions, [`Sequence`]) and inherits the rest of
//! the contract: membership, bulk set algebra, snapshots, equality and
//! hashing, stable sorting, sub-sequence views, fail-fast cursors and
//! lazy streams.
//!
//! Optional operations are refused with [`Error::Unsupported`]; callers
//! treat every error as a recoverable outcome.

pub mod algorithm;
mod bag;
pub mod cursor;
pub mod error;
pub mod hash;
mod modcount;
pub mod sequence;
pub mod view;

pub use crate::bag::{Bag, Family};
pub use crate::cursor::{Cursor, IndexCursor, Iter, LastReturned, ListCursor};
pub use crate::error::{Error, ErrorKind, Operation, Result, Violation};
pub use crate::hash::ElementHash;
pub use crate::modcount::{FailFast, ModCount};
pub use crate::sequence::{
    is_random_access, Access, Random, RandomAccess, Sequence, Sequential, SubSequence,
};
#[cfg(feature = "rayon")]
pub use crate::view::ParStream;
pub use crate::view::{
    Characteristics, CursorSpliterator, SequenceSpliterator, Spliterator, Stream,
};
