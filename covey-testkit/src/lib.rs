//! Reference containers for the covey collection contracts.
//!
//! Each container implements only what its storage does well and leans
//! on the contract's defaults for the rest, so between them they exercise
//! every default path: random and sequential positional access, custom
//! cursors, immutable and append-only containers, and the set and
//! multiset equality families.
mod append;
mod array;
mod frozen;
mod linked;
mod set;

pub use append::{AppendCursor, AppendOnlyBag};
pub use array::ArraySequence;
pub use frozen::FrozenSequence;
pub use linked::{LinkedCursor, LinkedSequence};
pub use set::{IndexedSet, SetCursor};
