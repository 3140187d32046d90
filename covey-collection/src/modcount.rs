use crate::error::{Error, Result};

/// Structural modification counter owned by a container.
///
/// Bump it on every change to the container's size or element
/// arrangement; leave it alone for in-place replacement at a fixed
/// position. Report it from [`Bag::generation`](crate::Bag::generation).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModCount(u64);

impl ModCount {
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// The generation a cursor expects its source to be at.
///
/// Detection is best effort: a change that leaves the generation where it
/// was goes unnoticed. Once a mismatch is seen the check keeps failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailFast {
    expected: u64,
    tripped: bool,
}

impl FailFast {
    pub fn new(generation: u64) -> Self {
        Self {
            expected: generation,
            tripped: false,
        }
    }

    pub fn check(&mut self, generation: u64) -> Result<()> {
        if self.tripped || generation != self.expected {
            self.tripped = true;
            Err(Error::ConcurrentModification)
        } else {
            Ok(())
        }
    }

    /// Adopt the source's generation after the cursor changed it itself.
    pub fn sync(&mut self, generation: u64) {
        self.expected = generation;
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped
    }
}
