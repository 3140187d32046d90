use crate::bag::Bag;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::modcount::FailFast;
use crate::sequence::{is_random_access, Sequence};

use super::{Characteristics, Spliterator};

/// A spliterator walking a container's cursor.
///
/// Early binding: the cursor is taken when the spliterator is created, so
/// a structural change made afterwards is reported at the next step. It
/// never splits and, unless built with [`CursorSpliterator::sized`],
/// reports neither a size nor any characteristics.
pub struct CursorSpliterator<S>
where
    S: Bag + ?Sized,
{
    cursor: S::Cursor,
    remaining: Option<usize>,
    characteristics: Characteristics,
}

impl<S> CursorSpliterator<S>
where
    S: Bag + ?Sized,
{
    /// A spliterator that knows the source's size and reports `extra`
    /// characteristics on top of [`Characteristics::SIZED`].
    pub fn sized(source: &S, extra: Characteristics) -> Self {
        Self {
            cursor: source.cursor(),
            remaining: Some(source.len()),
            characteristics: extra | Characteristics::SIZED,
        }
    }
}

impl<S> Spliterator<S> for CursorSpliterator<S>
where
    S: Bag + ?Sized,
{
    fn bind(source: &S) -> Self {
        Self {
            cursor: source.cursor(),
            remaining: None,
            characteristics: Characteristics::empty(),
        }
    }

    fn try_advance<'s>(&mut self, source: &'s S) -> Result<Option<&'s S::Item>> {
        if !self.cursor.has_next(source) {
            return Ok(None);
        }
        let element = self.cursor.next(source)?;
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
        }
        Ok(Some(element))
    }

    fn estimate_size(&self, _source: &S) -> usize {
        self.remaining.unwrap_or(usize::MAX)
    }

    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}

/// The default spliterator of a sequence.
///
/// Late binding: the range and the expected generation are read at the
/// first traversal, split or size request, so changes made between
/// creation and first use are seen. Random access sequences are walked by
/// index and split in halves; other sequences are walked with their own
/// cursor and never split.
pub struct SequenceSpliterator<S>
where
    S: Sequence + ?Sized,
{
    index: usize,
    fence: Option<usize>,
    fail_fast: Option<FailFast>,
    cursor: Option<S::Cursor>,
}

impl<S> SequenceSpliterator<S>
where
    S: Sequence + ?Sized,
{
    fn bound(&mut self, source: &S) -> usize {
        match self.fence {
            Some(fence) => fence,
            None => {
                let fence = source.len();
                self.fence = Some(fence);
                self.fail_fast = Some(FailFast::new(source.generation()));
                fence
            }
        }
    }

    fn check(&mut self, source: &S) -> Result<()> {
        match &mut self.fail_fast {
            Some(fail_fast) => fail_fast.check(source.generation()),
            None => Ok(()),
        }
    }
}

impl<S> Spliterator<S> for SequenceSpliterator<S>
where
    S: Sequence + ?Sized,
{
    fn bind(_source: &S) -> Self {
        Self {
            index: 0,
            fence: None,
            fail_fast: None,
            cursor: None,
        }
    }

    fn try_advance<'s>(&mut self, source: &'s S) -> Result<Option<&'s S::Item>> {
        let fence = self.bound(source);
        self.check(source)?;
        if self.index >= fence {
            return Ok(None);
        }
        let element = if is_random_access::<S>() {
            source.get(self.index)?
        } else {
            let cursor = self.cursor.get_or_insert_with(|| source.cursor());
            cursor.next(source)?
        };
        self.index += 1;
        Ok(Some(element))
    }

    fn try_split(&mut self, source: &S) -> Option<Self> {
        if !is_random_access::<S>() {
            return None;
        }
        let fence = self.bound(source);
        let low = self.index;
        let middle = low + (fence.saturating_sub(low)) / 2;
        if low >= middle {
            return None;
        }
        self.index = middle;
        Some(Self {
            index: low,
            fence: Some(middle),
            fail_fast: self.fail_fast,
            cursor: None,
        })
    }

    fn estimate_size(&self, source: &S) -> usize {
        self.fence
            .unwrap_or_else(|| source.len())
            .saturating_sub(self.index)
    }

    fn characteristics(&self) -> Characteristics {
        if is_random_access::<S>() {
            Characteristics::ORDERED | Characteristics::SIZED | Characteristics::SUBSIZED
        } else {
            Characteristics::ORDERED | Characteristics::SIZED
        }
    }
}
