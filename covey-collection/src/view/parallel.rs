use rayon::iter::plumbing::{bridge_unindexed, Folder, UnindexedConsumer, UnindexedProducer};
use rayon::iter::ParallelIterator;

use crate::bag::Bag;

use super::Spliterator;

/// A lazy parallel stream over a container.
///
/// The container's spliterator is bound when the stream is driven and
/// split with [`Spliterator::try_split`] for as long as rayon asks for
/// more parallelism. Spliterators that never split make this a
/// sequential traversal on a single worker.
pub struct ParStream<'a, S>
where
    S: Bag + ?Sized,
{
    source: &'a S,
}

impl<'a, S> ParStream<'a, S>
where
    S: Bag + ?Sized,
{
    pub(crate) fn new(source: &'a S) -> Self {
        Self { source }
    }
}

impl<'a, S> ParallelIterator for ParStream<'a, S>
where
    S: Bag + Sync + ?Sized,
    S::Item: Sync,
    S::Spliterator: Send,
{
    type Item = &'a S::Item;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        let producer = SpliteratorProducer {
            source: self.source,
            spliterator: self.source.spliterator(),
        };
        bridge_unindexed(producer, consumer)
    }
}

struct SpliteratorProducer<'a, S>
where
    S: Bag + ?Sized,
{
    source: &'a S,
    spliterator: S::Spliterator,
}

impl<'a, S> UnindexedProducer for SpliteratorProducer<'a, S>
where
    S: Bag + Sync + ?Sized,
    S::Item: Sync,
    S::Spliterator: Send,
{
    type Item = &'a S::Item;

    fn split(mut self) -> (Self, Option<Self>) {
        match self.spliterator.try_split(self.source) {
            Some(prefix) => {
                let source = self.source;
                (
                    SpliteratorProducer {
                        source,
                        spliterator: prefix,
                    },
                    Some(self),
                )
            }
            None => (self, None),
        }
    }

    fn fold_with<F>(mut self, mut folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        while !folder.full() {
            match self.spliterator.try_advance(self.source) {
                Ok(Some(element)) => folder = folder.consume(element),
                Ok(None) | Err(_) => break,
            }
        }
        folder
    }
}
