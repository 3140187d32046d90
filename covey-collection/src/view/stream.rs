use crate::bag::Bag;
use crate::error::Error;

use super::Spliterator;

/// A lazy, sequential stream over a container.
///
/// The stream is a plain [`Iterator`], so pipelines are built from the
/// usual adaptors. Its spliterator is bound when the first element is
/// pulled, so the stream sees the container as it is when the terminal
/// operation starts. The stream borrows the container, which rules out
/// structural changes while it is being consumed. Should the spliterator
/// report an error anyway, the stream ends and keeps the error in
/// [`Stream::error`].
pub struct Stream<'a, S>
where
    S: Bag + ?Sized,
{
    source: &'a S,
    spliterator: Option<S::Spliterator>,
    done: bool,
    error: Option<Error>,
}

impl<'a, S> Stream<'a, S>
where
    S: Bag + ?Sized,
{
    pub(crate) fn new(source: &'a S) -> Self {
        Self {
            source,
            spliterator: None,
            done: false,
            error: None,
        }
    }

    /// Whether the spliterator has been bound yet.
    pub fn is_bound(&self) -> bool {
        self.spliterator.is_some()
    }

    /// The error that ended the stream early, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Give up the stream for its spliterator, binding it if needed.
    pub fn into_spliterator(self) -> S::Spliterator {
        let source = self.source;
        self.spliterator.unwrap_or_else(|| source.spliterator())
    }
}

impl<'a, S> Iterator for Stream<'a, S>
where
    S: Bag + ?Sized,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let source = self.source;
        let spliterator = self
            .spliterator
            .get_or_insert_with(|| source.spliterator());
        match spliterator.try_advance(source) {
            Ok(Some(element)) => Some(element),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                self.error = Some(error);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match &self.spliterator {
            Some(spliterator) => match spliterator.exact_size(self.source) {
                Some(size) => (size, Some(size)),
                None => (0, None),
            },
            None => (0, None),
        }
    }
}

impl<S> std::iter::FusedIterator for Stream<'_, S> where S: Bag + ?Sized {}
