use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::sync::atomic::{AtomicUsize, Ordering};

use covey_collection::error::{self, Error};
use covey_collection::{
    Bag, Cursor, ElementHash, FailFast, Family, LastReturned, ListCursor, ModCount, Result,
    Sequence, SequenceSpliterator, Sequential,
};
use slab::Slab;

#[derive(Clone)]
struct Node<E> {
    element: E,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A sequence backed by a doubly linked list.
///
/// Nodes live in a slab and link to each other by key. Positional access
/// walks the links, so the sequence declares sequential access and brings
/// a list cursor that follows the links instead of counting positions.
pub struct LinkedSequence<E> {
    nodes: Slab<Node<E>>,
    head: Option<usize>,
    tail: Option<usize>,
    mod_count: ModCount,
    positional: AtomicUsize,
}

impl<E> LinkedSequence<E> {
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            mod_count: ModCount::new(),
            positional: AtomicUsize::new(0),
        }
    }

    pub fn push_front(&mut self, element: E) {
        self.link_before(self.head, element);
    }

    /// How many calls to `get`, `set`, `insert` and `remove_at` this
    /// sequence has served. Each one walks the list.
    pub fn positional_accesses(&self) -> usize {
        self.positional.load(Ordering::Relaxed)
    }

    fn count_positional(&self) {
        self.positional.fetch_add(1, Ordering::Relaxed);
    }

    fn node(&self, key: usize) -> Result<&Node<E>> {
        self.nodes.get(key).ok_or(Error::ConcurrentModification)
    }

    fn node_mut(&mut self, key: usize) -> Result<&mut Node<E>> {
        self.nodes.get_mut(key).ok_or(Error::ConcurrentModification)
    }

    fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(self.head, |&key| self.nodes.get(key).and_then(|n| n.next))
    }

    fn key_at(&self, index: usize) -> Result<usize> {
        let len = self.nodes.len();
        error::check_index(index, len)?;
        let found = if index < len / 2 {
            self.keys().nth(index)
        } else {
            iter::successors(self.tail, |&key| self.nodes.get(key).and_then(|n| n.prev))
                .nth(len - 1 - index)
        };
        found.ok_or(Error::IndexOutOfBounds { index, len })
    }

    fn link_before(&mut self, next: Option<usize>, element: E) -> usize {
        let prev = match next {
            Some(next) => self.nodes.get(next).and_then(|n| n.prev),
            None => self.tail,
        };
        let key = self.nodes.insert(Node {
            element,
            prev,
            next,
        });
        match prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(node) => node.next = Some(key),
            None => self.head = Some(key),
        }
        match next.and_then(|next| self.nodes.get_mut(next)) {
            Some(node) => node.prev = Some(key),
            None => self.tail = Some(key),
        }
        self.mod_count.bump();
        key
    }

    fn unlink(&mut self, key: usize) -> Result<E> {
        let node = self
            .nodes
            .try_remove(key)
            .ok_or(Error::ConcurrentModification)?;
        match node.prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes.get_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.mod_count.bump();
        Ok(node.element)
    }
}

impl<E> Default for LinkedSequence<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for LinkedSequence<E> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
            mod_count: self.mod_count,
            positional: AtomicUsize::new(0),
        }
    }
}

impl<E> FromIterator<E> for LinkedSequence<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for element in iter {
            sequence.link_before(None, element);
        }
        sequence.mod_count = ModCount::new();
        sequence
    }
}

impl<E> Bag for LinkedSequence<E> {
    type Item = E;
    type Cursor = LinkedCursor;
    type Spliterator = SequenceSpliterator<Self>;

    const FAMILY: Family = Family::Sequence;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn generation(&self) -> u64 {
        self.mod_count.get()
    }

    fn cursor(&self) -> Self::Cursor {
        LinkedCursor::at(self, 0)
    }

    fn add(&mut self, element: E) -> Result<bool> {
        self.link_before(None, element);
        Ok(true)
    }

    fn clear(&mut self) -> Result<()> {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.mod_count.bump();
        Ok(())
    }
}

impl<E> Sequence for LinkedSequence<E> {
    type Access = Sequential;
    type ListCursor = LinkedCursor;

    fn get(&self, index: usize) -> Result<&E> {
        self.count_positional();
        let key = self.key_at(index)?;
        Ok(&self.node(key)?.element)
    }

    fn set(&mut self, index: usize, element: E) -> Result<E> {
        self.count_positional();
        let key = self.key_at(index)?;
        let node = self.node_mut(key)?;
        Ok(std::mem::replace(&mut node.element, element))
    }

    fn insert(&mut self, index: usize, element: E) -> Result<()> {
        self.count_positional();
        error::check_position(index, self.nodes.len())?;
        let next = if index == self.nodes.len() {
            None
        } else {
            Some(self.key_at(index)?)
        };
        self.link_before(next, element);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<E> {
        self.count_positional();
        let key = self.key_at(index)?;
        self.unlink(key)
    }
}

/// A list cursor that follows a [`LinkedSequence`]'s links.
///
/// Every step is a single link hop, so a full pass, a sort write-back or a
/// `replace_all` stays linear.
#[derive(Debug, Clone)]
pub struct LinkedCursor {
    next: Option<usize>,
    index: usize,
    last: LastReturned<usize>,
    fail_fast: FailFast,
}

impl<E> Cursor<LinkedSequence<E>> for LinkedCursor {
    fn has_next(&self, _source: &LinkedSequence<E>) -> bool {
        self.next.is_some()
    }

    fn next<'s>(&mut self, source: &'s LinkedSequence<E>) -> Result<&'s E> {
        self.fail_fast.check(source.generation())?;
        let key = self.next.ok_or(Error::NoSuchElement)?;
        let node = source.node(key)?;
        self.next = node.next;
        self.index += 1;
        self.last.moved(key);
        Ok(&node.element)
    }

    fn remove(&mut self, source: &mut LinkedSequence<E>) -> Result<()> {
        let key = self.last.for_remove()?;
        self.fail_fast.check(source.generation())?;
        if self.next == Some(key) {
            self.next = source.node(key)?.next;
        } else {
            self.index -= 1;
        }
        source.unlink(key)?;
        self.last.clear();
        self.fail_fast.sync(source.generation());
        Ok(())
    }
}

impl<E> ListCursor<LinkedSequence<E>> for LinkedCursor {
    fn at(source: &LinkedSequence<E>, index: usize) -> Self {
        Self {
            next: source.key_at(index).ok(),
            index,
            last: LastReturned::new(),
            fail_fast: FailFast::new(source.generation()),
        }
    }

    fn has_previous(&self) -> bool {
        self.index > 0
    }

    fn next_index(&self) -> usize {
        self.index
    }

    fn previous<'s>(&mut self, source: &'s LinkedSequence<E>) -> Result<&'s E> {
        self.fail_fast.check(source.generation())?;
        let key = match self.next {
            Some(next) => source.node(next)?.prev,
            None => source.tail,
        }
        .ok_or(Error::NoSuchElement)?;
        let node = source.node(key)?;
        self.next = Some(key);
        self.index -= 1;
        self.last.moved(key);
        Ok(&node.element)
    }

    fn set(&mut self, source: &mut LinkedSequence<E>, element: E) -> Result<E> {
        let key = self.last.for_set()?;
        self.fail_fast.check(source.generation())?;
        let node = source.node_mut(key)?;
        let previous = std::mem::replace(&mut node.element, element);
        self.last.mark_replaced();
        Ok(previous)
    }

    fn add(&mut self, source: &mut LinkedSequence<E>, element: E) -> Result<()> {
        self.fail_fast.check(source.generation())?;
        source.link_before(self.next, element);
        self.index += 1;
        self.last.clear();
        self.fail_fast.sync(source.generation());
        Ok(())
    }
}

impl<E: fmt::Debug> fmt::Debug for LinkedSequence<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.keys().filter_map(|key| self.nodes.get(key)).map(|n| &n.element))
            .finish()
    }
}

impl<E: PartialEq> PartialEq for LinkedSequence<E> {
    fn eq(&self, other: &Self) -> bool {
        self.contents_eq(other)
    }
}

impl<E: ElementHash> Hash for LinkedSequence<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.contents_hash());
    }
}
