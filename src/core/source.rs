//! Pollable element sources.
//!
//! An element source produces query solutions lazily. Consumers poll
//! [`ElementSource::status`] and take an element with
//! [`ElementSource::next_element`] only when one is ready.

use std::fmt;
use std::iter::Peekable;

/// Polling state of an element source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// Exhausted. Terminal.
    NoMoreElements,
    /// An element can be taken now.
    ElementReady,
    /// Not exhausted, but nothing available yet. Poll again.
    NoElementsReady,
}

pub type BoxSource<T> = Box<dyn ElementSource<T>>;

pub trait ElementSource<T>: fmt::Debug {
    fn status(&mut self) -> Status;

    /// Take the ready element.
    ///
    /// # Panics
    ///
    /// If no element is ready. Check [`status`](Self::status) first.
    fn next_element(&mut self) -> T;

    /// Replace this source by an equivalent one with less indirection.
    fn simplify(self: Box<Self>) -> BoxSource<T>;
}

/// The source without elements.
pub fn empty<T: 'static>() -> BoxSource<T> {
    Box::new(EmptySource)
}

pub fn singleton<T: 'static>(x: T) -> BoxSource<T> {
    from_iter(std::iter::once(x))
}

/// A source that is ready as long as the iterator has items.
pub fn from_iter<I>(iter: I) -> BoxSource<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    Box::new(IterSource {
        iter: iter.into_iter().peekable(),
    })
}

/// Defer building a source until it is first polled.
pub fn suspension<T: 'static>(thunk: impl 'static + FnOnce() -> BoxSource<T>) -> BoxSource<T> {
    Box::new(SuspendedSource {
        thunk: Some(Box::new(thunk)),
        source: empty(),
    })
}

/// Poll `source` to exhaustion, yielding every element.
///
/// Sources that never leave `NoElementsReady` make this loop forever.
pub fn drain<T>(source: BoxSource<T>) -> Drain<T> {
    Drain(source)
}

#[derive(Debug, Copy, Clone, Default)]
pub struct EmptySource;

impl<T: 'static> ElementSource<T> for EmptySource {
    fn status(&mut self) -> Status {
        Status::NoMoreElements
    }

    fn next_element(&mut self) -> T {
        panic!("no element in empty source")
    }

    fn simplify(self: Box<Self>) -> BoxSource<T> {
        self
    }
}

pub struct IterSource<I: Iterator> {
    iter: Peekable<I>,
}

impl<I: Iterator> fmt::Debug for IterSource<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Iter")
    }
}

impl<I> ElementSource<I::Item> for IterSource<I>
where
    I: 'static + Iterator,
    I::Item: 'static,
{
    fn status(&mut self) -> Status {
        match self.iter.peek() {
            Some(_) => Status::ElementReady,
            None => Status::NoMoreElements,
        }
    }

    fn next_element(&mut self) -> I::Item {
        match self.iter.next() {
            Some(x) => x,
            None => panic!("no element ready in iterator source"),
        }
    }

    fn simplify(self: Box<Self>) -> BoxSource<I::Item> {
        self
    }
}

pub struct SuspendedSource<T> {
    thunk: Option<Box<dyn FnOnce() -> BoxSource<T>>>,
    source: BoxSource<T>,
}

impl<T> fmt::Debug for SuspendedSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.thunk {
            Some(_) => write!(f, "Suspended(...)"),
            None => write!(f, "Suspended({:?})", self.source),
        }
    }
}

impl<T: 'static> ElementSource<T> for SuspendedSource<T> {
    fn status(&mut self) -> Status {
        match self.thunk.take() {
            Some(thunk) => {
                self.source = thunk();
                Status::NoElementsReady
            }
            None => self.source.status(),
        }
    }

    fn next_element(&mut self) -> T {
        if self.thunk.is_some() {
            panic!("no element ready in suspended source");
        }
        self.source.next_element()
    }

    fn simplify(self: Box<Self>) -> BoxSource<T> {
        if self.thunk.is_some() {
            return self;
        }
        let this = *self;
        this.source.simplify()
    }
}

/// Concatenation of child sources that prunes exhausted children.
///
/// Children are owned exclusively. Polling removes every child found
/// exhausted, so a pruned child is never polled again. Not safe for
/// concurrent consumers; each query owns its own tree.
pub struct CompositeElementSource<T> {
    children: Vec<BoxSource<T>>,
    active: Option<usize>,
}

impl<T> Default for CompositeElementSource<T> {
    fn default() -> Self {
        CompositeElementSource {
            children: vec![],
            active: None,
        }
    }
}

impl<T: 'static> CompositeElementSource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, child: BoxSource<T>) {
        self.children.push(child);
    }

    pub fn get(&self, i: usize) -> Option<&dyn ElementSource<T>> {
        self.children.get(i).map(|c| &**c)
    }

    pub fn number_of_children(&self) -> usize {
        self.children.len()
    }
}

impl<T: 'static> ElementSource<T> for CompositeElementSource<T> {
    /// Scan children left to right, starting at the last ready child and
    /// wrapping around, so every child is polled at most once per call.
    fn status(&mut self) -> Status {
        let total = self.children.len();
        let start = self.active.unwrap_or(0).min(total);
        let mut i = start;

        for _ in 0..total {
            if i >= self.children.len() {
                i = 0;
            }
            match self.children[i].status() {
                Status::ElementReady => {
                    self.active = Some(i);
                    return Status::ElementReady;
                }
                Status::NoMoreElements => {
                    self.children.remove(i);
                    tracing::trace!(
                        index = i,
                        remaining = self.children.len(),
                        "pruned exhausted child source"
                    );
                }
                Status::NoElementsReady => i += 1,
            }
        }

        self.active = None;
        if self.children.is_empty() {
            Status::NoMoreElements
        } else {
            Status::NoElementsReady
        }
    }

    fn next_element(&mut self) -> T {
        let ready = match self.active {
            Some(i) if i < self.children.len() => Some(i),
            _ => match self.status() {
                Status::ElementReady => self.active,
                _ => None,
            },
        };
        match ready {
            Some(i) => self.children[i].next_element(),
            None => panic!("no element ready in composite element source"),
        }
    }

    fn simplify(mut self: Box<Self>) -> BoxSource<T> {
        match self.children.len() {
            0 => empty(),
            1 => self.children.remove(0),
            _ => self,
        }
    }
}

impl<T> fmt::Debug for CompositeElementSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Composite(")?;
        let mut iter = self.children.iter();
        if let Some(first) = iter.next() {
            write!(f, "{:?}", first)?;
        }
        for child in iter {
            write!(f, ", {:?}", child)?;
        }
        write!(f, ")")
    }
}

/// Iterator over the elements of a drained source.
pub struct Drain<T>(BoxSource<T>);

impl<T> Iterator for Drain<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.0.status() {
                Status::ElementReady => return Some(self.0.next_element()),
                Status::NoMoreElements => return None,
                Status::NoElementsReady => continue,
            }
        }
    }
}
