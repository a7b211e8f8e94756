//! Type-erased views whose traversal capability is known only at runtime
//!
//! [`crate::View::reverse`] is rejected by the compiler on forward-only
//! cursors. Once a cursor is boxed that information is gone, so a
//! [`DynView`] carries it as data and reports misuse as
//! [`Error::UnsupportedOperation`].

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};

/// A boxed cursor tagged with its traversal capability
pub enum Cursor<'a, T> {
    /// Can only be advanced from the front
    Forward(Box<dyn Iterator<Item = T> + 'a>),

    /// Can be advanced from either end
    Bidirectional(Box<dyn DoubleEndedIterator<Item = T> + 'a>),
}

impl<T> Cursor<'_, T> {
    /// Whether this cursor can be traversed from the back
    pub fn is_bidirectional(&self) -> bool {
        matches!(self, Cursor::Bidirectional(_))
    }
}

impl<T> Iterator for Cursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            Cursor::Forward(inner) => inner.next(),
            Cursor::Bidirectional(inner) => inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Cursor::Forward(inner) => inner.size_hint(),
            Cursor::Bidirectional(inner) => inner.size_hint(),
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Forward(_) => f.write_str("Cursor::Forward"),
            Cursor::Bidirectional(_) => f.write_str("Cursor::Bidirectional"),
        }
    }
}

/// A view over a boxed cursor
#[derive(Debug)]
pub struct DynView<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> DynView<'a, T> {
    /// Wrap a cursor that can only move forward, such as a generator
    pub fn forward<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            cursor: Cursor::Forward(Box::new(source.into_iter())),
        }
    }

    /// Wrap a cursor that can move from either end
    pub fn bidirectional<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator + 'a,
    {
        Self {
            cursor: Cursor::Bidirectional(Box::new(source.into_iter())),
        }
    }

    /// Whether [`DynView::try_reverse`] will succeed
    pub fn is_bidirectional(&self) -> bool {
        self.cursor.is_bidirectional()
    }

    /// Produce `f(x)` for every upstream `x`; keeps the capability
    pub fn map<U: 'a, F>(self, f: F) -> DynView<'a, U>
    where
        F: FnMut(T) -> U + 'a,
    {
        let cursor = match self.cursor {
            Cursor::Forward(inner) => Cursor::Forward(Box::new(inner.map(f))),
            Cursor::Bidirectional(inner) => Cursor::Bidirectional(Box::new(inner.map(f))),
        };
        DynView { cursor }
    }

    /// Emit only the elements for which `predicate` holds; keeps the capability
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        let cursor = match self.cursor {
            Cursor::Forward(inner) => Cursor::Forward(Box::new(inner.filter(predicate))),
            Cursor::Bidirectional(inner) => {
                Cursor::Bidirectional(Box::new(inner.filter(predicate)))
            }
        };
        Self { cursor }
    }

    /// Emit at most `n` elements
    ///
    /// The length of the upstream is not known here, so the result can only
    /// move forward.
    pub fn take(self, n: usize) -> Self {
        Self {
            cursor: Cursor::Forward(Box::new(self.cursor.take(n))),
        }
    }

    /// Emit the elements in reverse order
    pub fn try_reverse(self) -> Result<Self> {
        match self.cursor {
            Cursor::Bidirectional(inner) => Ok(Self {
                cursor: Cursor::Bidirectional(Box::new(inner.rev())),
            }),
            Cursor::Forward(_) => {
                trace!("rejecting reverse on a forward-only cursor");
                Err(Error::UnsupportedOperation(
                    "reverse requires a bidirectional cursor".into(),
                ))
            }
        }
    }

    /// Turn this into a [`crate::View`] so the static stages apply
    pub fn into_view(self) -> crate::View<Cursor<'a, T>> {
        crate::View::from_source(self.cursor)
    }
}

impl<T> Iterator for DynView<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.cursor.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}
