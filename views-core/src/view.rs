//! Composable, lazily evaluated views
//!
//! A [`View`] wraps a cursor (any [`Iterator`]) and records the stages applied
//! to it. Every stage constructor consumes the view and returns a new one
//! wrapping its predecessor; no element is pulled until the view is traversed.
//! The engine never hands out raw indices, so there is no bound for a caller
//! to get wrong.

use std::fmt;
use std::iter::{Enumerate, Filter, Map, Rev, Skip, SkipWhile, StepBy, Take, TakeWhile, Zip};
use std::ops::{Range, RangeFrom};

use tracing::trace;

use crate::error::{Error, Result};
use crate::run::{run, RunConfig};
use crate::sink::Sink;
use crate::stage::{Adjacent, JoinWith, Pairwise, SplitOn, StageKind};

/// A lazily evaluated pipeline of stages rooted at a source
#[derive(Clone)]
pub struct View<I> {
    /// Cursor of the last stage
    cursor: I,

    /// Stages applied since the source, in order
    plan: Vec<StageKind>,
}

/// Root a view at any owned container, borrowed container or generator
pub fn view<S: IntoIterator>(source: S) -> View<S::IntoIter> {
    View::from_source(source)
}

/// Successive values from `start` up to but excluding `end`
pub fn iota<T>(start: T, end: T) -> View<Range<T>>
where
    Range<T>: Iterator<Item = T>,
{
    View::with_plan(start..end, vec![StageKind::Iota])
}

/// Successive values from `start` without bound
///
/// The resulting view is infinite; bound it with [`View::take`] or
/// [`View::take_while`] before draining it.
pub fn iota_from<T>(start: T) -> View<RangeFrom<T>>
where
    RangeFrom<T>: Iterator<Item = T>,
{
    View::with_plan(start.., vec![StageKind::Iota])
}

/// Pairs of elements from two sources, truncated to the shorter one
pub fn zip<A, B>(a: A, b: B) -> View<Zip<A::IntoIter, B::IntoIter>>
where
    A: IntoIterator,
    B: IntoIterator,
{
    View::with_plan(
        a.into_iter().zip(b),
        vec![StageKind::Source, StageKind::Zip],
    )
}

/// Flatten a sequence of sequences with `separator` between each of them
pub fn join<S, P>(sequences: S, separator: P) -> View<JoinWith<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    P: IntoIterator<Item = <S::Item as IntoIterator>::Item>,
    <S::Item as IntoIterator>::Item: Clone,
{
    view(sequences).join_with(separator)
}

/// Eagerly fold a sequence left to right, starting from `identity`
pub fn reduce<S, T, F>(sequence: S, op: F, identity: T) -> T
where
    S: IntoIterator,
    F: FnMut(T, S::Item) -> T,
{
    sequence.into_iter().fold(identity, op)
}

impl<I: Iterator> View<I> {
    /// Create a view over a source
    pub fn from_source<S: IntoIterator<IntoIter = I>>(source: S) -> Self {
        Self::with_plan(source.into_iter(), vec![StageKind::Source])
    }

    fn with_plan(cursor: I, plan: Vec<StageKind>) -> Self {
        Self { cursor, plan }
    }

    fn push<J, F>(self, stage: StageKind, build: F) -> View<J>
    where
        F: FnOnce(I) -> J,
    {
        let View { cursor, mut plan } = self;
        plan.push(stage);
        View {
            cursor: build(cursor),
            plan,
        }
    }

    pub(crate) fn tagged(mut self, stage: StageKind) -> Self {
        self.plan.push(stage);
        self
    }

    /// Stages applied since the source
    pub fn plan(&self) -> &[StageKind] {
        &self.plan
    }

    /// Render the plan as `source | map | take(3)`
    pub fn describe(&self) -> String {
        self.plan
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Produce `f(x)` for every upstream `x`
    pub fn map<B, F>(self, f: F) -> View<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        self.push(StageKind::Map, |cursor| cursor.map(f))
    }

    /// Emit only the elements for which `predicate` holds
    pub fn filter<P>(self, predicate: P) -> View<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.push(StageKind::Filter, |cursor| cursor.filter(predicate))
    }

    /// Emit at most the first `n` elements
    pub fn take(self, n: usize) -> View<Take<I>> {
        self.push(StageKind::Take(n), |cursor| cursor.take(n))
    }

    /// Skip the first `n` elements and emit the rest
    pub fn drop(self, n: usize) -> View<Skip<I>> {
        self.push(StageKind::Drop(n), |cursor| cursor.skip(n))
    }

    /// Skip elements while `predicate` holds, then emit everything remaining
    ///
    /// The predicate is not consulted again after its first failure.
    pub fn drop_while<P>(self, predicate: P) -> View<SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.push(StageKind::DropWhile, |cursor| cursor.skip_while(predicate))
    }

    /// Emit elements while `predicate` holds and stop at its first failure
    pub fn take_while<P>(self, predicate: P) -> View<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.push(StageKind::TakeWhile, |cursor| cursor.take_while(predicate))
    }

    /// Emit the first element and every `step`-th element after it
    pub fn stride(self, step: usize) -> Result<View<StepBy<I>>> {
        if step == 0 {
            trace!("rejecting stride of zero");
            return Err(Error::InvalidArgument("stride step must be at least 1".into()));
        }
        Ok(self.push(StageKind::Stride(step), |cursor| cursor.step_by(step)))
    }

    /// Sliding windows of `size` consecutive elements
    pub fn adjacent(self, size: usize) -> Result<View<Adjacent<I>>>
    where
        I::Item: Clone,
    {
        if size < 2 {
            trace!(size, "rejecting adjacent window");
            return Err(Error::InvalidArgument(format!(
                "adjacent window size must be at least 2, got {size}"
            )));
        }
        Ok(self.push(StageKind::Adjacent(size), |cursor| Adjacent::new(cursor, size)))
    }

    /// Sliding windows of two elements as `(previous, current)`
    pub fn pairwise(self) -> View<Pairwise<I>>
    where
        I::Item: Clone,
    {
        self.push(StageKind::Pairwise, Pairwise::new)
    }

    /// `(index, value)` pairs, indices starting at zero
    pub fn enumerate(self) -> View<Enumerate<I>> {
        self.push(StageKind::Enumerate, Iterator::enumerate)
    }

    /// Pair this view with another source, truncated to the shorter one
    pub fn zip_with<S: IntoIterator>(self, other: S) -> View<Zip<I, S::IntoIter>> {
        self.push(StageKind::Zip, |cursor| cursor.zip(other))
    }

    /// Tokens separated by `delimiter`
    pub fn split_on(self, delimiter: I::Item) -> View<SplitOn<I>>
    where
        I::Item: PartialEq,
    {
        self.push(StageKind::Split, |cursor| SplitOn::new(cursor, delimiter))
    }

    /// Fold the view left to right, starting from `identity`
    pub fn reduce<T, F>(self, op: F, identity: T) -> T
    where
        F: FnMut(T, I::Item) -> T,
    {
        self.cursor.fold(identity, op)
    }

    /// Drain every element into `sink`, returning how many were written
    pub fn drain_into<K>(self, sink: &mut K) -> Result<u64>
    where
        K: Sink<Item = I::Item>,
    {
        run(self, sink, &RunConfig::default()).map(|stats| stats.items_emitted)
    }
}

impl<I: DoubleEndedIterator> View<I> {
    /// Emit the elements in reverse order
    ///
    /// Only available on bidirectional cursors. For cursors whose capability
    /// is only known at runtime see [`crate::dynamic::DynView::try_reverse`].
    pub fn reverse(self) -> View<Rev<I>> {
        self.push(StageKind::Reverse, Iterator::rev)
    }
}

impl<I, K, V> View<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Project only the keys of a key-value source
    pub fn keys(self) -> View<Map<I, fn((K, V)) -> K>> {
        self.push(StageKind::Keys, |cursor| cursor.map(key_of as fn((K, V)) -> K))
    }

    /// Project only the values of a key-value source
    pub fn values(self) -> View<Map<I, fn((K, V)) -> V>> {
        self.push(StageKind::Values, |cursor| cursor.map(value_of as fn((K, V)) -> V))
    }
}

fn key_of<K, V>((key, _): (K, V)) -> K {
    key
}

fn value_of<K, V>((_, value): (K, V)) -> V {
    value
}

impl<I> View<I>
where
    I: Iterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: Clone,
{
    /// Flatten a view of sequences with `separator` between each of them
    pub fn join_with<P>(self, separator: P) -> View<JoinWith<I>>
    where
        P: IntoIterator<Item = <I::Item as IntoIterator>::Item>,
    {
        let separator = separator.into_iter().collect();
        self.push(StageKind::Join, |cursor| JoinWith::new(cursor, separator))
    }
}

impl<I: Iterator> Iterator for View<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for View<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursor.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for View<I> {}

impl<I> fmt::Debug for View<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View").field("plan", &self.plan).finish()
    }
}
