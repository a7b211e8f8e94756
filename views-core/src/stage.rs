//! Stage descriptors and the buffering cursors that std does not provide
//!
//! Most stages are thin wrappers over `std::iter` adapters. The ones here
//! keep a small amount of state between pulls: a window of the last `k`
//! items, the previous item, a partial token, or a position inside the
//! separator being interspersed.

use std::collections::VecDeque;
use std::fmt;
use std::iter::Fuse;
use std::mem;

/// Descriptor of one stage in a view's plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// The root of the pipeline
    Source,
    /// Successive integers in a bounded or unbounded range
    Iota,
    /// Element-wise function
    Map,
    /// Predicate filter
    Filter,
    /// At most `n` items
    Take(usize),
    /// Skip the first `n` items
    Drop(usize),
    /// Skip while a predicate holds
    DropWhile,
    /// Emit while a predicate holds
    TakeWhile,
    /// Every `n`-th item
    Stride(usize),
    /// Sliding windows of `k` items
    Adjacent(usize),
    /// Sliding windows of two items as tuples
    Pairwise,
    /// Reverse order
    Reverse,
    /// (index, value) pairs
    Enumerate,
    /// Pairs from two cursors
    Zip,
    /// Key projection
    Keys,
    /// Value projection
    Values,
    /// Delimiter-separated tokens
    Split,
    /// Flatten with separator
    Join,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Source => write!(f, "source"),
            StageKind::Iota => write!(f, "iota"),
            StageKind::Map => write!(f, "map"),
            StageKind::Filter => write!(f, "filter"),
            StageKind::Take(n) => write!(f, "take({n})"),
            StageKind::Drop(n) => write!(f, "drop({n})"),
            StageKind::DropWhile => write!(f, "drop_while"),
            StageKind::TakeWhile => write!(f, "take_while"),
            StageKind::Stride(n) => write!(f, "stride({n})"),
            StageKind::Adjacent(k) => write!(f, "adjacent({k})"),
            StageKind::Pairwise => write!(f, "pairwise"),
            StageKind::Reverse => write!(f, "reverse"),
            StageKind::Enumerate => write!(f, "enumerate"),
            StageKind::Zip => write!(f, "zip"),
            StageKind::Keys => write!(f, "keys"),
            StageKind::Values => write!(f, "values"),
            StageKind::Split => write!(f, "split"),
            StageKind::Join => write!(f, "join"),
        }
    }
}

/// Sliding windows of a fixed size over the upstream cursor
///
/// Holds at most `size` items. A window is only emitted once the buffer
/// is full, so a source shorter than `size` produces nothing. The upstream
/// is fused so a window never spans a gap in a cursor that resumes.
pub struct Adjacent<I: Iterator> {
    inner: Fuse<I>,
    window: VecDeque<I::Item>,
    size: usize,
}

impl<I: Iterator> Adjacent<I> {
    /// Callers validate `size >= 2` before building the stage.
    pub(crate) fn new(inner: I, size: usize) -> Self {
        Self {
            inner: inner.fuse(),
            window: VecDeque::with_capacity(size),
            size,
        }
    }
}

impl<I> Iterator for Adjacent<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.window.len() < self.size {
            let item = self.inner.next()?;
            self.window.push_back(item);
        }

        let window = self.window.iter().cloned().collect();
        self.window.pop_front();
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let buffered = self.window.len();
        let windows = |remaining: usize| {
            remaining
                .saturating_add(buffered + 1)
                .saturating_sub(self.size)
        };
        (windows(lower), upper.map(windows))
    }
}

/// Windows of two as `(previous, current)` tuples
pub struct Pairwise<I: Iterator> {
    inner: Fuse<I>,
    previous: Option<I::Item>,
}

impl<I: Iterator> Pairwise<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self {
            inner: inner.fuse(),
            previous: None,
        }
    }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let previous = match self.previous.take() {
            Some(previous) => previous,
            None => self.inner.next()?,
        };
        let current = self.inner.next()?;
        self.previous = Some(current.clone());
        Some((previous, current))
    }
}

/// Tokens of an element sequence separated by a delimiter element
///
/// Leading, trailing and consecutive delimiters produce empty tokens. An
/// empty upstream produces no tokens at all.
pub struct SplitOn<I: Iterator> {
    inner: I,
    delimiter: I::Item,
    token: Vec<I::Item>,
    started: bool,
    finished: bool,
}

impl<I: Iterator> SplitOn<I> {
    pub(crate) fn new(inner: I, delimiter: I::Item) -> Self {
        Self {
            inner,
            delimiter,
            token: Vec::new(),
            started: false,
            finished: false,
        }
    }
}

impl<I> Iterator for SplitOn<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.inner.next() {
                Some(item) => {
                    self.started = true;
                    if item == self.delimiter {
                        return Some(mem::take(&mut self.token));
                    }
                    self.token.push(item);
                }
                None => {
                    self.finished = true;
                    return self.started.then(|| mem::take(&mut self.token));
                }
            }
        }
    }
}

/// Flattens a cursor of sequences, emitting a separator between them
pub struct JoinWith<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    outer: I,
    front: Option<<I::Item as IntoIterator>::IntoIter>,
    separator: Vec<<I::Item as IntoIterator>::Item>,
    separator_pos: Option<usize>,
}

impl<I> JoinWith<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    pub(crate) fn new(outer: I, separator: Vec<<I::Item as IntoIterator>::Item>) -> Self {
        Self {
            outer,
            front: None,
            separator,
            separator_pos: None,
        }
    }
}

impl<I> Iterator for JoinWith<I>
where
    I: Iterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: Clone,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pos) = self.separator_pos {
                if let Some(item) = self.separator.get(pos) {
                    self.separator_pos = Some(pos + 1);
                    return Some(item.clone());
                }
                self.separator_pos = None;
            }

            if let Some(front) = self.front.as_mut() {
                if let Some(item) = front.next() {
                    return Some(item);
                }
            }

            let next = self.outer.next()?;
            if self.front.is_some() {
                self.separator_pos = Some(0);
            }
            self.front = Some(next.into_iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(vec![1, 2, 3, 4], 2, vec![vec![1, 2], vec![2, 3], vec![3, 4]] ; "pairs")]
    #[test_case(vec![1, 2, 3, 4], 3, vec![vec![1, 2, 3], vec![2, 3, 4]] ; "triples")]
    #[test_case(vec![1, 2, 3], 3, vec![vec![1, 2, 3]] ; "exact length")]
    #[test_case(vec![1, 2], 3, vec![] ; "shorter than window")]
    #[test_case(vec![], 2, vec![] ; "empty")]
    fn test_adjacent_windows(source: Vec<i32>, size: usize, expected: Vec<Vec<i32>>) {
        let windows: Vec<_> = Adjacent::new(source.into_iter(), size).collect();
        assert_eq!(windows, expected);
    }

    #[test]
    fn test_adjacent_size_hint_matches_count() {
        let mut windows = Adjacent::new(0..10, 4);
        assert_eq!(windows.size_hint(), (7, Some(7)));
        windows.next();
        assert_eq!(windows.size_hint(), (6, Some(6)));
        assert_eq!(windows.count(), 6);
    }

    #[test]
    fn test_pairwise() {
        let pairs: Vec<_> = Pairwise::new([1, 4, 9].into_iter()).collect();
        assert_eq!(pairs, vec![(1, 4), (4, 9)]);

        assert_eq!(Pairwise::new([1].into_iter()).next(), None);
    }

    /// Yields 1, 2, then `None`, then resumes with 3, 4
    fn resuming() -> impl Iterator<Item = i32> {
        let mut items = [Some(1), Some(2), None, Some(3), Some(4)].into_iter();
        std::iter::from_fn(move || items.next().flatten())
    }

    #[test]
    fn test_windows_stop_at_first_exhaustion() {
        let mut windows = Adjacent::new(resuming(), 2);
        assert_eq!(windows.next(), Some(vec![1, 2]));
        assert_eq!(windows.next(), None);
        assert_eq!(windows.next(), None);

        let mut pairs = Pairwise::new(resuming());
        assert_eq!(pairs.next(), Some((1, 2)));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
    }

    #[test_case("a,b,c", vec!["a", "b", "c"] ; "plain")]
    #[test_case(",a", vec!["", "a"] ; "leading")]
    #[test_case("a,", vec!["a", ""] ; "trailing")]
    #[test_case("a,,b", vec!["a", "", "b"] ; "consecutive")]
    #[test_case(",", vec!["", ""] ; "only delimiter")]
    #[test_case("", vec![] ; "empty")]
    fn test_split_on(input: &str, expected: Vec<&str>) {
        let tokens: Vec<String> = SplitOn::new(input.chars(), ',')
            .map(|token| token.into_iter().collect())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_join_with_separator() {
        let parts = vec![vec![1, 2], vec![3], vec![], vec![4]];
        let joined: Vec<_> = JoinWith::new(parts.into_iter(), vec![0, 0]).collect();
        assert_eq!(joined, vec![1, 2, 0, 0, 3, 0, 0, 0, 0, 4]);
    }

    #[test]
    fn test_join_with_empty_input() {
        let parts: Vec<Vec<i32>> = Vec::new();
        assert_eq!(JoinWith::new(parts.into_iter(), vec![0]).count(), 0);
    }

    #[test]
    fn test_stage_kind_display() {
        assert_eq!(StageKind::Take(3).to_string(), "take(3)");
        assert_eq!(StageKind::DropWhile.to_string(), "drop_while");
    }
}
