//! One routine per idea
//!
//! Every routine builds a view and returns it untraversed, except the
//! reductions, which return the folded value.

use std::collections::BTreeMap;
use std::ops::{Add, Mul, Sub};

use views_core::{iota, iota_from, join, reduce, split, view, zip, Error, Result, View};

/// `value * value` for anything that multiplies
pub fn square<T: Mul<Output = T> + Copy>(value: T) -> T {
    value * value
}

/// Square every element
pub fn squares<S, T>(source: S) -> View<impl Iterator<Item = T>>
where
    S: IntoIterator<Item = T>,
    T: Mul<Output = T> + Copy,
{
    view(source).map(square)
}

/// Differences between the squares of neighbouring elements
///
/// Works for any source whose elements multiply and subtract, so a `Vec` of
/// integers and a linked list of floats go through the same code.
pub fn square_differences<S, T>(source: S) -> View<impl Iterator<Item = T>>
where
    S: IntoIterator<Item = T>,
    T: Mul<Output = T> + Sub<Output = T> + Copy,
{
    view(source)
        .map(square)
        .pairwise()
        .map(|(previous, current)| current - previous)
}

/// Squares of the even elements
pub fn even_squares<S>(source: S) -> View<impl Iterator<Item = i64>>
where
    S: IntoIterator<Item = i64>,
{
    view(source).filter(|value| value % 2 == 0).map(square)
}

/// Squares of the first three elements
pub fn first_three_squared<S>(source: S) -> View<impl Iterator<Item = i64>>
where
    S: IntoIterator<Item = i64>,
{
    view(source).take(3).map(square)
}

/// Squares of everything after the first three elements
pub fn all_but_three_squared<S>(source: S) -> View<impl Iterator<Item = i64>>
where
    S: IntoIterator<Item = i64>,
{
    view(source).drop(3).map(square)
}

/// Squares of everything from the first element that is not below six
pub fn squares_from_six<S>(source: S) -> View<impl Iterator<Item = i64>>
where
    S: IntoIterator<Item = i64>,
{
    view(source).drop_while(|&value| value < 6).map(square)
}

/// Space-separated words of `text`
pub fn split_words(text: &str) -> Result<Vec<&str>> {
    Ok(split(text, " ")?.collect())
}

/// `words` joined with `separator`
pub fn join_words(words: &[&str], separator: &str) -> String {
    join(words.iter().copied().map(str::chars), separator.chars()).collect()
}

/// Squares in reverse order
pub fn reversed_squares<S, T>(source: S) -> View<impl Iterator<Item = T>>
where
    S: IntoIterator<Item = T>,
    S::IntoIter: DoubleEndedIterator,
    T: Mul<Output = T> + Copy,
{
    view(source).reverse().map(square)
}

/// Keys of an ordered map
pub fn map_keys<K, V>(map: &BTreeMap<K, V>) -> View<impl Iterator<Item = &K>> {
    view(map).keys()
}

/// Values of an ordered map
pub fn map_values<K, V>(map: &BTreeMap<K, V>) -> View<impl Iterator<Item = &V>> {
    view(map).values()
}

/// `(index, square)` pairs
pub fn enumerated_squares<S, T>(source: S) -> View<impl Iterator<Item = (usize, T)>>
where
    S: IntoIterator<Item = T>,
    T: Mul<Output = T> + Copy,
{
    view(source)
        .enumerate()
        .map(|(index, value)| (index, square(value)))
}

/// Pairs of elements from both sources, up to the shorter one
pub fn paired<A, B>(a: A, b: B) -> View<impl Iterator<Item = (A::Item, B::Item)>>
where
    A: IntoIterator,
    B: IntoIterator,
{
    zip(a, b)
}

/// Sum of the squares of every element
pub fn sum_of_squares<S>(source: S) -> i64
where
    S: IntoIterator<Item = i64>,
{
    reduce(squares(source), |sum, value| sum + value, 0)
}

/// Integers from `start` up to but excluding `end`
pub fn counting(start: i64, end: i64) -> View<impl Iterator<Item = i64>> {
    iota(start, end)
}

/// Squares of every fifth number in `1..=100`
pub fn every_fifth_squared() -> Result<View<impl Iterator<Item = i64>>> {
    Ok(iota(1, 101).drop(4).stride(5)?.map(square))
}

/// Powers of two strictly below `limit`
pub fn powers_of_two_below(limit: u64) -> View<impl Iterator<Item = u64>> {
    iota_from(0u32)
        .take_while(|&exponent| exponent < u64::BITS)
        .map(|exponent| 1u64 << exponent)
        .take_while(move |&power| power < limit)
}

/// Positive numbers below `limit` that read the same in both directions
pub fn palindromes_below(limit: u64) -> View<impl Iterator<Item = u64>> {
    iota(1, limit).filter(|&number| is_palindrome(number))
}

fn is_palindrome(number: u64) -> bool {
    let digits = number.to_string();
    digits.chars().eq(digits.chars().rev())
}

/// Element-wise sum of two sequences, up to the shorter one
pub fn indexwise_sum<A, B, T>(a: A, b: B) -> View<impl Iterator<Item = T>>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Add<Output = T>,
{
    zip(a, b).map(|(left, right)| left + right)
}

/// Squares computed with a closed `0..=len` index loop
///
/// This is the loop the views replace. The last index is one past the end,
/// so with checked access it fails on every input, including an empty one.
pub fn inclusive_index_squares(values: &[i64]) -> Result<Vec<i64>> {
    let len = values.len();
    let mut squares = Vec::with_capacity(len);
    for index in 0..=len {
        let value = values
            .get(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        squares.push(square(*value));
    }
    Ok(squares)
}
