//! Named demonstrations and the data they run on

use std::collections::{BTreeMap, LinkedList};
use std::fmt::Display;
use std::io::Write;

use tracing::{info, warn};
use views_core::{run, RunConfig, RunStats, View, WriterSink};

use crate::demos;
use crate::error::{Error, Result};

/// A selectable demonstration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Square every element
    Squares,
    /// Differences of adjacent squares over a `Vec<i64>`
    SquareDifferences,
    /// The same differences over a `LinkedList<f64>`
    SquareDifferencesList,
    /// Squares of even elements
    EvenSquares,
    /// Squares of the first three elements
    FirstThree,
    /// Squares after dropping three elements
    DropThree,
    /// Squares after dropping while below six
    DropWhile,
    /// Split a sentence on spaces
    Split,
    /// Join words with a dash
    Join,
    /// Squares in reverse order
    Reverse,
    /// Keys of a map
    Keys,
    /// Values of a map
    Values,
    /// Indexed squares
    Enumerate,
    /// Pairs from two sequences
    Zip,
    /// Sum of squares
    SumOfSquares,
    /// Counting from one to nine
    Iota,
    /// Squares of every fifth number up to a hundred
    EveryFifth,
    /// Powers of two below ten thousand
    PowersOfTwo,
    /// Palindromic numbers below ten thousand
    Palindromes,
    /// Element-wise sum of two vectors
    IndexwiseSum,
    /// The closed-bound index loop the views replace
    InclusiveIndex,
}

impl Demo {
    /// Every demonstration, in presentation order
    pub const ALL: [Demo; 21] = [
        Demo::Squares,
        Demo::SquareDifferences,
        Demo::SquareDifferencesList,
        Demo::EvenSquares,
        Demo::FirstThree,
        Demo::DropThree,
        Demo::DropWhile,
        Demo::Split,
        Demo::Join,
        Demo::Reverse,
        Demo::Keys,
        Demo::Values,
        Demo::Enumerate,
        Demo::Zip,
        Demo::SumOfSquares,
        Demo::Iota,
        Demo::EveryFifth,
        Demo::PowersOfTwo,
        Demo::Palindromes,
        Demo::IndexwiseSum,
        Demo::InclusiveIndex,
    ];

    /// Name used in configuration
    pub fn name(self) -> &'static str {
        match self {
            Demo::Squares => "squares",
            Demo::SquareDifferences => "square-differences",
            Demo::SquareDifferencesList => "square-differences-list",
            Demo::EvenSquares => "even-squares",
            Demo::FirstThree => "first-three",
            Demo::DropThree => "drop-three",
            Demo::DropWhile => "drop-while",
            Demo::Split => "split",
            Demo::Join => "join",
            Demo::Reverse => "reverse",
            Demo::Keys => "keys",
            Demo::Values => "values",
            Demo::Enumerate => "enumerate",
            Demo::Zip => "zip",
            Demo::SumOfSquares => "sum-of-squares",
            Demo::Iota => "iota",
            Demo::EveryFifth => "every-fifth",
            Demo::PowersOfTwo => "powers-of-two",
            Demo::Palindromes => "palindromes",
            Demo::IndexwiseSum => "indexwise-sum",
            Demo::InclusiveIndex => "inclusive-index",
        }
    }

    /// Look a demonstration up by its configuration name
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.name() == name)
            .ok_or_else(|| Error::Config(format!("unknown demo: {name}")))
    }

    /// Run this demonstration, writing one line per produced value to `out`
    pub fn run(self, out: &mut dyn Write, config: &RunConfig) -> Result<RunStats> {
        info!(demo = self.name(), "running demo");

        let vector: Vec<i64> = (1..=10).collect();
        let list: LinkedList<f64> = (1..=10).map(f64::from).collect();
        let map = BTreeMap::from([(1, "one"), (2, "two")]);

        match self {
            Demo::Squares => emit(demos::squares(vector), out, config),
            Demo::SquareDifferences => emit(demos::square_differences(vector), out, config),
            Demo::SquareDifferencesList => emit(demos::square_differences(list), out, config),
            Demo::EvenSquares => emit(demos::even_squares(vector), out, config),
            Demo::FirstThree => emit(demos::first_three_squared(vector), out, config),
            Demo::DropThree => emit(demos::all_but_three_squared(vector), out, config),
            Demo::DropWhile => emit(demos::squares_from_six(vector), out, config),
            Demo::Split => {
                let words = demos::split_words("We finally have split!")?;
                emit(views_core::view(words), out, config)
            }
            Demo::Join => {
                let joined = demos::join_words(&["Let's", "join", "now"], "-");
                emit(views_core::view([joined]), out, config)
            }
            Demo::Reverse => emit(demos::reversed_squares(vector), out, config),
            Demo::Keys => emit(demos::map_keys(&map), out, config),
            Demo::Values => emit(demos::map_values(&map), out, config),
            Demo::Enumerate => {
                let lines = demos::enumerated_squares(vector)
                    .map(|(index, value)| format!("Index: {index}, Value: {value}"));
                emit(lines, out, config)
            }
            Demo::Zip => {
                let lines = demos::paired(vector, [10, 20, 30])
                    .map(|(left, right)| format!("Value 1: {left}, Value 2: {right}"));
                emit(lines, out, config)
            }
            Demo::SumOfSquares => {
                let sum = demos::sum_of_squares(vector);
                emit(views_core::view([sum]), out, config)
            }
            Demo::Iota => emit(demos::counting(1, 10), out, config),
            Demo::EveryFifth => emit(demos::every_fifth_squared()?, out, config),
            Demo::PowersOfTwo => emit(demos::powers_of_two_below(10_000), out, config),
            Demo::Palindromes => emit(demos::palindromes_below(10_000), out, config),
            Demo::IndexwiseSum => {
                let sums = demos::indexwise_sum(vector, (1..=10).rev());
                emit(sums, out, config)
            }
            Demo::InclusiveIndex => match demos::inclusive_index_squares(&vector) {
                Ok(squares) => emit(views_core::view(squares), out, config),
                Err(err) => {
                    warn!(demo = self.name(), error = %err, "index loop overran");
                    emit(views_core::view([format!("error: {err}")]), out, config)
                }
            },
        }
    }
}

fn emit<I>(view: View<I>, out: &mut dyn Write, config: &RunConfig) -> Result<RunStats>
where
    I: Iterator,
    I::Item: Display,
{
    let mut sink = WriterSink::new(out);
    Ok(run(view, &mut sink, config)?)
}
