//! Error types for lazy views

use std::io;
use thiserror::Error;

/// Result type for view operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for view operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while writing to a sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stage is not supported by the cursor's traversal capability
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Invalid argument given to a stage constructor
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Index out of bounds during checked indexed access
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the indexed sequence
        len: usize,
    },

    /// Sink rejected an item
    #[error("Sink error: {0}")]
    Sink(String),
}

static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
