//! Lazy, composable sequence views
//!
//! A view is a description of a transformation over a source sequence, not
//! a materialized result. Stages such as [`View::map`], [`View::filter`] or
//! [`View::adjacent`] wrap their predecessor's cursor and produce elements
//! only when the view is pulled. Views are plain [`Iterator`]s, so any
//! for-each caller can traverse them, and [`Sink`]s give them somewhere to
//! write.
//!
//! ```
//! use views_core::view;
//!
//! let differences: Vec<i64> = view(1..=5)
//!     .map(|x: i64| x * x)
//!     .pairwise()
//!     .map(|(previous, current)| current - previous)
//!     .collect();
//! assert_eq!(differences, vec![3, 5, 7, 9]);
//! ```

#![warn(missing_docs)]

pub mod dynamic;
pub mod error;
pub mod run;
pub mod sink;
pub mod stage;
pub mod text;
pub mod view;

// Re-export key types for convenience
pub use dynamic::{Cursor, DynView};
pub use error::{Error, Result};
pub use run::{run, RunConfig, RunStats};
pub use sink::{CallbackSink, CollectingSink, Sink, WriterSink};
pub use stage::StageKind;
pub use text::{join_str, split};
pub use view::{iota, iota_from, join, reduce, view, zip, View};
