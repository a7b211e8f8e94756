//! Demonstrations of lazy views against index-based loops
//!
//! Each routine in [`demos`] shows one idea: squaring, windowed differences,
//! filtering, splitting and joining, zipping, enumerating, reducing. The
//! [`Demo`] registry names them so the runner binary can select them from
//! configuration.

mod error;

pub mod config;
pub mod demos;
pub mod registry;

pub use config::DemoConfig;
pub use error::{Error, Result};
pub use registry::Demo;
