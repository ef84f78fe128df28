#![forbid(unsafe_code)]

//! Core: geometry, interaction bands, and pointer-input primitives.

pub mod edge;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod margins;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
