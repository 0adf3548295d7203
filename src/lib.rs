//! Workspace host crate. Re-exports [`flightprint_core`] so the demo under
//! `demos/` can be run from the repository root:
//!
//! ```text
//! cargo run --example basic_usage
//! ```
pub use flightprint_core::*;
