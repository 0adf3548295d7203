// crates/flightprint-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded dataset.
///
/// Returned by [`crate::ReferenceStore::stats`]. `skipped` counts the raw
/// records dropped at load time because they failed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub locations: usize,
    pub population_centers: usize,
    pub skipped: usize,
}
