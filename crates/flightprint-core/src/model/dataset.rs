// crates/flightprint-core/src/model/dataset.rs
use super::domain::{Location, PopulationCenter};
use crate::common::DbStats;
use crate::error::Result;
use crate::traits::ReferenceStore;
use serde::{Deserialize, Serialize};

/// Validated records of one source file plus how many raw rows were dropped.
///
/// This is also the unit written to the bincode cache.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Table<T> {
    pub fn new(records: Vec<T>) -> Self {
        Table {
            records,
            skipped: 0,
        }
    }
}

/// The in-memory reference store.
///
/// Loaded once (see [`crate::loader`]) and never mutated afterwards, so a
/// shared `&Dataset` can serve any number of concurrent requests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Airports in source order. Order matters: it is the final tie-break.
    pub locations: Vec<Location>,
    /// Cities in source order.
    pub population_centers: Vec<PopulationCenter>,
    pub skipped: usize,
}

impl Dataset {
    pub fn new(locations: Vec<Location>, population_centers: Vec<PopulationCenter>) -> Self {
        Dataset {
            locations,
            population_centers,
            skipped: 0,
        }
    }

    pub fn from_tables(locations: Table<Location>, centers: Table<PopulationCenter>) -> Self {
        Dataset {
            locations: locations.records,
            population_centers: centers.records,
            skipped: locations.skipped + centers.skipped,
        }
    }
}

impl ReferenceStore for Dataset {
    fn locations(&self) -> Result<&[Location]> {
        Ok(&self.locations)
    }

    fn population_centers(&self) -> Result<&[PopulationCenter]> {
        Ok(&self.population_centers)
    }

    fn stats(&self) -> DbStats {
        DbStats {
            locations: self.locations.len(),
            population_centers: self.population_centers.len(),
            skipped: self.skipped,
        }
    }
}
