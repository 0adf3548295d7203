// crates/flightprint-core/src/model/mod.rs
pub mod convert;
pub mod dataset;
pub mod domain;
pub mod raw;

pub use dataset::{Dataset, Table};
pub use domain::{
    AirportCode, CabinClass, Distance, DistanceUnit, Estimate, Footprint, Itinerary, Leg,
    Location, NearestMatch, PopulationCenter, SearchHit, SearchQuery,
};

/// Suffix appended to a source file name for its bincode cache.
pub const CACHE_SUFFIX: &str = "bin";
