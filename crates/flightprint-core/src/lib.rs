// crates/flightprint-core/src/lib.rs

//! # flightprint-core
//!
//! Lookup and estimation logic behind the flight footprint service:
//!
//! - [`search`]: airport search by IATA code or name with relevance ranking
//! - [`nearest`]: the K population centers closest to a target count
//! - [`estimate`]: itinerary -> footprint (via an external provider) ->
//!   smartphone-charge equivalence
//!
//! All ranking/matching is pure and runs over an immutable [`Dataset`]
//! (or any other [`ReferenceStore`]). The [`Lookup`] handle ties a store and a
//! [`FootprintProvider`] together and is what front ends talk to.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod equivalence;
pub mod error;
pub mod estimate;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod nearest;
pub mod provider;
pub mod search;
pub mod text;
pub mod traits;
pub mod units;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{FlightprintError, Result};
pub use crate::lookup::Lookup;
pub use crate::model::{
    AirportCode, Dataset, Distance, Estimate, Itinerary, Leg, Location, NearestMatch,
    PopulationCenter, SearchHit, SearchQuery,
};
pub use crate::nearest::DEFAULT_K;
pub use crate::traits::{FootprintProvider, NameMatch, ReferenceStore};

/// Everything a typical front end needs in one import.
pub mod prelude {
    pub use crate::equivalence::{pick, Equivalence};
    pub use crate::provider::{FixedProvider, ProviderConfig};
    #[cfg(feature = "provider")]
    pub use crate::provider::CarbonInterfaceClient;
    pub use crate::{
        AirportCode, Dataset, DbStats, Estimate, FlightprintError, FootprintProvider, Itinerary,
        Leg, Location, Lookup, NearestMatch, PopulationCenter, ReferenceStore, Result,
        SearchHit, SearchQuery, DEFAULT_K,
    };
}
