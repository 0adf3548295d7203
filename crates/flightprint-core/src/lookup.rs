// crates/flightprint-core/src/lookup.rs
use crate::error::{FlightprintError, Result};
use crate::estimate;
use crate::model::{Estimate, Itinerary, NearestMatch, SearchHit, SearchQuery};
use crate::nearest;
use crate::search;
use crate::traits::{FootprintProvider, ReferenceStore};

/// The service handle behind every front end.
///
/// Owns the data-access handle and the footprint provider: build it once at
/// startup, share `&Lookup` across requests, drop it at shutdown. It holds
/// no per-request state, so concurrent calls need no locking.
///
/// ```rust
/// use flightprint_core::prelude::*;
///
/// let data = Dataset::new(
///     vec![Location::new("London Heathrow", "LHR", "GB").unwrap()],
///     vec![PopulationCenter::new("Oslo", 709_037).unwrap()],
/// );
/// let lookup = Lookup::new(data, FixedProvider::default());
///
/// assert_eq!(lookup.search("heath").unwrap()[0].location.code.as_str(), "LHR");
/// assert!(lookup.search("").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Lookup<S, P> {
    store: S,
    provider: P,
}

impl<S: ReferenceStore, P: FootprintProvider> Lookup<S, P> {
    pub fn new(store: S, provider: P) -> Self {
        Lookup { store, provider }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_parts(self) -> (S, P) {
        (self.store, self.provider)
    }

    /// Ranked airport search. Rejects an empty query with `InvalidInput`.
    ///
    /// The ranker filters while it scores, so every airport is scored once.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let query = SearchQuery::new(query)?;
        let candidates = self.store.locations()?;

        Ok(search::rank(&query, candidates)
            .into_iter()
            .enumerate()
            .map(|(index, loc)| SearchHit {
                index,
                location: loc.clone(),
            })
            .collect())
    }

    /// The `k` cities whose population is closest to `target`.
    pub fn nearest(&self, target: u64, k: usize) -> Result<Vec<NearestMatch>> {
        if k == 0 {
            return Err(FlightprintError::invalid("k must be positive"));
        }
        let centers = self.store.population_centers()?;
        Ok(nearest::nearest(target, centers, k))
    }

    pub fn estimate(&self, itinerary: &Itinerary) -> Result<Estimate> {
        estimate::estimate(itinerary, &self.provider)
    }

    /// Validates raw codes, then estimates.
    pub fn estimate_codes(
        &self,
        origin: &str,
        destination: &str,
        round_trip: bool,
    ) -> Result<Estimate> {
        let itinerary = Itinerary::new(origin, destination, round_trip)?;
        self.estimate(&itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DbStats;
    use crate::model::{Dataset, Location, PopulationCenter};
    use crate::provider::FixedProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Offline;

    impl ReferenceStore for Offline {
        fn locations(&self) -> Result<&[Location]> {
            Err(FlightprintError::DataUnavailable("store is down".into()))
        }
        fn population_centers(&self) -> Result<&[PopulationCenter]> {
            Err(FlightprintError::DataUnavailable("store is down".into()))
        }
        fn stats(&self) -> DbStats {
            DbStats::default()
        }
    }

    /// Counts how often the generic filter path is taken.
    struct Counting {
        inner: Dataset,
        filter_calls: AtomicUsize,
    }

    impl ReferenceStore for Counting {
        fn locations(&self) -> Result<&[Location]> {
            self.inner.locations()
        }
        fn population_centers(&self) -> Result<&[PopulationCenter]> {
            self.inner.population_centers()
        }
        fn stats(&self) -> DbStats {
            self.inner.stats()
        }
        fn find_locations(
            &self,
            predicate: &dyn Fn(&Location) -> bool,
        ) -> Result<Vec<&Location>> {
            self.filter_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.inner.locations.iter().filter(|l| predicate(l)).collect())
        }
    }

    fn sample_data() -> Dataset {
        Dataset::new(
            vec![
                Location::new("Lahore Allama Iqbal", "LHE", "PK").unwrap(),
                Location::new("London Heathrow", "LHR", "GB").unwrap(),
                Location::new("London Gatwick", "LGW", "GB").unwrap(),
            ],
            vec![
                PopulationCenter::new("A", 900_000).unwrap(),
                PopulationCenter::new("B", 1_100_000).unwrap(),
                PopulationCenter::new("C", 500_000).unwrap(),
            ],
        )
    }

    fn sample() -> Lookup<Dataset, FixedProvider> {
        Lookup::new(sample_data(), FixedProvider::default())
    }

    #[test]
    fn search_indexes_hits_in_rank_order() {
        let hits = sample().search("london").unwrap();
        let view: Vec<(usize, &str)> = hits
            .iter()
            .map(|h| (h.index, h.location.code.as_str()))
            .collect();
        assert_eq!(view, vec![(0, "LHR"), (1, "LGW")]);
    }

    #[test]
    fn search_scores_each_airport_in_a_single_pass() {
        let store = Counting {
            inner: sample_data(),
            filter_calls: AtomicUsize::new(0),
        };
        let lookup = Lookup::new(store, FixedProvider::default());
        let hits = lookup.search("london").unwrap();

        assert_eq!(hits, sample().search("london").unwrap());
        assert_eq!(lookup.store().filter_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_query_never_reaches_ranker() {
        assert!(matches!(
            sample().search("  "),
            Err(FlightprintError::InvalidInput(_))
        ));
    }

    #[test]
    fn nearest_uses_store_order_for_ties() {
        let top = sample().nearest(1_000_000, 2).unwrap();
        let cities: Vec<&str> = top.iter().map(|m| m.city.as_str()).collect();
        assert_eq!(cities, vec!["A", "B"]);
        assert!(sample().nearest(1, 0).is_err());
    }

    #[test]
    fn unavailable_store_is_surfaced() {
        let lookup = Lookup::new(Offline, FixedProvider::default());
        assert!(matches!(
            lookup.search("lhr"),
            Err(FlightprintError::DataUnavailable(_))
        ));
        assert!(matches!(
            lookup.nearest(10, 5),
            Err(FlightprintError::DataUnavailable(_))
        ));
    }

    #[test]
    fn estimate_codes_validates_then_estimates() {
        let lookup = sample();
        let est = lookup.estimate_codes("lhr", "lgw", true).unwrap();
        assert_eq!(est.legs.len(), 2);
        assert!(lookup.estimate_codes("lhr", "lhr", false).is_err());
        assert!(lookup.estimate_codes("lh", "lgw", false).is_err());
    }
}
