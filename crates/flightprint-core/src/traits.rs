// crates/flightprint-core/src/traits.rs
use crate::common::DbStats;
use crate::error::Result;
use crate::model::{Footprint, Leg, Location, PopulationCenter};
use crate::text::{char_index, fold_key, word_prefix_position};

/// Read-only access to the reference datasets.
///
/// The ranker and matcher only ever see slices borrowed from a store; they
/// never mutate it. A store that lives somewhere remote signals trouble with
/// [`crate::FlightprintError::DataUnavailable`] instead of returning a
/// partial slice.
///
/// Implementors must be `Send + Sync` so one handle can serve concurrent
/// requests.
pub trait ReferenceStore: Send + Sync {
    /// All airports in source order.
    fn locations(&self) -> Result<&[Location]>;

    /// All cities in source order.
    fn population_centers(&self) -> Result<&[PopulationCenter]>;

    fn stats(&self) -> DbStats;

    /// Airports matching `predicate`, source order preserved.
    ///
    /// The default scans [`ReferenceStore::locations`]. A store with an index
    /// can push the filter down, as long as relative order is kept. Search
    /// does not go through here: the ranker filters while it scores.
    fn find_locations(&self, predicate: &dyn Fn(&Location) -> bool) -> Result<Vec<&Location>> {
        Ok(self.locations()?.iter().filter(|l| predicate(l)).collect())
    }
}

/// The external emissions calculator.
///
/// Gets the legs in itinerary order and returns one footprint for all of
/// them. Implementations make a single call per invocation and never retry.
pub trait FootprintProvider: Send + Sync {
    fn footprint(&self, legs: &[Leg]) -> Result<Footprint>;
}

impl<T: FootprintProvider + ?Sized> FootprintProvider for Box<T> {
    fn footprint(&self, legs: &[Leg]) -> Result<Footprint> {
        (**self).footprint(legs)
    }
}

impl<T: FootprintProvider + ?Sized> FootprintProvider for &T {
    fn footprint(&self, legs: &[Leg]) -> Result<Footprint> {
        (**self).footprint(legs)
    }
}

/// Position of a query inside a folded display name, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameHit {
    /// Character index of the first occurrence, wherever it is.
    pub first: usize,
    /// Character index of the first occurrence that starts a word, if any.
    pub word_start: Option<usize>,
}

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get case-insensitive helpers on top.
///
/// # Examples
/// ```rust
/// use flightprint_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("London Heathrow").name_starts_word("HEATH"));
/// assert!(!Place("London Heathrow").name_starts_word("eathrow"));
/// ```
pub trait NameMatch {
    fn name_str(&self) -> &str;

    /// Locate an already folded query in the folded name.
    fn name_hit(&self, folded_query: &str) -> Option<NameHit> {
        let name = fold_key(self.name_str());
        let first = name.find(folded_query)?;
        Some(NameHit {
            first: char_index(&name, first),
            word_start: word_prefix_position(&name, folded_query)
                .map(|at| char_index(&name, at)),
        })
    }

    /// Does some word of the name start with `q` (case-insensitive)?
    fn name_starts_word(&self, q: &str) -> bool {
        self.name_hit(&fold_key(q))
            .is_some_and(|hit| hit.word_start.is_some())
    }
}

impl NameMatch for Location {
    fn name_str(&self) -> &str {
        &self.name
    }
}
