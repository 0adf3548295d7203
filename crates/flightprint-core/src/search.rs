// crates/flightprint-core/src/search.rs

//! # Relevance Ranker
//!
//! A candidate matches a query when
//! - its IATA code equals the uppercased query, or
//! - some word of its name starts with the query (case-insensitive).
//!
//! Matches are ordered by a single composite key, see [`RankKey`].
//! No result cap is applied here.

use crate::model::{Location, SearchQuery};
use crate::traits::NameMatch;
use tracing::debug;

/// Sort key for one matching candidate. Field order is the tie-break order:
///
/// 1. exact code matches first,
/// 2. then earlier first occurrence of the query in the lowercased name,
/// 3. then source order.
///
/// `position` makes the order total, so sorting never depends on sort
/// stability alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    /// 0 for an exact code match, 1 otherwise.
    pub code_tier: u8,
    /// Character index of the first occurrence in the folded name;
    /// `usize::MAX` when the name does not contain the query at all
    /// (only possible for code matches).
    pub name_index: usize,
    pub position: usize,
}

impl RankKey {
    pub fn new(exact_code: bool, name_index: Option<usize>, position: usize) -> Self {
        RankKey {
            code_tier: if exact_code { 0 } else { 1 },
            name_index: name_index.unwrap_or(usize::MAX),
            position,
        }
    }
}

/// Score one candidate. `None` means it does not match.
pub fn rank_key(query: &SearchQuery, location: &Location, position: usize) -> Option<RankKey> {
    let exact_code = location.code.as_str() == query.code_key();
    let hit = location.name_hit(query.folded());
    let word_match = hit.is_some_and(|h| h.word_start.is_some());
    if !exact_code && !word_match {
        return None;
    }
    Some(RankKey::new(exact_code, hit.map(|h| h.first), position))
}

/// The matching predicate on its own, for pushing the filter into a store.
pub fn matches(query: &SearchQuery, location: &Location) -> bool {
    rank_key(query, location, 0).is_some()
}

/// Rank `candidates` against `query`.
///
/// Returns the matching candidates, best first. The output is always a
/// subsequence of the input (no record appears twice or out of nowhere)
/// and equal-rank candidates keep their input order.
///
/// ```rust
/// use flightprint_core::{search, Location, SearchQuery};
///
/// let airports = vec![
///     Location::new("Lahore Allama Iqbal", "LHE", "PK").unwrap(),
///     Location::new("London Heathrow", "LHR", "GB").unwrap(),
/// ];
/// let q = SearchQuery::new("lhr").unwrap();
/// let ranked = search::rank(&q, &airports);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].code.as_str(), "LHR");
/// ```
pub fn rank<'a, I>(query: &SearchQuery, candidates: I) -> Vec<&'a Location>
where
    I: IntoIterator<Item = &'a Location>,
{
    let mut scored: Vec<(RankKey, &'a Location)> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(pos, loc)| rank_key(query, loc, pos).map(|key| (key, loc)))
        .collect();

    scored.sort_by_key(|(key, _)| *key);
    debug!(query = query.as_str(), hits = scored.len(), "ranked airports");

    scored.into_iter().map(|(_, loc)| loc).collect()
}
