// crates/flightprint-core/src/nearest.rs

//! # Nearest-Value Matcher
//!
//! Picks the `k` population centers whose population is closest to a target
//! count and projects each into a [`NearestMatch`].

use crate::model::{NearestMatch, PopulationCenter};
use tracing::debug;

/// How many matches the service returns.
pub const DEFAULT_K: usize = 5;

/// The `k` candidates closest to `target`, nearest first.
///
/// Distance is `|population - target|`; equal distances keep source order.
/// An empty candidate set (or `k == 0`) gives an empty result.
///
/// ```rust
/// use flightprint_core::{nearest::nearest, PopulationCenter};
///
/// let cities = vec![
///     PopulationCenter::new("A", 900_000).unwrap(),
///     PopulationCenter::new("B", 1_100_000).unwrap(),
///     PopulationCenter::new("C", 500_000).unwrap(),
/// ];
/// let top = nearest(1_000_000, &cities, 2);
/// let names: Vec<_> = top.iter().map(|m| m.city.as_str()).collect();
/// assert_eq!(names, ["A", "B"]);
/// ```
pub fn nearest<'a, I>(target: u64, candidates: I, k: usize) -> Vec<NearestMatch>
where
    I: IntoIterator<Item = &'a PopulationCenter>,
{
    let mut by_distance: Vec<(u64, usize, &PopulationCenter)> = candidates
        .into_iter()
        .enumerate()
        .map(|(pos, c)| (c.population.abs_diff(target), pos, c))
        .collect();

    // (distance, position) is unique per candidate, so this order is total
    by_distance.sort_unstable_by_key(|(distance, pos, _)| (*distance, *pos));
    debug!(target, candidates = by_distance.len(), k, "matching population");

    by_distance
        .into_iter()
        .take(k)
        .map(|(_, _, c)| NearestMatch::project(target, c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, population: u64) -> PopulationCenter {
        PopulationCenter::new(name, population).unwrap()
    }

    fn names(matches: &[NearestMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.city.as_str()).collect()
    }

    #[test]
    fn equal_distance_keeps_source_order() {
        let cities = vec![city("A", 900_000), city("B", 1_100_000), city("C", 500_000)];
        assert_eq!(names(&nearest(1_000_000, &cities, 2)), vec!["A", "B"]);

        let swapped = vec![city("B", 1_100_000), city("A", 900_000), city("C", 500_000)];
        assert_eq!(names(&nearest(1_000_000, &swapped, 2)), vec!["B", "A"]);
    }

    #[test]
    fn returns_at_most_k_in_non_decreasing_distance() {
        let cities: Vec<PopulationCenter> = [50, 7, 300, 12, 9, 1000, 64, 3]
            .iter()
            .enumerate()
            .map(|(i, p)| city(&format!("c{i}"), *p))
            .collect();
        let top = nearest(10, &cities, DEFAULT_K);
        assert_eq!(top.len(), DEFAULT_K);
        let distances: Vec<u64> = top.iter().map(|m| m.population.abs_diff(10)).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(names(&top), vec!["c4", "c3", "c1", "c7", "c0"]);
    }

    #[test]
    fn fewer_candidates_than_k() {
        let cities = vec![city("Only", 42)];
        assert_eq!(nearest(1, &cities, 5).len(), 1);
    }

    #[test]
    fn empty_candidates_give_empty_result() {
        assert!(nearest(1_000, &Vec::new(), 5).is_empty());
        assert!(nearest(1_000, &[city("A", 1)], 0).is_empty());
    }

    #[test]
    fn coverage_is_projected_per_match() {
        let cities = vec![city("Half", 2_000_000), city("Exact", 1_000_000)];
        let top = nearest(1_000_000, &cities, 5);
        assert_eq!(top[0].city, "Exact");
        assert_eq!(top[0].coverage_percentage, 100.0);
        assert_eq!(top[1].coverage_percentage, 50.0);
    }

    #[test]
    fn zero_target_is_allowed() {
        let cities = vec![city("Big", 10), city("Small", 1)];
        let top = nearest(0, &cities, 5);
        assert_eq!(names(&top), vec!["Small", "Big"]);
        assert!(top.iter().all(|m| m.coverage_percentage == 0.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let cities: Vec<PopulationCenter> = (1..200u64)
            .map(|i| city(&i.to_string(), i * 37 % 101 + 1))
            .collect();
        assert_eq!(nearest(50, &cities, 5), nearest(50, &cities, 5));
    }
}
