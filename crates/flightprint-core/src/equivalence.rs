// crates/flightprint-core/src/equivalence.rs

//! Turning a smartphone count and a nearby city into one readable sentence.
//!
//! The matcher is deterministic; the only randomness in the pipeline is
//! [`pick`], which chooses which of the `k` matches to show.

use crate::model::NearestMatch;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Pick one match uniformly at random. `None` for an empty slice.
pub fn pick<'a, R>(matches: &'a [NearestMatch], rng: &mut R) -> Option<&'a NearestMatch>
where
    R: Rng + ?Sized,
{
    matches.choose(rng)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Equivalence {
    pub smartphones: u64,
    pub city: String,
    pub population: u64,
    pub coverage_percentage: f64,
}

impl Equivalence {
    pub fn new(smartphones: u64, m: &NearestMatch) -> Self {
        Equivalence {
            smartphones,
            city: m.city.clone(),
            population: m.population,
            coverage_percentage: m.coverage_percentage,
        }
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This flight emits as much CO2 as charging {} smartphones: \
             one for {}% of the people in {} (population {}).",
            self.smartphones, self.coverage_percentage, self.city, self.population
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn matches() -> Vec<NearestMatch> {
        ["Reno", "Boise", "Tacoma"]
            .iter()
            .map(|c| NearestMatch {
                city: c.to_string(),
                population: 200_000,
                coverage_percentage: 7.0,
            })
            .collect()
    }

    #[test]
    fn pick_is_reproducible_with_a_seed() {
        let all = matches();
        let a = pick(&all, &mut StdRng::seed_from_u64(7)).cloned();
        let b = pick(&all, &mut StdRng::seed_from_u64(7)).cloned();
        assert_eq!(a, b);
        assert!(all.contains(&a.unwrap()));
    }

    #[test]
    fn pick_from_nothing() {
        assert!(pick(&[], &mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn renders_statement() {
        let m = NearestMatch {
            city: "Reno".into(),
            population: 264_165,
            coverage_percentage: 5.0,
        };
        let text = Equivalence::new(13_179, &m).to_string();
        assert_eq!(
            text,
            "This flight emits as much CO2 as charging 13179 smartphones: \
             one for 5% of the people in Reno (population 264165)."
        );
    }
}
