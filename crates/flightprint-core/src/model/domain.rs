// crates/flightprint-core/src/model/domain.rs
use crate::error::{FlightprintError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// -----------------------------------------------------------------------------
// CODES & QUERIES (validated at the boundary)
// -----------------------------------------------------------------------------

/// A three-letter IATA airport code, always stored uppercase.
///
/// ```rust
/// use flightprint_core::AirportCode;
///
/// let code: AirportCode = " lhr ".parse().unwrap();
/// assert_eq!(code.as_str(), "LHR");
/// assert!("LH1".parse::<AirportCode>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    pub fn new(raw: &str) -> Result<Self> {
        let code = raw.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FlightprintError::invalid(format!(
                "airport code must be three letters, got {raw:?}"
            )));
        }
        Ok(AirportCode(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AirportCode {
    type Err = FlightprintError;
    fn from_str(s: &str) -> Result<Self> {
        AirportCode::new(s)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = FlightprintError;
    fn try_from(s: String) -> Result<Self> {
        AirportCode::new(&s)
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

impl AsRef<str> for AirportCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-empty free-text search query.
///
/// Construction is the only place an empty query is rejected; the ranker
/// itself assumes it never sees one. Whitespace only counts as empty, but a
/// non-empty query is kept as typed, so `"de "` matches "De Gaulle" and not
/// "Denver".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    folded: String,
    code_key: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(FlightprintError::invalid("missing search term"));
        }
        Ok(SearchQuery {
            text: raw.to_string(),
            folded: crate::text::fold_key(raw),
            code_key: raw.to_uppercase(),
        })
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lowercased form used for name matching.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Uppercased form compared against airport codes.
    pub fn code_key(&self) -> &str {
        &self.code_key
    }
}

impl FromStr for SearchQuery {
    type Err = FlightprintError;
    fn from_str(s: &str) -> Result<Self> {
        SearchQuery::new(s)
    }
}

// -----------------------------------------------------------------------------
// REFERENCE RECORDS
// -----------------------------------------------------------------------------

/// An airport. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub code: AirportCode,
    /// ISO 3166-1 alpha-2, uppercase.
    pub country_code: String,
}

impl Location {
    pub fn new(name: &str, code: &str, country_code: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FlightprintError::invalid("location name is empty"));
        }
        let country = country_code.trim();
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FlightprintError::invalid(format!(
                "country code must be two letters, got {country_code:?}"
            )));
        }
        Ok(Location {
            name: name.to_string(),
            code: AirportCode::new(code)?,
            country_code: country.to_ascii_uppercase(),
        })
    }
}

/// A city and its population. Population is always > 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCenter {
    pub city: String,
    pub population: u64,
}

impl PopulationCenter {
    pub fn new(city: &str, population: u64) -> Result<Self> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FlightprintError::invalid("city name is empty"));
        }
        if population == 0 {
            return Err(FlightprintError::invalid(format!(
                "population of {city} must be positive"
            )));
        }
        Ok(PopulationCenter {
            city: city.to_string(),
            population,
        })
    }
}

// -----------------------------------------------------------------------------
// PER-REQUEST RESULTS
// -----------------------------------------------------------------------------

/// One entry of a search result. `index` is the rank position (0-based),
/// stable for a given query and dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub index: usize,
    #[serde(flatten)]
    pub location: Location,
}

/// A population center close to a target count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestMatch {
    pub city: String,
    pub population: u64,
    /// `round(target / population * 100)`.
    pub coverage_percentage: f64,
}

impl NearestMatch {
    pub fn project(target: u64, center: &PopulationCenter) -> Self {
        let coverage = (target as f64 / center.population as f64 * 100.0).round();
        NearestMatch {
            city: center.city.clone(),
            population: center.population,
            coverage_percentage: coverage,
        }
    }
}

// -----------------------------------------------------------------------------
// ITINERARIES & ESTIMATES
// -----------------------------------------------------------------------------

/// One directional flight segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub origin: AirportCode,
    pub destination: AirportCode,
}

impl Leg {
    pub fn reversed(&self) -> Leg {
        Leg {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub round_trip: bool,
}

impl Itinerary {
    pub fn new(origin: &str, destination: &str, round_trip: bool) -> Result<Self> {
        let origin = AirportCode::new(origin)?;
        let destination = AirportCode::new(destination)?;
        if origin == destination {
            return Err(FlightprintError::invalid(format!(
                "origin and destination are both {origin}"
            )));
        }
        Ok(Itinerary {
            origin,
            destination,
            round_trip,
        })
    }

    /// Outbound leg first; the return leg (round trips only) swaps the ends.
    pub fn legs(&self) -> Vec<Leg> {
        let outbound = Leg {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
        };
        if self.round_trip {
            let inbound = outbound.reversed();
            vec![outbound, inbound]
        } else {
            vec![outbound]
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    #[default]
    Economy,
    Premium,
}

impl FromStr for CabinClass {
    type Err = FlightprintError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(CabinClass::Economy),
            "premium" => Ok(CabinClass::Premium),
            other => Err(FlightprintError::invalid(format!("unknown cabin class {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Mi,
}

impl FromStr for DistanceUnit {
    type Err = FlightprintError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" => Ok(DistanceUnit::Km),
            "mi" => Ok(DistanceUnit::Mi),
            other => Err(FlightprintError::invalid(format!("unknown distance unit {other:?}"))),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Km => f.write_str("km"),
            DistanceUnit::Mi => f.write_str("mi"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

/// What a footprint provider hands back for a set of legs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub carbon_kg: f64,
    pub distance: Option<Distance>,
}

/// The full result of estimating an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub legs: Vec<Leg>,
    pub footprint_kg: f64,
    pub footprint_lb: f64,
    pub distance: Option<Distance>,
    /// Smartphone charges with the same CO2 mass.
    pub equivalence_count: u64,
}
