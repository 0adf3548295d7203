// crates/flightprint-core/src/model/raw.rs
use serde::Deserialize;

/// Raw airport record as it comes from the source JSON.
///
/// Field names follow the upstream collection (`iata`, `iso`). Most fields
/// are optional because the upstream data has gaps; [`super::convert`]
/// decides what is usable.
#[derive(Debug, Deserialize)]
pub struct LocationRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub iso: Option<String>,
}

/// Raw city record from the source JSON.
#[derive(Debug, Deserialize)]
pub struct PopulationCenterRaw {
    #[serde(default)]
    pub city: Option<String>,
    /// Signed so that a bad row (negative count) is skipped instead of
    /// failing the whole file.
    #[serde(default)]
    pub population: Option<i64>,
}

pub type LocationsRaw = Vec<LocationRaw>;
pub type PopulationCentersRaw = Vec<PopulationCenterRaw>;
