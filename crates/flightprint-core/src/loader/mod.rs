// crates/flightprint-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, decompression, bincode cache) and hands
//! the parsed rows to [`crate::model::convert`].
//!
//! Load once at startup, then share the resulting [`Dataset`] by reference.

use crate::error::Result;
use crate::model::{Dataset, Location, PopulationCenter, Table, CACHE_SUFFIX};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub mod common_io;

/// Refuse to deserialize caches larger than this.
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Read and write the `<file>.bin` cache next to each source.
    pub use_cache: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions { use_cache: true }
    }
}

impl Dataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_airports_filename() -> &'static str {
        "airports.json"
    }

    pub fn default_cities_filename() -> &'static str {
        "cities.json"
    }

    /// Loads the sample datasets shipped in `data/`.
    pub fn load_default() -> Result<Self> {
        let dir = Self::default_data_dir();
        Self::load_from_paths(
            dir.join(Self::default_airports_filename()),
            dir.join(Self::default_cities_filename()),
            LoadOptions::default(),
        )
    }

    /// Loads airports and cities from JSON (`.json` / `.json.gz`) or from a
    /// bincode file (`.bin`) written by an earlier load.
    pub fn load_from_paths(
        airports: impl AsRef<Path>,
        cities: impl AsRef<Path>,
        options: LoadOptions,
    ) -> Result<Self> {
        let locations = load_table(airports.as_ref(), options, parse_locations)?;
        let centers = load_table(cities.as_ref(), options, parse_population_centers)?;

        let db = Dataset::from_tables(locations, centers);
        info!(
            locations = db.locations.len(),
            population_centers = db.population_centers.len(),
            skipped = db.skipped,
            "reference data loaded"
        );
        Ok(db)
    }
}

/// **Smart Load:** checks the cache, else parses the source and refreshes the cache.
fn load_table<T, F>(path: &Path, options: LoadOptions, parse: F) -> Result<Table<T>>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(Box<dyn Read>) -> Result<Table<T>>,
{
    if path.extension().is_some_and(|ext| ext == CACHE_SUFFIX) {
        return read_cache(path);
    }

    let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);
    if options.use_cache && common_io::is_cache_fresh(path, &cache_path) {
        match read_cache(&cache_path) {
            Ok(table) => {
                debug!(cache = %cache_path.display(), "using cached table");
                return Ok(table);
            }
            Err(e) => warn!(cache = %cache_path.display(), %e, "ignoring unreadable cache"),
        }
    }

    let table = parse(common_io::open_stream(path)?)?;

    if options.use_cache {
        if let Err(e) = write_cache(&cache_path, &table) {
            warn!(cache = %cache_path.display(), %e, "could not write cache");
        }
    }
    Ok(table)
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(CACHE_LIMIT)
        .allow_trailing_bytes()
}

fn read_cache<T: DeserializeOwned>(path: &Path) -> Result<Table<T>> {
    let mut reader = common_io::open_stream(path)?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bincode_options().deserialize(&bytes)?)
}

fn write_cache<T: Serialize>(path: &Path, table: &Table<T>) -> Result<()> {
    let bytes = bincode_options().serialize(table)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(feature = "json")]
fn parse_locations(reader: Box<dyn Read>) -> Result<Table<Location>> {
    let raw: crate::model::raw::LocationsRaw = serde_json::from_reader(reader)?;
    Ok(crate::model::convert::locations_from_raw(raw))
}

#[cfg(feature = "json")]
fn parse_population_centers(reader: Box<dyn Read>) -> Result<Table<PopulationCenter>> {
    let raw: crate::model::raw::PopulationCentersRaw = serde_json::from_reader(reader)?;
    Ok(crate::model::convert::population_centers_from_raw(raw))
}

#[cfg(not(feature = "json"))]
fn parse_locations(_reader: Box<dyn Read>) -> Result<Table<Location>> {
    Err(crate::FlightprintError::DataUnavailable(
        "JSON datasets need the `json` feature; load a .bin cache instead".into(),
    ))
}

#[cfg(not(feature = "json"))]
fn parse_population_centers(_reader: Box<dyn Read>) -> Result<Table<PopulationCenter>> {
    Err(crate::FlightprintError::DataUnavailable(
        "JSON datasets need the `json` feature; load a .bin cache instead".into(),
    ))
}
