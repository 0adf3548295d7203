// crates/flightprint-core/src/model/convert.rs
use super::dataset::Table;
use super::domain::{Location, PopulationCenter};
use super::raw::{LocationsRaw, PopulationCentersRaw};
use tracing::{debug, warn};

/// **Raw -> Validated:** airports.
///
/// Rows without a usable name, IATA code or ISO country are dropped (the
/// upstream collection has many private strips without an IATA code).
/// Source order is preserved for the rows that survive.
pub fn locations_from_raw(raw: LocationsRaw) -> Table<Location> {
    let total = raw.len();
    let mut records = Vec::with_capacity(total);

    for row in raw {
        let (Some(name), Some(iata), Some(iso)) = (&row.name, &row.iata, &row.iso) else {
            debug!(?row, "skipping airport with missing fields");
            continue;
        };
        match Location::new(name, iata, iso) {
            Ok(loc) => records.push(loc),
            Err(e) => debug!(%e, "skipping airport"),
        }
    }

    let skipped = total - records.len();
    if skipped > 0 {
        warn!(kept = records.len(), skipped, "dropped malformed airport records");
    }
    Table { records, skipped }
}

/// **Raw -> Validated:** population centers. Non-positive populations are dropped.
pub fn population_centers_from_raw(raw: PopulationCentersRaw) -> Table<PopulationCenter> {
    let total = raw.len();
    let records: Vec<PopulationCenter> = raw
        .into_iter()
        .filter_map(|row| {
            let city = row.city?;
            let population = u64::try_from(row.population?).ok()?;
            PopulationCenter::new(&city, population).ok()
        })
        .collect();

    let skipped = total - records.len();
    if skipped > 0 {
        warn!(kept = records.len(), skipped, "dropped malformed city records");
    }
    Table { records, skipped }
}
