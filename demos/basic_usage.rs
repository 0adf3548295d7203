//! Basic usage of flightprint-core
//!
//! Loads the bundled sample data, searches a few airports, estimates a
//! flight offline and prints a relatable equivalence.

use flightprint_core::equivalence::{pick, Equivalence};
use flightprint_core::prelude::*;

fn main() -> Result<()> {
    println!("=== flightprint basic usage ===\n");

    let lookup = Lookup::new(Dataset::load_default()?, FixedProvider::default());
    let stats = lookup.store().stats();
    println!(
        "Loaded {} airports and {} cities ({} records skipped)\n",
        stats.locations, stats.population_centers, stats.skipped
    );

    for query in ["LHR", "london", "roch"] {
        println!("--- search {query:?} ---");
        for hit in lookup.search(query)? {
            println!("  {}. {} ({})", hit.index + 1, hit.location.name, hit.location.code);
        }
        println!();
    }

    println!("--- empty queries are rejected ---");
    match lookup.search("") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {e}"),
    }
    println!();

    let est = lookup.estimate_codes("SFO", "LAX", true)?;
    println!("--- SFO <-> LAX (offline footprint) ---");
    println!("  {:.2} kg CO2, {} smartphones charged", est.footprint_kg, est.equivalence_count);

    let matches = lookup.nearest(est.equivalence_count, DEFAULT_K)?;
    for m in &matches {
        println!("  {} ({}): {}%", m.city, m.population, m.coverage_percentage);
    }
    if let Some(m) = pick(&matches, &mut rand::thread_rng()) {
        println!("\n{}", Equivalence::new(est.equivalence_count, m));
    }

    Ok(())
}
