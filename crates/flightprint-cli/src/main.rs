//! flightprint — Command-line interface for flightprint-core
//!
//! Usage examples
//! --------------
//!
//! - Show dataset counts
//!   $ flightprint stats
//!
//! - Search airports by code or by the start of a word in the name
//!   $ flightprint search lhr
//!   $ flightprint search "san fr" --limit 5
//!
//! - Cities with a population close to a number
//!   $ flightprint nearest 13179 -k 5
//!
//! - Footprint of a flight (needs CARBON_INTERFACE_KEY unless --offline)
//!   $ flightprint estimate SFO LAX --round-trip
//!   $ flightprint estimate SFO LAX --offline
//!
//! Data source
//! -----------
//!
//! By default the bundled sample datasets of `flightprint-core` are loaded
//! and a binary cache is written next to them. Use `--airports` / `--cities`
//! to point at your own `.json`, `.json.gz` or `.bin` files.
mod args;

use crate::args::{CliArgs, Commands, ProviderArgs};
use anyhow::Context;
use clap::Parser;
use flightprint_core::equivalence::{pick, Equivalence};
use flightprint_core::loader::LoadOptions;
use flightprint_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Load reference data once; everything below borrows it.
    let dir = Dataset::default_data_dir();
    let airports = args
        .airports
        .clone()
        .unwrap_or_else(|| dir.join(Dataset::default_airports_filename()));
    let cities = args
        .cities
        .clone()
        .unwrap_or_else(|| dir.join(Dataset::default_cities_filename()));
    let options = LoadOptions {
        use_cache: !args.no_cache,
    };
    let db = Dataset::load_from_paths(&airports, &cities, options)
        .with_context(|| format!("loading {} and {}", airports.display(), cities.display()))?;

    let provider: Box<dyn FootprintProvider> = match &args.command {
        Commands::Estimate { provider, .. } => build_provider(provider)?,
        _ => Box::new(FixedProvider::default()),
    };
    let lookup = Lookup::new(db, provider);

    match args.command {
        Commands::Stats => {
            let stats = lookup.store().stats();
            println!("Dataset statistics:");
            println!("  Airports: {}", stats.locations);
            println!("  Cities: {}", stats.population_centers);
            println!("  Skipped records: {}", stats.skipped);
        }

        Commands::Search { query, limit } => {
            let hits = lookup.search(&query)?;
            if hits.is_empty() {
                println!("No airports found matching: {query}");
            }
            for hit in hits.iter().take(limit.unwrap_or(usize::MAX)) {
                let loc = &hit.location;
                println!(
                    "{:>3}. {} ({}) - {}",
                    hit.index + 1,
                    loc.name,
                    loc.code,
                    loc.country_code
                );
            }
        }

        Commands::Nearest { target, k } => {
            for m in lookup.nearest(target, k)? {
                println!(
                    "{} (population {}): {}%",
                    m.city, m.population, m.coverage_percentage
                );
            }
        }

        Commands::Estimate {
            origin,
            destination,
            round_trip,
            ..
        } => {
            let est = lookup.estimate_codes(&origin, &destination, round_trip)?;
            let route: Vec<String> = est
                .legs
                .iter()
                .map(|l| format!("{} -> {}", l.origin, l.destination))
                .collect();
            println!("Route: {}", route.join(", "));
            println!("CO2: {:.2} kg ({:.2} lb)", est.footprint_kg, est.footprint_lb);
            if let Some(d) = est.distance {
                println!("Distance: {:.2} {}", d.value, d.unit);
            }
            println!("Smartphones charged: {}", est.equivalence_count);

            let matches = lookup.nearest(est.equivalence_count, DEFAULT_K)?;
            if let Some(m) = pick(&matches, &mut rand::thread_rng()) {
                println!();
                println!("{}", Equivalence::new(est.equivalence_count, m));
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_provider(args: &ProviderArgs) -> anyhow::Result<Box<dyn FootprintProvider>> {
    if args.offline {
        tracing::info!("using the fixed offline footprint");
        return Ok(Box::new(FixedProvider::default()));
    }
    online_provider(args)
}

#[cfg(feature = "provider")]
fn online_provider(args: &ProviderArgs) -> anyhow::Result<Box<dyn FootprintProvider>> {
    let config = ProviderConfig {
        base_url: args.api_url.clone(),
        api_key: args.api_key.clone(),
        cabin_class: args.cabin.into(),
        distance_unit: args.unit.into(),
        timeout: args.timeout_secs.map(std::time::Duration::from_secs),
        ..ProviderConfig::default()
    };
    let client = CarbonInterfaceClient::new(config)
        .context("set CARBON_INTERFACE_KEY or pass --api-key (or use --offline)")?;
    Ok(Box::new(client))
}

#[cfg(not(feature = "provider"))]
fn online_provider(_args: &ProviderArgs) -> anyhow::Result<Box<dyn FootprintProvider>> {
    anyhow::bail!("built without the `provider` feature; pass --offline")
}
