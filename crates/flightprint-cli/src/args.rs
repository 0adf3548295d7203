use clap::{Parser, Subcommand, ValueEnum};
use flightprint_core::model::{CabinClass, DistanceUnit};
use std::path::PathBuf;

/// CLI arguments for flightprint
#[derive(Debug, Parser)]
#[command(
    name = "flightprint",
    version,
    about = "Search airports and turn a flight into a relatable carbon footprint"
)]
pub struct CliArgs {
    /// Airports dataset (.json, .json.gz or .bin); defaults to the bundled sample
    #[arg(long = "airports", global = true)]
    pub airports: Option<PathBuf>,

    /// Cities dataset (.json, .json.gz or .bin); defaults to the bundled sample
    #[arg(long = "cities", global = true)]
    pub cities: Option<PathBuf>,

    /// Do not read or write the binary cache next to the datasets
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Log more (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded datasets
    Stats,

    /// Search airports by IATA code or name
    Search {
        /// Code or start of a word in the airport name (case-insensitive)
        query: String,

        /// Show at most this many results
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// List the cities whose population is closest to a number
    Nearest {
        /// Target count (e.g. smartphones charged)
        target: u64,

        /// How many cities to list
        #[arg(short = 'k', default_value_t = flightprint_core::DEFAULT_K)]
        k: usize,
    },

    /// Estimate the footprint of a flight
    Estimate {
        /// Departure airport (IATA)
        origin: String,

        /// Arrival airport (IATA)
        destination: String,

        /// Include the return flight
        #[arg(short = 'r', long = "round-trip")]
        round_trip: bool,

        #[command(flatten)]
        provider: ProviderArgs,
    },
}

/// Footprint provider settings
#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Carbon Interface API key
    #[arg(long = "api-key", env = "CARBON_INTERFACE_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Carbon Interface estimates endpoint
    #[arg(
        long = "api-url",
        env = "CARBON_INTERFACE_URL",
        default_value = flightprint_core::provider::DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Cabin class sent with every leg
    #[arg(long = "cabin", value_enum, default_value_t = CabinArg::Economy)]
    pub cabin: CabinArg,

    /// Distance unit reported back
    #[arg(long = "unit", value_enum, default_value_t = UnitArg::Km)]
    pub unit: UnitArg,

    /// Give up on the provider after this many seconds
    #[arg(long = "timeout")]
    pub timeout_secs: Option<u64>,

    /// Use a fixed per-leg footprint instead of calling the API
    #[arg(long = "offline")]
    pub offline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CabinArg {
    Economy,
    Premium,
}

impl From<CabinArg> for CabinClass {
    fn from(arg: CabinArg) -> Self {
        match arg {
            CabinArg::Economy => CabinClass::Economy,
            CabinArg::Premium => CabinClass::Premium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Km,
    Mi,
}

impl From<UnitArg> for DistanceUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Km => DistanceUnit::Km,
            UnitArg::Mi => DistanceUnit::Mi,
        }
    }
}
