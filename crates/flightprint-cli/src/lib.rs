//! flightprint-cli
//! ===============
//!
//! Command-line interface for the `flightprint-core` crate.
//!
//! This crate primarily provides a binary (`flightprint`). The small library
//! target only exists so docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! flightprint stats
//! flightprint search lhr
//! flightprint nearest 13179
//! flightprint estimate SFO LAX --round-trip --offline
//! CARBON_INTERFACE_KEY=... flightprint estimate SFO LAX
//! ```
//!
//! For programmatic access use [`flightprint-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
