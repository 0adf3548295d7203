// crates/flightprint-core/src/estimate.rs

//! # Emissions Estimator
//!
//! Itinerary -> legs -> one provider call -> [`Estimate`].
//! Flight physics (distance, fuel burn, radiative forcing) stays with the
//! provider; this module only expands legs and converts units.

use crate::error::{FlightprintError, Result};
use crate::model::{Estimate, Itinerary};
use crate::traits::FootprintProvider;
use crate::units::{kg_to_lb, SMARTPHONE_CHARGE};
use tracing::info;

/// Estimate the footprint of `itinerary`.
///
/// Exactly one call to `provider`, with all legs at once. Any provider
/// failure is returned as-is; there is no retry and no fallback value. A
/// provider answer that is negative or not a number is treated as a failure
/// too, so a broken estimate never turns into a plausible-looking zero.
pub fn estimate<P>(itinerary: &Itinerary, provider: &P) -> Result<Estimate>
where
    P: FootprintProvider + ?Sized,
{
    let legs = itinerary.legs();
    info!(
        origin = %itinerary.origin,
        destination = %itinerary.destination,
        legs = legs.len(),
        "requesting flight footprint"
    );

    let footprint = provider.footprint(&legs)?;
    if !footprint.carbon_kg.is_finite() || footprint.carbon_kg < 0.0 {
        return Err(FlightprintError::Provider(format!(
            "provider returned an unusable footprint: {} kg",
            footprint.carbon_kg
        )));
    }

    Ok(Estimate {
        legs,
        footprint_kg: footprint.carbon_kg,
        footprint_lb: kg_to_lb(footprint.carbon_kg),
        distance: footprint.distance,
        equivalence_count: SMARTPHONE_CHARGE.count_from_kg(footprint.carbon_kg),
    })
}
