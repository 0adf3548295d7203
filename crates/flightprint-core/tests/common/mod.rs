// crates/flightprint-core/tests/common/mod.rs
#![allow(dead_code)]

use flightprint_core::loader::LoadOptions;
use flightprint_core::model::Footprint;
use flightprint_core::{Dataset, FlightprintError, FootprintProvider, Leg, Result};
use std::sync::Mutex;

/// The shipped sample data, without touching the cache files.
pub fn sample_dataset() -> Dataset {
    let dir = Dataset::default_data_dir();
    Dataset::load_from_paths(
        dir.join(Dataset::default_airports_filename()),
        dir.join(Dataset::default_cities_filename()),
        LoadOptions { use_cache: false },
    )
    .expect("sample data loads")
}

/// Fake provider: remembers the legs of every call.
pub struct RecordingProvider {
    pub calls: Mutex<Vec<Vec<Leg>>>,
    pub kg: Option<f64>,
}

impl RecordingProvider {
    pub fn answering(kg: f64) -> Self {
        RecordingProvider {
            calls: Mutex::new(Vec::new()),
            kg: Some(kg),
        }
    }

    pub fn failing() -> Self {
        RecordingProvider {
            calls: Mutex::new(Vec::new()),
            kg: None,
        }
    }

    pub fn calls(&self) -> Vec<Vec<Leg>> {
        self.calls.lock().unwrap().clone()
    }
}

impl FootprintProvider for RecordingProvider {
    fn footprint(&self, legs: &[Leg]) -> Result<Footprint> {
        self.calls.lock().unwrap().push(legs.to_vec());
        match self.kg {
            Some(carbon_kg) => Ok(Footprint {
                carbon_kg,
                distance: None,
            }),
            None => Err(FlightprintError::Provider("HTTP 401 Unauthorized".into())),
        }
    }
}
