// crates/flightprint-core/src/provider.rs

//! Footprint providers.
//!
//! - [`CarbonInterfaceClient`] (feature `provider`): the Carbon Interface
//!   flight estimate API, one blocking POST per estimate.
//! - [`FixedProvider`]: a constant per-leg footprint for offline use.

use crate::error::Result;
use crate::model::{CabinClass, Distance, DistanceUnit, Footprint, Leg};
use crate::traits::FootprintProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://www.carboninterface.com/api/v1/estimates";

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Everything the HTTP provider needs besides the legs.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub passengers: u32,
    pub cabin_class: CabinClass,
    pub distance_unit: DistanceUnit,
    /// Sent only when set.
    pub currency: Option<String>,
    /// No timeout unless the caller asks for one.
    pub timeout: Option<Duration>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            passengers: 1,
            cabin_class: CabinClass::Economy,
            distance_unit: DistanceUnit::Km,
            currency: None,
            timeout: None,
        }
    }
}

impl ProviderConfig {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

// -----------------------------------------------------------------------------
// WIRE FORMAT (Carbon Interface flight estimate)
// -----------------------------------------------------------------------------

#[cfg_attr(not(feature = "provider"), allow(dead_code))]
#[derive(Debug, Serialize)]
pub(crate) struct FlightRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    passengers: u32,
    legs: Vec<LegBody<'a>>,
    distance_unit: DistanceUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct LegBody<'a> {
    departure_airport: &'a str,
    destination_airport: &'a str,
    cabin_class: CabinClass,
}

#[cfg_attr(not(feature = "provider"), allow(dead_code))]
impl<'a> FlightRequest<'a> {
    pub(crate) fn new(legs: &'a [Leg], config: &'a ProviderConfig) -> Self {
        FlightRequest {
            kind: "flight",
            passengers: config.passengers,
            legs: legs
                .iter()
                .map(|leg| LegBody {
                    departure_airport: leg.origin.as_str(),
                    destination_airport: leg.destination.as_str(),
                    cabin_class: config.cabin_class,
                })
                .collect(),
            distance_unit: config.distance_unit,
            currency: config.currency.as_deref(),
        }
    }
}

#[cfg_attr(not(feature = "provider"), allow(dead_code))]
#[derive(Debug, Deserialize)]
pub(crate) struct EstimateResponse {
    data: EstimateData,
}

#[derive(Debug, Deserialize)]
struct EstimateData {
    attributes: EstimateAttributes,
}

#[derive(Debug, Deserialize)]
struct EstimateAttributes {
    carbon_kg: Option<f64>,
    distance_value: Option<f64>,
    distance_unit: Option<DistanceUnit>,
}

#[cfg_attr(not(feature = "provider"), allow(dead_code))]
impl EstimateResponse {
    pub(crate) fn into_footprint(self) -> Result<Footprint> {
        let attrs = self.data.attributes;
        let carbon_kg = attrs.carbon_kg.ok_or_else(|| {
            crate::FlightprintError::Provider("response has no carbon_kg".to_string())
        })?;
        let distance = match (attrs.distance_value, attrs.distance_unit) {
            (Some(value), Some(unit)) => Some(Distance { value, unit }),
            _ => None,
        };
        Ok(Footprint {
            carbon_kg,
            distance,
        })
    }
}

// -----------------------------------------------------------------------------
// HTTP CLIENT
// -----------------------------------------------------------------------------

#[cfg(feature = "provider")]
pub use http::CarbonInterfaceClient;

#[cfg(feature = "provider")]
mod http {
    use super::{EstimateResponse, FlightRequest, ProviderConfig};
    use crate::error::{FlightprintError, Result};
    use crate::model::{Footprint, Leg};
    use crate::traits::FootprintProvider;
    use tracing::{info, warn};

    /// Blocking client for the Carbon Interface estimates endpoint.
    ///
    /// Open it once at startup and share it; the inner `reqwest` client
    /// pools connections.
    #[derive(Debug, Clone)]
    pub struct CarbonInterfaceClient {
        http: reqwest::blocking::Client,
        api_key: String,
        config: ProviderConfig,
    }

    impl CarbonInterfaceClient {
        pub fn new(config: ProviderConfig) -> Result<Self> {
            let api_key = config
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| FlightprintError::invalid("missing Carbon Interface API key"))?;

            let mut builder = reqwest::blocking::Client::builder();
            if let Some(timeout) = config.timeout {
                builder = builder.timeout(timeout);
            }
            let http = builder
                .build()
                .map_err(|e| FlightprintError::Provider(format!("cannot build HTTP client: {e}")))?;

            Ok(CarbonInterfaceClient {
                http,
                api_key,
                config,
            })
        }

        pub fn config(&self) -> &ProviderConfig {
            &self.config
        }
    }

    impl FootprintProvider for CarbonInterfaceClient {
        fn footprint(&self, legs: &[Leg]) -> Result<Footprint> {
            let body = FlightRequest::new(legs, &self.config);
            info!(url = %self.config.base_url, legs = legs.len(), "calling Carbon Interface");

            let response = self
                .http
                .post(&self.config.base_url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .map_err(|e| FlightprintError::Provider(format!("request failed: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                let detail = response.text().unwrap_or_default();
                warn!(%status, "Carbon Interface rejected the estimate");
                return Err(FlightprintError::Provider(format!("HTTP {status}: {detail}")));
            }

            let parsed: EstimateResponse = response
                .json()
                .map_err(|e| FlightprintError::Provider(format!("unreadable response: {e}")))?;
            parsed.into_footprint()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn refuses_to_start_without_key() {
            let err = CarbonInterfaceClient::new(ProviderConfig::default()).unwrap_err();
            assert!(matches!(err, FlightprintError::InvalidInput(_)));

            let blank = ProviderConfig::default().with_api_key("  ");
            assert!(CarbonInterfaceClient::new(blank).is_err());
        }

        #[test]
        fn keeps_config() {
            let client =
                CarbonInterfaceClient::new(ProviderConfig::default().with_api_key("k")).unwrap();
            assert_eq!(client.config().passengers, 1);
        }
    }
}

// -----------------------------------------------------------------------------
// OFFLINE PROVIDER
// -----------------------------------------------------------------------------

/// Answers every request with a fixed footprint per leg.
///
/// The default is a typical short-haul economy leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedProvider {
    pub kg_per_leg: f64,
    pub distance_per_leg: Option<Distance>,
}

impl Default for FixedProvider {
    fn default() -> Self {
        FixedProvider {
            kg_per_leg: 108.33,
            distance_per_leg: Some(Distance {
                value: 1073.21,
                unit: DistanceUnit::Km,
            }),
        }
    }
}

impl FootprintProvider for FixedProvider {
    fn footprint(&self, legs: &[Leg]) -> Result<Footprint> {
        let n = legs.len() as f64;
        Ok(Footprint {
            carbon_kg: self.kg_per_leg * n,
            distance: self.distance_per_leg.map(|d| Distance {
                value: d.value * n,
                unit: d.unit,
            }),
        })
    }
}
