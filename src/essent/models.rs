//! Raw envelope and normalized output types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Energy type as the API (and the error messages) name it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum EnergyType {
    #[display("electricity")]
    Electricity,

    #[display("gas")]
    Gas,
}

/// A single priced interval.
///
/// A tariff without [`Self::total_amount`] still appears in the normalized
/// tariff lists, it is only excluded from the min/avg/max aggregation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Tariff {
    #[serde(default, rename = "startDateTime")]
    pub start: Option<String>,

    #[serde(default, rename = "endDateTime")]
    pub end: Option<String>,

    #[serde(default, rename = "totalAmount")]
    pub total_amount: Option<f64>,

    #[serde(default, rename = "totalAmountEx")]
    pub total_amount_ex: Option<f64>,

    #[serde(default, rename = "totalAmountVat")]
    pub total_amount_vat: Option<f64>,

    /// Sub-component breakdown, passed through untouched.
    #[serde(default)]
    pub groups: Vec<Value>,
}

/// One energy type's raw data for one day.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EnergyBlock {
    #[serde(default)]
    pub tariffs: Vec<Tariff>,

    #[serde(default)]
    pub unit: Option<String>,

    /// Preferred over [`Self::unit`] when non-empty: the API is inconsistent
    /// about which of the two fields it fills in.
    #[serde(default, rename = "unitOfMeasurement")]
    pub unit_of_measurement: Option<String>,
}

/// One calendar day of the envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct PriceDay {
    /// ISO civil date, for example `2024-01-02`.
    pub date: String,

    #[serde(default)]
    pub electricity: Option<EnergyBlock>,

    #[serde(default)]
    pub gas: Option<EnergyBlock>,
}

/// The full API response: all available days, roughly chronological.
#[derive(Clone, Debug, Deserialize)]
pub struct PriceResponse {
    #[serde(default)]
    pub prices: Vec<PriceDay>,
}

/// Normalized prices for one energy type.
#[derive(Clone, Debug, Serialize)]
pub struct EnergyData {
    /// Today's tariffs, sorted by start time.
    pub tariffs: Vec<Tariff>,

    /// Tomorrow's tariffs, sorted by start time.
    /// Empty when the API has not published tomorrow yet.
    pub tariffs_tomorrow: Vec<Tariff>,

    /// Canonicalized unit, for example `kWh` or `m³`.
    pub unit: String,

    pub min_price: f64,
    pub avg_price: f64,
    pub max_price: f64,
}

/// Normalized prices for both energy types.
#[derive(Clone, Debug, Serialize)]
pub struct Prices {
    pub electricity: EnergyData,
    pub gas: EnergyData,
}
