use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

/// One recorded crop price at a mandi.
///
/// `recorded_at` is kept as the server's timestamp string. The server orders
/// prices newest first; the client does not re-sort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPrice {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crop_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    pub price_per_kg: f64,
    #[serde(default)]
    pub mandi_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recorded_at: String,
}

/// Price forecast payload. The shape is owned by the server; only a few
/// well-known keys get typed accessors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PriceForecast(pub Map<String, Value>);

impl PriceForecast {
    /// Trend label (`increasing`, `decreasing`, `stable`, `neutral`).
    #[must_use]
    pub fn trend(&self) -> Option<&str> {
        self.0.get("trend").and_then(Value::as_str)
    }

    /// Forecast price when the server had enough data to compute one.
    #[must_use]
    pub fn forecast_price(&self) -> Option<f64> {
        self.0.get("forecast").and_then(Value::as_f64)
    }

    /// Latest observed price.
    #[must_use]
    pub fn current_price(&self) -> Option<f64> {
        self.0.get("current_price").and_then(Value::as_f64)
    }

    /// Free-text forecast, returned instead of a number when data is short.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.0.get("forecast").and_then(Value::as_str)
    }
}
