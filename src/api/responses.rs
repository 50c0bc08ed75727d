use crate::sizing::{CapacitySummary, SearchParams, SizingError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) const fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub(crate) fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

/// Request body for POST /calculate.
///
/// Fields are kept as raw JSON so numeric strings ("80") are accepted and
/// anything else is reported as invalid input rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CalculateRequest {
    #[serde(rename = "cabinetRU")]
    pub cabinet_ru: Option<Value>,
    #[serde(rename = "cabinetPower")]
    pub cabinet_power: Option<Value>,
    #[serde(rename = "percentRU")]
    pub percent_ru: Option<Value>,
    #[serde(rename = "percentPower")]
    pub percent_power: Option<Value>,
}

impl CalculateRequest {
    /// Resolve the request into search inputs, filling omitted fields from `defaults`.
    pub(crate) fn into_params(self, defaults: SearchParams) -> Result<SearchParams, SizingError> {
        Ok(SearchParams {
            cabinet_ru: number_or("cabinetRU", self.cabinet_ru, defaults.cabinet_ru)?,
            cabinet_power_kw: number_or(
                "cabinetPower",
                self.cabinet_power,
                defaults.cabinet_power_kw,
            )?,
            ru_percent: number_or("percentRU", self.percent_ru, defaults.ru_percent)?,
            power_percent: number_or("percentPower", self.percent_power, defaults.power_percent)?,
        })
    }
}

fn number_or(field: &'static str, value: Option<Value>, default: f64) -> Result<f64, SizingError> {
    match value {
        None => Ok(default),
        Some(Value::Number(n)) => {
            n.as_f64().ok_or_else(|| SizingError::invalid(field, format!("{n} is out of range")))
        }
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|e| SizingError::invalid(field, format!("{s:?} is not a number ({e})"))),
        Some(other) => Err(SizingError::invalid(field, format!("expected a number, got {other}"))),
    }
}

/// Service summary returned by the status endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct StatusResponse {
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub capacity: CapacitySummary,
}
