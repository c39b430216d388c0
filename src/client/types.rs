use serde::{Deserialize, Serialize};

/// Historical snapshot of one airport as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub airport_id: i64,
    pub airport_name: String,
    pub city: String,
    pub state: String,
    /// Historical total flight count, used for ranking by volume.
    pub total_flights: i64,
    /// Historical share of delayed flights, in [0, 1].
    pub delay_rate: f64,
}

/// Body of a `POST /predict` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub airport_id: i64,
    /// ISO date string, e.g. "2024-05-01".
    pub date: String,
}

/// Result of one prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Probability of delay, in [0, 1].
    pub delay_probability: f64,
    pub confidence: f64,
    pub airport_info: AirportSummary,
    pub prediction_details: PredictionDetails,
}

/// Airport fields echoed back inside a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportSummary {
    pub airport_id: i64,
    pub airport_name: String,
    pub city: String,
    pub state: String,
}

/// Date-derived fields echoed back inside a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDetails {
    pub month: u32,
    pub day_of_week: u32,
    pub requested_date: String,
}

/// Uniform wrapper around every service response.
///
/// The service promises that `success == true` implies `data` is present;
/// the client validates that instead of trusting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}
