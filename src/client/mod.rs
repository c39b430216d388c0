//! HTTP client for the flight-delay prediction service.

mod api;
mod error;
mod types;

pub use api::ApiClient;
pub use error::ApiError;
pub use types::{
    Airport, AirportSummary, Envelope, PredictionDetails, PredictionRequest, PredictionResponse,
};
