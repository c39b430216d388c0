//! Data-access layer for a remote flight-delay prediction service.
//!
//! Two pieces: [`client::ApiClient`] wraps the service's HTTP endpoints and
//! unwraps the uniform response envelope, and [`store::FlightDelayStore`]
//! holds the in-memory view state (airport list, selection, prediction,
//! request status) and derives UI-facing values from it.

pub mod client;
pub mod config;
pub mod store;
