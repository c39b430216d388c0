//! View-state store: holds the in-memory source of truth and orchestrates
//! calls through the [`ApiClient`].
//!
//! The store is an explicit container passed by handle, not a process-wide
//! singleton. Cloning the handle is cheap; all clones share the same state.
//!
//! Overlapping actions of the same kind are resolved with per-concern
//! epochs: each `load_airports` / `predict_delay` bumps its epoch at start,
//! and a resumption whose epoch is no longer current discards its result.
//! Last-started wins, and stale responses never clobber newer state or the
//! busy flag.

mod state;

pub use state::{RiskLevel, StoreState};

use std::sync::{Arc, RwLock};

use crate::client::{Airport, ApiClient, PredictionRequest};

struct Inner {
    state: StoreState,
    load_epoch: u64,
    predict_epoch: u64,
}

/// Clone-able handle to the shared view state.
#[derive(Clone)]
pub struct FlightDelayStore {
    inner: Arc<RwLock<Inner>>,
    client: ApiClient,
}

impl FlightDelayStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: StoreState::default(),
                load_epoch: 0,
                predict_epoch: 0,
            })),
            client,
        }
    }

    /// Get a clone of the current state. Derived values are methods on the
    /// returned [`StoreState`].
    pub fn snapshot(&self) -> StoreState {
        self.inner
            .read()
            .expect("store lock poisoned")
            .state
            .clone()
    }

    /// Select an airport for the prediction form.
    pub fn select_airport(&self, airport: Airport) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.state.selected_airport = Some(airport);
    }

    /// Set the prediction date (ISO string; empty clears it).
    pub fn set_date(&self, date: impl Into<String>) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.state.selected_date = date.into();
    }

    /// Reload the airport list, replacing it wholesale on success. On
    /// failure the previous list is left untouched and the error message is
    /// stored.
    pub async fn load_airports(&self) {
        let epoch = {
            let mut inner = self.inner.write().expect("store lock poisoned");
            inner.load_epoch += 1;
            inner.state.loading = true;
            inner.state.error = None;
            inner.load_epoch
        };

        let result = self.client.list_airports().await;

        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.load_epoch != epoch {
            tracing::debug!(epoch, "discarding stale airport load");
            return;
        }

        match result {
            Ok(airports) => {
                tracing::debug!(count = airports.len(), "airport list loaded");
                inner.state.airports = airports;
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "failed to load airports");
                inner.state.error = Some(err.to_string());
            }
        }
        inner.state.loading = false;
    }

    /// Search airports by free text. Queries shorter than two characters
    /// short-circuit to an empty result without a network call, and failures
    /// degrade to an empty result without touching the shared error field.
    pub async fn search_airports(&self, query: &str) -> Vec<Airport> {
        if query.chars().count() < 2 {
            return Vec::new();
        }

        match self.client.search_airports(query).await {
            Ok(airports) => airports,
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "airport search failed");
                Vec::new()
            }
        }
    }

    /// Submit a prediction for the current selection. Requires both an
    /// airport and a date; otherwise sets the error and performs no network
    /// call. Any prior prediction is cleared before the request goes out.
    pub async fn predict_delay(&self) {
        let (epoch, request) = {
            let mut inner = self.inner.write().expect("store lock poisoned");

            let airport_id = match &inner.state.selected_airport {
                Some(airport) if !inner.state.selected_date.is_empty() => airport.airport_id,
                _ => {
                    inner.state.error =
                        Some("Please select both an airport and a date".to_string());
                    return;
                }
            };

            let request = PredictionRequest {
                airport_id,
                date: inner.state.selected_date.clone(),
            };

            inner.predict_epoch += 1;
            inner.state.loading = true;
            inner.state.error = None;
            inner.state.prediction = None;
            (inner.predict_epoch, request)
        };

        let result = self.client.submit_prediction(&request).await;

        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.predict_epoch != epoch {
            tracing::debug!(epoch, "discarding stale prediction");
            return;
        }

        match result {
            Ok(prediction) => {
                tracing::debug!(
                    airport_id = request.airport_id,
                    probability = prediction.delay_probability,
                    "prediction stored"
                );
                inner.state.prediction = Some(prediction);
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "prediction failed");
                inner.state.error = Some(err.to_string());
            }
        }
        inner.state.loading = false;
    }

    /// Probe service health and record the boolean result. No busy flag,
    /// no error surfaced.
    pub async fn check_api_health(&self) {
        let healthy = self.client.health_check().await;
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.state.api_healthy = Some(healthy);
    }

    /// Clear the current prediction and error.
    pub fn clear_prediction(&self) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.state.prediction = None;
        inner.state.error = None;
    }

    /// Clear the airport/date selection, cascading through
    /// [`clear_prediction`](Self::clear_prediction).
    pub fn clear_selection(&self) {
        {
            let mut inner = self.inner.write().expect("store lock poisoned");
            inner.state.selected_airport = None;
            inner.state.selected_date.clear();
        }
        self.clear_prediction();
    }

    /// Initialize the store: load the airport list and probe health
    /// concurrently, with no ordering between the two.
    pub async fn init(&self) {
        tokio::join!(self.load_airports(), self.check_api_health());
    }
}
