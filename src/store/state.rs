use std::fmt;

use crate::client::{Airport, PredictionResponse};

/// Categorical delay-risk bucket derived from a prediction probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    /// No prediction available.
    Unknown,
}

impl RiskLevel {
    /// Bucket a delay probability. Boundaries are left-inclusive on the
    /// upper tier: exactly 0.15 is moderate, exactly 0.35 is very-high.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.15 {
            RiskLevel::Low
        } else if probability < 0.25 {
            RiskLevel::Moderate
        } else if probability < 0.35 {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }

    /// Display color token for this tier.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "green",
            RiskLevel::Moderate => "yellow",
            RiskLevel::High => "orange",
            RiskLevel::VeryHigh => "red",
            RiskLevel::Unknown => "gray",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very-high",
            RiskLevel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory view state: the single source of truth for consumers.
///
/// Plain comparable data; all derived values are pure functions of the
/// fields and are recomputed on each read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Current airport list, replaced wholesale on each reload.
    pub airports: Vec<Airport>,
    pub selected_airport: Option<Airport>,
    /// ISO date string; empty means unset.
    pub selected_date: String,
    /// At most one current prediction at a time.
    pub prediction: Option<PredictionResponse>,
    /// Per-store busy flag for in-flight load/predict requests.
    pub loading: bool,
    /// Last error message; persists until the next successful action of the
    /// same kind or an explicit clear.
    pub error: Option<String>,
    /// Last known service health; `None` until the first check completes.
    pub api_healthy: Option<bool>,
}

impl StoreState {
    /// The busiest airports: descending by `total_flights`, at most ten.
    /// Ties break deterministically by `airport_id` ascending.
    pub fn top_airports(&self) -> Vec<Airport> {
        let mut ranked = self.airports.clone();
        ranked.sort_by(|a, b| {
            b.total_flights
                .cmp(&a.total_flights)
                .then(a.airport_id.cmp(&b.airport_id))
        });
        ranked.truncate(10);
        ranked
    }

    /// True iff an airport is selected and a date is set. No date-format
    /// or range validation happens here.
    pub fn is_form_valid(&self) -> bool {
        self.selected_airport.is_some() && !self.selected_date.is_empty()
    }

    /// Delay probability as a whole percentage, rounded to nearest with
    /// ties away from zero. Zero when no prediction is held.
    pub fn delay_probability_percent(&self) -> u32 {
        match &self.prediction {
            Some(prediction) => (prediction.delay_probability * 100.0).round() as u32,
            None => 0,
        }
    }

    /// Risk tier of the current prediction, or `Unknown` without one.
    pub fn risk_level(&self) -> RiskLevel {
        match &self.prediction {
            Some(prediction) => RiskLevel::from_probability(prediction.delay_probability),
            None => RiskLevel::Unknown,
        }
    }
}
