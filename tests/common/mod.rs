#![allow(dead_code)]

pub mod mock_backend;

use serde_json::json;

/// Airport payload in the service's wire shape.
pub fn airport_json(id: i64, name: &str, total_flights: i64) -> serde_json::Value {
    json!({
        "airport_id": id,
        "airport_name": name,
        "city": "Test City",
        "state": "TS",
        "total_flights": total_flights,
        "delay_rate": 0.21,
    })
}

/// Prediction payload in the service's wire shape.
pub fn prediction_json(airport_id: i64, probability: f64) -> serde_json::Value {
    json!({
        "delay_probability": probability,
        "confidence": 0.87,
        "airport_info": {
            "airport_id": airport_id,
            "airport_name": "Test Intl",
            "city": "Test City",
            "state": "TS",
        },
        "prediction_details": {
            "month": 5,
            "day_of_week": 3,
            "requested_date": "2024-05-01",
        },
    })
}
