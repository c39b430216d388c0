//! Configuration layer: base address and timeouts for the prediction service.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config};

/// Environment variable overriding the configured service base URL.
pub const BASE_URL_ENV_VAR: &str = "FLIGHTCAST_API_BASE_URL";
