//! CLI configuration from environment.

use std::env;

use flightpath_core::CalculatorConfig;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Overrides the scenario's degenerate-segment ceiling when set.
    pub max_flight_time_s: Option<f64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            max_flight_time_s: env::var("FLIGHTPATH_MAX_FLIGHT_TIME_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v > 0.0),
        }
    }

    pub fn apply(&self, calculator: &mut CalculatorConfig) {
        if let Some(max_flight_time_s) = self.max_flight_time_s {
            calculator.max_flight_time_s = max_flight_time_s;
        }
    }
}
