//! Ready-made waypoint sets: the demo route, random routes and JSON scenarios.

use crate::calculator::{CalculatorConfig, RouteCalculator};
use crate::error::RouteError;
use crate::models::{AircraftCharacteristics, Route, Waypoint};
use rand::Rng;
use serde::{Deserialize, Serialize};

const RADIUS_DEG: f64 = 0.05; // approx 5.5km
const MAX_RANDOM_ALT_M: f64 = 3_000.0;
const MIN_SPEED_FRACTION: f64 = 0.2;

/// Characteristics used by the demo route: 250 m/s, 10 m/s², 20 m/s climb, 5 deg/s turn.
pub fn demo_characteristics() -> AircraftCharacteristics {
    AircraftCharacteristics::new(250.0, 10.0, 20.0, 5.0)
}

/// Six-waypoint zig-zag starting and ending at rest.
pub fn demo_waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::new(0.0, 0.0, 0.0, 0.0),
        Waypoint::new(0.01, 0.01, 100.0, 80.0),
        Waypoint::new(0.04, -0.02, 80.0, 150.0),
        Waypoint::new(0.07, 0.03, 70.0, 160.0),
        Waypoint::new(0.09, -0.04, 90.0, 50.0),
        Waypoint::new(0.1, 0.0, 0.0, 0.0),
    ]
}

/// Generate `count` random waypoints around a center point.
///
/// Speeds are drawn from `[20%, 100%]` of the aircraft's max speed so every
/// segment has a positive average speed.
pub fn generate_random_route(
    center_lat: f64,
    center_lon: f64,
    count: usize,
    characteristics: &AircraftCharacteristics,
) -> Vec<Waypoint> {
    let mut rng = rand::rng();
    let max_speed = characteristics.max_speed_mps.max(1.0);

    (0..count)
        .map(|_| Waypoint {
            lat: center_lat + rng.random_range(-RADIUS_DEG..RADIUS_DEG),
            lon: center_lon + rng.random_range(-RADIUS_DEG..RADIUS_DEG),
            altitude_m: rng.random_range(0.0..MAX_RANDOM_ALT_M),
            speed_mps: rng.random_range(MIN_SPEED_FRACTION * max_speed..=max_speed),
        })
        .collect()
}

/// A route calculation job as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub characteristics: AircraftCharacteristics,
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub config: CalculatorConfig,
}

impl Scenario {
    pub fn demo() -> Self {
        Self {
            name: Some("demo".to_string()),
            characteristics: demo_characteristics(),
            waypoints: demo_waypoints(),
            config: CalculatorConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn calculate(&self) -> Result<Route, RouteError> {
        RouteCalculator::new(self.config.clone())
            .calculate_route(&self.characteristics, &self.waypoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Interpolation;

    #[test]
    fn demo_scenario_calculates() {
        let route = Scenario::demo().calculate().unwrap();
        let last = route.last().unwrap();
        assert_eq!(last.lat, 0.1);
        assert_eq!(last.lon, 0.0);
        assert_eq!(last.speed_mps, 0.0);
    }

    #[test]
    fn random_route_stays_near_center() {
        let characteristics = demo_characteristics();
        let waypoints = generate_random_route(50.0, 30.0, 5, &characteristics);

        assert_eq!(waypoints.len(), 5);
        for wp in &waypoints {
            assert!((wp.lat - 50.0).abs() <= RADIUS_DEG + 1e-9);
            assert!((wp.lon - 30.0).abs() <= RADIUS_DEG + 1e-9);
            assert!(wp.speed_mps >= 50.0 && wp.speed_mps <= 250.0);
        }

        let route = RouteCalculator::default()
            .calculate_route(&characteristics, &waypoints)
            .unwrap();
        assert!(route.len() >= 8);
    }

    #[test]
    fn scenario_json_defaults_config() {
        let json = r#"{
            "characteristics": {
                "max_speed_mps": 250.0,
                "max_acceleration_mps2": 10.0,
                "altitude_change_speed_mps": 20.0,
                "course_change_speed_dps": 5.0
            },
            "waypoints": [
                {"lat": 0.0, "lon": 0.0, "altitude_m": 1000.0, "speed_mps": 250.0},
                {"lat": 0.03, "lon": 0.03, "altitude_m": 1000.0, "speed_mps": 250.0}
            ]
        }"#;

        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.name, None);
        assert_eq!(scenario.config.interpolation, Interpolation::Linear);
        assert_eq!(scenario.waypoints.len(), 2);

        let again = Scenario::from_json(&scenario.to_json().unwrap()).unwrap();
        assert_eq!(again, scenario);
    }
}
