//! Core data models for flight path calculation.

use serde::{Deserialize, Serialize};

use crate::calculator::calculate_route;
use crate::error::RouteError;

/// Performance envelope of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftCharacteristics {
    /// Maximum speed in m/s
    pub max_speed_mps: f64,
    /// Maximum acceleration in m/s²
    pub max_acceleration_mps2: f64,
    /// Climb/descent rate in m/s
    pub altitude_change_speed_mps: f64,
    /// Turn rate in deg/s
    pub course_change_speed_dps: f64,
}

impl AircraftCharacteristics {
    pub fn new(
        max_speed_mps: f64,
        max_acceleration_mps2: f64,
        altitude_change_speed_mps: f64,
        course_change_speed_dps: f64,
    ) -> Self {
        Self {
            max_speed_mps,
            max_acceleration_mps2,
            altitude_change_speed_mps,
            course_change_speed_dps,
        }
    }
}

/// A navigational node the route must pass through, with the target speed there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    pub altitude_m: f64,
    pub speed_mps: f64,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64, altitude_m: f64, speed_mps: f64) -> Self {
        Self {
            lat,
            lon,
            altitude_m,
            speed_mps,
        }
    }
}

/// One sampled instant of a computed trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    pub lat: f64,
    pub lon: f64,
    pub altitude_m: f64,
    pub speed_mps: f64,
    /// Degrees clockwise from north, `[0, 360)`
    pub course_deg: f64,
}

impl FlightState {
    /// State sitting exactly on a waypoint with the given course.
    pub fn at_waypoint(waypoint: &Waypoint, course_deg: f64) -> Self {
        Self {
            lat: waypoint.lat,
            lon: waypoint.lon,
            altitude_m: waypoint.altitude_m,
            speed_mps: waypoint.speed_mps,
            course_deg,
        }
    }
}

/// Ordered flight states, one per second of flight plus the forced segment endpoints.
pub type Route = Vec<FlightState>;

/// A planned flight: its waypoints and the states already flown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub number: u64,
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub passed_points: Vec<FlightState>,
}

impl Flight {
    pub fn new(number: u64, waypoints: Vec<Waypoint>) -> Self {
        Self {
            number,
            waypoints,
            passed_points: Vec::new(),
        }
    }

    /// Compute the full route for this flight's waypoints.
    pub fn plan(&self, characteristics: &AircraftCharacteristics) -> Result<Route, RouteError> {
        calculate_route(characteristics, &self.waypoints)
    }

    /// Record a flown state.
    pub fn record_passed(&mut self, state: FlightState) {
        self.passed_points.push(state);
    }

    /// Last state flown, if any.
    pub fn last_passed(&self) -> Option<&FlightState> {
        self.passed_points.last()
    }
}

/// A registered aircraft with its envelope and flight history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: u64,
    pub characteristics: AircraftCharacteristics,
    #[serde(default)]
    pub position: Option<FlightState>,
    #[serde(default)]
    pub flights: Vec<Flight>,
}

impl Aircraft {
    pub fn new(id: u64, characteristics: AircraftCharacteristics) -> Self {
        Self {
            id,
            characteristics,
            position: None,
            flights: Vec::new(),
        }
    }

    /// Plan the route of one of this aircraft's flights using its own envelope.
    pub fn plan_flight(&self, flight_number: u64) -> Option<Result<Route, RouteError>> {
        self.flights
            .iter()
            .find(|flight| flight.number == flight_number)
            .map(|flight| flight.plan(&self.characteristics))
    }

    /// Move the aircraft to a new state, recording it on the given flight.
    pub fn advance(&mut self, flight_number: u64, state: FlightState) -> bool {
        let Some(flight) = self
            .flights
            .iter_mut()
            .find(|flight| flight.number == flight_number)
        else {
            return false;
        };
        flight.record_passed(state);
        self.position = Some(state);
        true
    }
}
