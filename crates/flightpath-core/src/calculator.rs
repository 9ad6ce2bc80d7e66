//! Route calculator: turns waypoints into a one-sample-per-second trajectory.
//!
//! Each pair of consecutive waypoints is integrated independently with a constant
//! course, a constant climb rate and an acceleration-capped speed ramp. Every
//! segment ends with a sample exactly on its end waypoint.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::models::{AircraftCharacteristics, FlightState, Route, Waypoint};
use crate::spatial::{course, distance, intermediate_point};

/// Integration step in seconds.
const TIME_STEP_S: f64 = 1.0;

/// One day of one-second samples.
pub const DEFAULT_MAX_FLIGHT_TIME_S: f64 = 86_400.0;

/// How intermediate positions are placed between two waypoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Linear in latitude/longitude by elapsed-time fraction.
    #[default]
    Linear,
    /// Along the great circle by elapsed-time fraction.
    GreatCircle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub interpolation: Interpolation,
    /// Segments estimated to take longer than this are rejected as degenerate.
    pub max_flight_time_s: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Linear,
            max_flight_time_s: DEFAULT_MAX_FLIGHT_TIME_S,
        }
    }
}

/// Stateless calculator; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct RouteCalculator {
    config: CalculatorConfig,
}

impl RouteCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Calculate the full route through `waypoints`.
    ///
    /// Segments are concatenated in waypoint order without dropping the shared
    /// boundary sample, so a segment's forced end sample is followed by the next
    /// segment's first sample at the same position.
    ///
    /// Fails with [`RouteError::InvalidArgument`] for fewer than two waypoints and
    /// aborts entirely, returning [`RouteError::Segment`], if any segment fails.
    pub fn calculate_route(
        &self,
        characteristics: &AircraftCharacteristics,
        waypoints: &[Waypoint],
    ) -> Result<Route, RouteError> {
        if waypoints.len() < 2 {
            return Err(RouteError::InvalidArgument(
                "at least two waypoints required".to_string(),
            ));
        }

        tracing::info!(
            waypoints = waypoints.len(),
            ?characteristics,
            "Calculating route"
        );

        let mut route = Route::new();
        for (index, pair) in waypoints.windows(2).enumerate() {
            let segment = self
                .calculate_segment(&pair[0], &pair[1], characteristics)
                .map_err(|source| RouteError::Segment {
                    index,
                    source: Box::new(source),
                })?;
            route.extend(segment);
        }

        tracing::debug!(samples = route.len(), "Route calculated");
        Ok(route)
    }

    /// Calculate the samples between two consecutive waypoints.
    ///
    /// The speed ramp is capped by `max_acceleration_mps2` but the flight time is
    /// not re-derived from the cap, so the ramp may fall short of `end.speed_mps`;
    /// the final sample always equals `end` exactly.
    pub fn calculate_segment(
        &self,
        start: &Waypoint,
        end: &Waypoint,
        characteristics: &AircraftCharacteristics,
    ) -> Result<Vec<FlightState>, RouteError> {
        let distance_m = distance(start, end);
        let course_deg = course(start, end);
        let flight_time_s = self.flight_time(distance_m, start, end)?;

        let speed_change = per_second(end.speed_mps - start.speed_mps, flight_time_s)
            .min(characteristics.max_acceleration_mps2);
        let altitude_change = per_second(end.altitude_m - start.altitude_m, flight_time_s);

        let mut samples = Vec::with_capacity(flight_time_s as usize + 2);
        let mut elapsed_s = 0.0;
        let mut current_speed = start.speed_mps;
        let mut current_altitude = start.altitude_m;

        while elapsed_s <= flight_time_s {
            let fraction = if flight_time_s > 0.0 {
                elapsed_s / flight_time_s
            } else {
                0.0
            };
            let (lat, lon) = self.position_at(start, end, fraction);
            samples.push(FlightState {
                lat,
                lon,
                altitude_m: current_altitude,
                speed_mps: current_speed,
                course_deg,
            });

            elapsed_s += TIME_STEP_S;
            current_speed += speed_change;
            current_altitude += altitude_change;
        }

        samples.push(FlightState::at_waypoint(end, course_deg));

        tracing::debug!(
            distance_m,
            course_deg,
            flight_time_s,
            speed_change,
            altitude_change,
            samples = samples.len(),
            "Segment calculated"
        );
        Ok(samples)
    }

    fn flight_time(
        &self,
        distance_m: f64,
        start: &Waypoint,
        end: &Waypoint,
    ) -> Result<f64, RouteError> {
        let average_speed_mps = (start.speed_mps + end.speed_mps) / 2.0;
        let flight_time_s = distance_m / average_speed_mps;

        if average_speed_mps.is_nan()
            || average_speed_mps <= 0.0
            || !flight_time_s.is_finite()
            || flight_time_s > self.config.max_flight_time_s
        {
            tracing::warn!(
                distance_m,
                average_speed_mps,
                flight_time_s,
                "Rejecting degenerate segment"
            );
            return Err(RouteError::DegenerateSegment {
                flight_time_s,
                average_speed_mps,
            });
        }
        Ok(flight_time_s)
    }

    fn position_at(&self, start: &Waypoint, end: &Waypoint, fraction: f64) -> (f64, f64) {
        match self.config.interpolation {
            Interpolation::Linear => (
                start.lat + (end.lat - start.lat) * fraction,
                start.lon + (end.lon - start.lon) * fraction,
            ),
            Interpolation::GreatCircle => {
                intermediate_point(start.lat, start.lon, end.lat, end.lon, fraction)
            }
        }
    }
}

/// Constant per-second rate covering `delta` over `flight_time_s`; zero for an
/// instantaneous segment.
fn per_second(delta: f64, flight_time_s: f64) -> f64 {
    if flight_time_s > 0.0 {
        delta / flight_time_s
    } else {
        0.0
    }
}

/// Calculate a route with the default calculator configuration.
pub fn calculate_route(
    characteristics: &AircraftCharacteristics,
    waypoints: &[Waypoint],
) -> Result<Route, RouteError> {
    RouteCalculator::default().calculate_route(characteristics, waypoints)
}

/// Calculate a single segment with the default calculator configuration.
pub fn calculate_segment(
    start: &Waypoint,
    end: &Waypoint,
    characteristics: &AircraftCharacteristics,
) -> Result<Vec<FlightState>, RouteError> {
    RouteCalculator::default().calculate_segment(start, end, characteristics)
}
