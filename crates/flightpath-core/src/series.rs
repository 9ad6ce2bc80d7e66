//! Numeric series projected from a computed route for plotting.
//!
//! The sample index doubles as elapsed seconds: one sample per second.

use serde::{Deserialize, Serialize};

use crate::models::FlightState;
use crate::spatial::haversine_distance;

/// Column-oriented view of a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSeries {
    pub times_s: Vec<f64>,
    pub speeds_mps: Vec<f64>,
    pub altitudes_m: Vec<f64>,
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
}

impl RouteSeries {
    pub fn from_route(route: &[FlightState]) -> Self {
        let mut series = Self {
            times_s: Vec::with_capacity(route.len()),
            speeds_mps: Vec::with_capacity(route.len()),
            altitudes_m: Vec::with_capacity(route.len()),
            latitudes: Vec::with_capacity(route.len()),
            longitudes: Vec::with_capacity(route.len()),
        };
        for (i, state) in route.iter().enumerate() {
            series.times_s.push(i as f64);
            series.speeds_mps.push(state.speed_mps);
            series.altitudes_m.push(state.altitude_m);
            series.latitudes.push(state.lat);
            series.longitudes.push(state.lon);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.times_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times_s.is_empty()
    }

    /// (time, speed) pairs.
    pub fn speed_over_time(&self) -> Vec<(f64, f64)> {
        zip_pairs(&self.times_s, &self.speeds_mps)
    }

    /// (time, altitude) pairs.
    pub fn altitude_over_time(&self) -> Vec<(f64, f64)> {
        zip_pairs(&self.times_s, &self.altitudes_m)
    }

    /// (longitude, latitude) pairs, x before y.
    pub fn flight_path(&self) -> Vec<(f64, f64)> {
        zip_pairs(&self.longitudes, &self.latitudes)
    }
}

fn zip_pairs(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

/// Aggregate figures for a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub samples: usize,
    /// Elapsed seconds between the first and last sample.
    pub duration_s: f64,
    /// Sum of great-circle distances between consecutive samples.
    pub path_length_m: f64,
    pub min_altitude_m: f64,
    pub max_altitude_m: f64,
    pub min_speed_mps: f64,
    pub max_speed_mps: f64,
}

impl RouteSummary {
    /// Summarize a route; `None` for an empty route.
    pub fn from_route(route: &[FlightState]) -> Option<Self> {
        let first = route.first()?;

        let path_length_m = route
            .windows(2)
            .map(|pair| haversine_distance(pair[0].lat, pair[0].lon, pair[1].lat, pair[1].lon))
            .sum();

        let mut summary = Self {
            samples: route.len(),
            duration_s: (route.len() - 1) as f64,
            path_length_m,
            min_altitude_m: first.altitude_m,
            max_altitude_m: first.altitude_m,
            min_speed_mps: first.speed_mps,
            max_speed_mps: first.speed_mps,
        };
        for state in &route[1..] {
            summary.min_altitude_m = summary.min_altitude_m.min(state.altitude_m);
            summary.max_altitude_m = summary.max_altitude_m.max(state.altitude_m);
            summary.min_speed_mps = summary.min_speed_mps.min(state.speed_mps);
            summary.max_speed_mps = summary.max_speed_mps.max(state.speed_mps);
        }
        Some(summary)
    }
}
