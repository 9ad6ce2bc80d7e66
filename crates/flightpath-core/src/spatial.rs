//! Spherical-earth geodesy used by the route calculator.

use crate::models::Waypoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate distance between two points in meters using Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters. Coordinates outside the usual ranges are not rejected.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial bearing (forward azimuth) from point 1 to point 2.
///
/// Returns degrees clockwise from north in `[0, 360)`. Identical points give 0.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Great-circle distance between two waypoints in meters.
pub fn distance(start: &Waypoint, end: &Waypoint) -> f64 {
    haversine_distance(start.lat, start.lon, end.lat, end.lon)
}

/// Initial bearing between two waypoints in degrees.
pub fn course(start: &Waypoint, end: &Waypoint) -> f64 {
    initial_bearing(start.lat, start.lon, end.lat, end.lon)
}

/// Point at `fraction` of the way along the great circle from point 1 to point 2.
///
/// `fraction` 0 returns the start and 1 the end. Falls back to the start point when
/// the two points coincide.
pub fn intermediate_point(lat1: f64, lon1: f64, lat2: f64, lon2: f64, fraction: f64) -> (f64, f64) {
    let angular_distance = haversine_distance(lat1, lon1, lat2, lon2) / EARTH_RADIUS_M;
    let sin_ad = angular_distance.sin();
    if sin_ad.abs() <= f64::EPSILON {
        return (lat1, lon1);
    }

    let phi1 = lat1.to_radians();
    let lambda1 = lon1.to_radians();
    let phi2 = lat2.to_radians();
    let lambda2 = lon2.to_radians();

    let a = ((1.0 - fraction) * angular_distance).sin() / sin_ad;
    let b = (fraction * angular_distance).sin() / sin_ad;

    let x = a * phi1.cos() * lambda1.cos() + b * phi2.cos() * lambda2.cos();
    let y = a * phi1.cos() * lambda1.sin() + b * phi2.cos() * lambda2.sin();
    let z = a * phi1.sin() + b * phi2.sin();

    let phi = z.atan2((x * x + y * y).sqrt());
    let lambda = y.atan2(x);

    (phi.to_degrees(), lambda.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // ~111km between these points (1 degree latitude)
        let dist = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 111_194.0).abs() < 100.0);
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_distance(50.4501, 30.5234, 50.4501, 30.5234);
        assert!(dist < 1e-6);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let there = haversine_distance(50.45, 30.52, 49.84, 24.03);
        let back = haversine_distance(49.84, 24.03, 50.45, 30.52);
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn bearing_cardinal_directions() {
        assert!((initial_bearing(0.0, 0.0, 1.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((initial_bearing(0.0, 0.0, 0.0, 1.0) - 90.0).abs() < 1e-9);
        assert!((initial_bearing(0.0, 0.0, -1.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((initial_bearing(0.0, 0.0, 0.0, -1.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_stays_in_half_open_range() {
        for (lat2, lon2) in [(1.0, -0.0001), (-1.0, -1.0), (0.5, 179.0), (-0.5, -179.0)] {
            let b = initial_bearing(0.0, 0.0, lat2, lon2);
            assert!((0.0..360.0).contains(&b), "bearing {b} out of range");
        }
    }

    #[test]
    fn bearing_handles_antimeridian_seam() {
        let across_seam = initial_bearing(0.0, 179.0, 0.0, -179.0);
        let wrapped = initial_bearing(0.0, -181.0, 0.0, -179.0);
        assert!((across_seam - wrapped).abs() < 1e-9);
        assert!((across_seam - 90.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_identical_points_is_deterministic() {
        assert_eq!(initial_bearing(10.0, 10.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn intermediate_point_endpoints() {
        let (lat, lon) = intermediate_point(10.0, 20.0, 11.0, 21.0, 0.0);
        assert!((lat - 10.0).abs() < 1e-9 && (lon - 20.0).abs() < 1e-9);

        let (lat, lon) = intermediate_point(10.0, 20.0, 11.0, 21.0, 1.0);
        assert!((lat - 11.0).abs() < 1e-9 && (lon - 21.0).abs() < 1e-9);
    }

    #[test]
    fn intermediate_point_midpoint_is_equidistant() {
        let (lat, lon) = intermediate_point(0.0, 0.0, 0.0, 10.0, 0.5);
        let d1 = haversine_distance(0.0, 0.0, lat, lon);
        let d2 = haversine_distance(lat, lon, 0.0, 10.0);
        assert!((d1 - d2).abs() < 1e-3);
        assert!(lat.abs() < 1e-9);
    }

    #[test]
    fn intermediate_point_coincident_points() {
        assert_eq!(intermediate_point(5.0, 5.0, 5.0, 5.0, 0.3), (5.0, 5.0));
    }
}
