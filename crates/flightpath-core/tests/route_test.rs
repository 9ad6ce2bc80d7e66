//! Route calculation tests through the public API.

use flightpath_core::{
    calculate_route, calculate_segment, demo_characteristics, demo_waypoints, haversine_distance,
    initial_bearing, AircraftCharacteristics, FlightState, RouteError, RouteSeries, RouteSummary,
    Waypoint,
};

fn characteristics() -> AircraftCharacteristics {
    AircraftCharacteristics::new(250.0, 10.0, 20.0, 5.0)
}

#[test]
fn demo_route_has_every_segment_in_order() {
    let waypoints = demo_waypoints();
    let route = calculate_route(&demo_characteristics(), &waypoints).unwrap();

    let mut offset = 0;
    for pair in waypoints.windows(2) {
        let segment = calculate_segment(&pair[0], &pair[1], &demo_characteristics()).unwrap();
        assert!(!segment.is_empty());
        assert_eq!(route[offset..offset + segment.len()], segment[..]);

        let course = initial_bearing(pair[0].lat, pair[0].lon, pair[1].lat, pair[1].lon);
        assert_eq!(
            route[offset + segment.len() - 1],
            FlightState::at_waypoint(&pair[1], course)
        );
        offset += segment.len();
    }
    assert_eq!(offset, route.len());
}

#[test]
fn shared_boundary_sample_is_not_deduplicated() {
    let waypoints = [
        Waypoint::new(0.0, 0.0, 1000.0, 250.0),
        Waypoint::new(0.03, 0.03, 1000.0, 250.0),
        Waypoint::new(0.06, 0.03, 1000.0, 250.0),
    ];
    let route = calculate_route(&characteristics(), &waypoints).unwrap();
    let first_len = calculate_segment(&waypoints[0], &waypoints[1], &characteristics())
        .unwrap()
        .len();

    let end_of_first = route[first_len - 1];
    let start_of_second = route[first_len];
    assert_eq!(end_of_first.lat, start_of_second.lat);
    assert_eq!(end_of_first.lon, start_of_second.lon);
}

#[test]
fn too_few_waypoints_is_invalid_argument() {
    let result = calculate_route(&characteristics(), &[Waypoint::new(0.0, 0.0, 0.0, 100.0)]);
    match result {
        Err(RouteError::InvalidArgument(msg)) => assert!(msg.contains("two waypoints")),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn zero_speed_route_fails_fast() {
    let waypoints = [
        Waypoint::new(0.0, 0.0, 0.0, 0.0),
        Waypoint::new(0.1, 0.0, 0.0, 0.0),
    ];
    let err = calculate_route(&characteristics(), &waypoints).unwrap_err();
    assert!(err.is_degenerate());
    assert_eq!(err.segment_index(), Some(0));
}

#[test]
fn distance_of_point_to_itself_is_zero() {
    assert!(haversine_distance(0.07, 0.03, 0.07, 0.03).abs() < 1e-6);
}

#[test]
fn series_and_summary_cover_demo_route() {
    let route = calculate_route(&demo_characteristics(), &demo_waypoints()).unwrap();
    let series = RouteSeries::from_route(&route);
    let summary = RouteSummary::from_route(&route).unwrap();

    assert_eq!(series.len(), route.len());
    assert_eq!(summary.samples, route.len());
    assert!(summary.min_speed_mps.abs() < 1e-9);
    assert!(summary.max_speed_mps <= 160.0 + 1e-9);
    assert!(summary.path_length_m > 0.0);
}
