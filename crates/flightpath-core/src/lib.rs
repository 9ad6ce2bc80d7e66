pub mod calculator;
pub mod error;
pub mod models;
pub mod routing;
pub mod series;
pub mod spatial;
pub mod store;

pub use calculator::{
    calculate_route, calculate_segment, CalculatorConfig, Interpolation, RouteCalculator,
};
pub use error::{RouteError, StoreError};
pub use models::{Aircraft, AircraftCharacteristics, Flight, FlightState, Route, Waypoint};
pub use routing::{demo_characteristics, demo_waypoints, generate_random_route, Scenario};
pub use series::{RouteSeries, RouteSummary};
pub use spatial::{haversine_distance, initial_bearing};
pub use store::{Entity, Store};
