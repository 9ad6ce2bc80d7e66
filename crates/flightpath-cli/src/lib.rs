//! Flightpath CLI - command line tools for route calculation.
//!
//! - plan_route: calculate a route from a scenario file, a random route or the demo

pub mod config;
pub mod output;

pub use config::Config;
pub use output::{render, OutputFormat, RouteReport};
