//! CLI tool to calculate an aircraft route from waypoints.
//!
//! Usage:
//!   cargo run -p flightpath-cli --bin plan_route -- --scenario route.json --format csv

use anyhow::{Context, Result};
use clap::Parser;
use flightpath_cli::{render, Config, OutputFormat, RouteReport};
use flightpath_core::{generate_random_route, Interpolation, Scenario};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Calculate a one-sample-per-second flight route through a list of waypoints
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Scenario JSON file (characteristics, waypoints, optional config)
    #[arg(long, conflicts_with = "random")]
    scenario: Option<PathBuf>,

    /// Generate a random route with this many waypoints instead
    #[arg(long)]
    random: Option<usize>,

    /// Center latitude for random routes
    #[arg(long, default_value_t = 50.4501)]
    lat: f64,

    /// Center longitude for random routes
    #[arg(long, default_value_t = 30.5234)]
    lon: f64,

    /// Interpolate positions along the great circle
    #[arg(long)]
    great_circle: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flightpath=info".parse()?)
                .add_directive("plan_route=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut scenario = load_scenario(&args)?;

    Config::from_env().apply(&mut scenario.config);
    if args.great_circle {
        scenario.config.interpolation = Interpolation::GreatCircle;
    }

    tracing::info!(
        waypoints = scenario.waypoints.len(),
        interpolation = ?scenario.config.interpolation,
        "Planning route"
    );

    let route = scenario.calculate().context("route calculation failed")?;
    let report = RouteReport::new(scenario, &route);

    let rendered = render(args.format, &report, &route).context("failed to render route")?;
    print!("{rendered}");
    Ok(())
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    if let Some(path) = &args.scenario {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        return Scenario::from_json(&json)
            .with_context(|| format!("invalid scenario {}", path.display()));
    }

    let demo = Scenario::demo();
    match args.random {
        Some(count) => Ok(Scenario {
            name: Some(format!("random-{count}")),
            waypoints: generate_random_route(args.lat, args.lon, count, &demo.characteristics),
            ..demo
        }),
        None => Ok(demo),
    }
}
