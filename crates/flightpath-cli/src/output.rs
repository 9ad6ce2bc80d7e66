//! Rendering of calculated routes for the terminal.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use flightpath_core::{FlightState, RouteSeries, RouteSummary, Scenario};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable totals
    #[default]
    Summary,
    /// Full report with series as JSON
    Json,
    /// One CSV row per sample
    Csv,
}

/// Everything produced by one calculation run.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub generated_at: DateTime<Utc>,
    pub scenario: Scenario,
    pub summary: Option<RouteSummary>,
    pub series: RouteSeries,
}

impl RouteReport {
    pub fn new(scenario: Scenario, route: &[FlightState]) -> Self {
        Self {
            generated_at: Utc::now(),
            scenario,
            summary: RouteSummary::from_route(route),
            series: RouteSeries::from_route(route),
        }
    }
}

pub fn render(
    format: OutputFormat,
    report: &RouteReport,
    route: &[FlightState],
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Summary => Ok(render_summary(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Csv => Ok(render_csv(route)),
    }
}

pub fn render_summary(report: &RouteReport) -> String {
    let name = report.scenario.name.as_deref().unwrap_or("unnamed");
    let header = format!("Route '{}' ({} waypoints)\n", name, report.scenario.waypoints.len());

    let Some(summary) = &report.summary else {
        return header + "  no samples\n";
    };
    let lines = [
        format!("  Samples:   {}", summary.samples),
        format!("  Duration:  {:.0} s", summary.duration_s),
        format!("  Path:      {:.1} m", summary.path_length_m),
        format!(
            "  Altitude:  {:.1} .. {:.1} m",
            summary.min_altitude_m, summary.max_altitude_m
        ),
        format!(
            "  Speed:     {:.1} .. {:.1} m/s",
            summary.min_speed_mps, summary.max_speed_mps
        ),
    ];
    header + &lines.join("\n") + "\n"
}

const CSV_HEADER: &str = "time_s,lat,lon,altitude_m,speed_mps,course_deg";

pub fn render_csv(route: &[FlightState]) -> String {
    let rows = route.iter().enumerate().map(|(i, state)| {
        format!(
            "{},{:.8},{:.8},{:.3},{:.3},{:.3}",
            i, state.lat, state.lon, state.altitude_m, state.speed_mps, state.course_deg
        )
    });
    std::iter::once(CSV_HEADER.to_string())
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}
