//! Error types for route calculation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    /// The caller supplied input the calculator cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Segment flight time is not a usable positive finite number.
    #[error(
        "degenerate segment: flight time {flight_time_s} s at average speed {average_speed_mps} m/s"
    )]
    DegenerateSegment {
        flight_time_s: f64,
        average_speed_mps: f64,
    },

    #[error("segment {index} could not be calculated")]
    Segment {
        index: usize,
        #[source]
        source: Box<RouteError>,
    },
}

impl RouteError {
    /// True if this error, or the segment error it wraps, is a degenerate segment.
    pub fn is_degenerate(&self) -> bool {
        match self {
            RouteError::DegenerateSegment { .. } => true,
            RouteError::Segment { source, .. } => source.is_degenerate(),
            RouteError::InvalidArgument(_) => false,
        }
    }

    /// Index of the failing segment when raised from a full route calculation.
    pub fn segment_index(&self) -> Option<usize> {
        match self {
            RouteError::Segment { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("entity {0} not found")]
    NotFound(u64),

    #[error("entity {0} already exists")]
    AlreadyExists(u64),
}
