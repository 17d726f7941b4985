//! Error types for route planning

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Failures talking to the directions provider.
#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Directions service returned {status}: {message}")]
    Status { status: String, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid polyline encoding")]
    Polyline,
}

impl DirectionsError {
    /// Status code and message as reported to the caller.
    pub fn status_and_message(&self) -> (String, String) {
        match self {
            DirectionsError::Status { status, message } => (status.clone(), message.clone()),
            DirectionsError::Request(e) => (
                e.status()
                    .map(|s| s.as_u16().to_string())
                    .unwrap_or_else(|| "REQUEST_FAILED".to_string()),
                e.to_string(),
            ),
            DirectionsError::Deserialize(e) => ("INVALID_RESPONSE".to_string(), e.to_string()),
            DirectionsError::Polyline => ("INVALID_RESPONSE".to_string(), self.to_string()),
        }
    }
}

/// Reasons a visit schedule cannot be produced.
#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("No route found for the selected stops")]
    NoRouteFound,

    #[error("Directions service error ({status}): {message}")]
    Service { status: String, message: String },

    #[error("Start time {time} on {date} is in the past")]
    PastStartTime { date: NaiveDate, time: NaiveTime },

    #[error("Waypoint order {order:?} is not a permutation of {stop_count} stops")]
    InvalidWaypointOrder { order: Vec<usize>, stop_count: usize },
}

impl PlanningError {
    pub const fn code(&self) -> &'static str {
        match self {
            PlanningError::NoRouteFound => "NO_ROUTE_FOUND",
            PlanningError::Service { .. } => "SERVICE_ERROR",
            PlanningError::PastStartTime { .. } => "PAST_START_TIME",
            PlanningError::InvalidWaypointOrder { .. } => "INVALID_WAYPOINT_ORDER",
        }
    }
}

impl From<DirectionsError> for PlanningError {
    fn from(err: DirectionsError) -> Self {
        let (status, message) = err.status_and_message();
        PlanningError::Service { status, message }
    }
}
