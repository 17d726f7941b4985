//! Route types

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Stop;

/// Input bundle for one scheduling attempt.
///
/// Built fresh whenever the stop selection, date, start time or visit
/// duration changes; nothing derived from it is cached between attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Stops in the order the user picked them
    pub stops: Vec<Stop>,
    /// Calendar date of the first visit
    pub date: NaiveDate,
    /// Local time-of-day of the first arrival ("HH:MM" or "HH:MM:SS")
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    /// Free-text per-visit duration ("30 minutes", "1 hour", ...)
    pub visit_duration: String,
}

impl RouteRequest {
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }
}

/// Parse a wall-clock time as entered in the plan form.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

mod clock_time {
    use chrono::{NaiveTime, Timelike};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        let pattern = if time.second() == 0 { "%H:%M" } else { "%H:%M:%S" };
        serializer.serialize_str(&time.format(pattern).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid time of day: {raw}")))
    }
}

/// Travel segment arriving at the next stop of an ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub duration_seconds: u64,
    pub distance_meters: u64,
}

/// One full-route answer from the directions provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRoute {
    /// `legs[i]` arrives at stop `i + 1` of this candidate's ordering
    pub legs: Vec<Leg>,
    pub total_duration_seconds: u64,
    pub total_distance_meters: u64,
    /// Suggested visiting order as indices into the requested stop list
    #[serde(default)]
    pub waypoint_order: Option<Vec<usize>>,
    /// Overview polyline as [lng, lat] pairs (GeoJSON order), empty if unknown
    #[serde(default)]
    pub geometry: Vec<[f64; 2]>,
}

impl CandidateRoute {
    /// Candidate with no legs, used for single-stop requests.
    pub fn empty() -> Self {
        Self::from_legs(vec![])
    }

    /// Build a candidate whose totals are the sums of its legs.
    pub fn from_legs(legs: Vec<Leg>) -> Self {
        let total_duration_seconds = legs.iter().map(|l| l.duration_seconds).sum();
        let total_distance_meters = legs.iter().map(|l| l.distance_meters).sum();
        Self {
            legs,
            total_duration_seconds,
            total_distance_meters,
            waypoint_order: None,
            geometry: vec![],
        }
    }

    pub fn with_waypoint_order(mut self, order: Vec<usize>) -> Self {
        self.waypoint_order = Some(order);
        self
    }

    pub fn with_geometry(mut self, geometry: Vec<[f64; 2]>) -> Self {
        self.geometry = geometry;
        self
    }
}
