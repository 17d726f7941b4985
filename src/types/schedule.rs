//! Schedule types

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RouteRequest, Stop};

/// A point in time on the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTime {
    pub at: NaiveDateTime,
    /// Midnights crossed since the plan's start date
    pub day_offset: i64,
    /// 12-hour clock text, suffixed with "(+Nd)" when `day_offset >= 1`
    pub display: String,
}

/// One visit on the derived itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledStop {
    /// Position in the itinerary (1-based)
    pub order: usize,
    pub stop: Stop,
    pub arrival: ScheduleTime,
    pub departure: ScheduleTime,
    /// Incoming travel, zero for the first stop
    pub travel_duration_seconds: u64,
    pub travel_time: String,
    pub travel_distance_meters: u64,
    pub travel_distance: String,
    pub is_first: bool,
}

/// The time-stamped itinerary for one stop ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub route_details: Vec<ScheduledStop>,
    pub total_stops: usize,
    /// Sum of incoming leg durations
    pub total_travel_seconds: u64,
    pub total_travel_time: String,
    /// Travel plus every visit
    pub estimated_total_seconds: u64,
    pub estimated_total_time: String,
    /// Route-level distance as reported by the directions provider
    pub total_distance_meters: u64,
    pub estimated_distance: String,
    pub mileage_cost: String,
    /// Elapsed time expressed in days/hours/minutes
    pub visit_days: String,
    /// Route geometry as [lng, lat] pairs, empty if not available
    #[serde(default)]
    pub geometry: Vec<[f64; 2]>,
}

impl Schedule {
    /// Stop identifiers in itinerary order.
    pub fn stop_ids(&self) -> Vec<Uuid> {
        self.route_details.iter().map(|s| s.stop.id).collect()
    }
}

/// Which ordering a schedule was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleChoice {
    Original,
    Optimized,
}

impl ScheduleChoice {
    pub const fn as_str(self) -> &'static str {
        match self {
            ScheduleChoice::Original => "original",
            ScheduleChoice::Optimized => "optimized",
        }
    }
}

/// Both schedules for a request plus the one with the lower total time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEvaluation {
    pub original: Schedule,
    pub optimized: Schedule,
    pub best: Schedule,
    pub best_choice: ScheduleChoice,
}

impl RouteEvaluation {
    pub fn schedule(&self, choice: ScheduleChoice) -> &Schedule {
        match choice {
            ScheduleChoice::Original => &self.original,
            ScheduleChoice::Optimized => &self.optimized,
        }
    }
}

/// Plain value handed to persistence once the user accepts a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoutePlan {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub visit_duration: String,
    /// Stops in the order the schedule visits them
    pub stops: Vec<Stop>,
    pub choice: ScheduleChoice,
    pub schedule: Schedule,
}

impl SavedRoutePlan {
    pub fn from_evaluation(
        request: &RouteRequest,
        evaluation: &RouteEvaluation,
        choice: ScheduleChoice,
    ) -> Self {
        let schedule = evaluation.schedule(choice).clone();
        Self {
            id: Uuid::new_v4(),
            date: request.date,
            start_time: request.start_time,
            visit_duration: request.visit_duration.clone(),
            stops: schedule.route_details.iter().map(|s| s.stop.clone()).collect(),
            choice,
            schedule,
        }
    }
}
