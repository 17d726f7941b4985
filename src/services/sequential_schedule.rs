//! Sequential schedule computation for a visit itinerary.
//!
//! Given an ordered list of stops, the travel legs between them, a start
//! date/time and a per-visit duration, this module walks the route
//! sequentially and computes arrival/departure times for each stop. It does
//! NOT re-optimise the order; that choice belongs to the route evaluator.
//!
//! The clock is a full date-time, so itineraries running past midnight keep
//! counting and each time carries its day offset from the start date.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::defaults::MILEAGE_RATE_PER_MILE;
use crate::services::formatting::{
    estimate_cost, format_distance, format_duration, format_visit_days, schedule_time,
};
use crate::types::{CandidateRoute, Leg, Schedule, ScheduledStop, Stop};

/// Input for sequential schedule computation.
#[derive(Debug, Clone)]
pub struct ScheduleInput {
    /// Stops in visiting order.
    pub stops: Vec<Stop>,
    /// `legs[i]` is the travel arriving at `stops[i + 1]`.
    pub legs: Vec<Leg>,
    /// Route-level distance reported by the directions provider.
    pub total_distance_meters: u64,
    /// Route geometry passed through to the schedule.
    pub geometry: Vec<[f64; 2]>,
    pub start_date: NaiveDate,
    /// Arrival time at the first stop.
    pub start_time: NaiveTime,
    pub visit_duration_seconds: u64,
}

impl ScheduleInput {
    /// Pair a stop ordering with the candidate route that travels it.
    pub fn for_route(
        stops: Vec<Stop>,
        route: &CandidateRoute,
        start_date: NaiveDate,
        start_time: NaiveTime,
        visit_duration_seconds: u64,
    ) -> Self {
        Self {
            stops,
            legs: route.legs.clone(),
            total_distance_meters: route.total_distance_meters,
            geometry: route.geometry.clone(),
            start_date,
            start_time,
            visit_duration_seconds,
        }
    }
}

/// Move the clock forward, pinning it at the last representable instant
/// instead of wrapping or overflowing.
fn advance(cursor: NaiveDateTime, seconds: u64) -> NaiveDateTime {
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|step| cursor.checked_add_signed(step))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Compute a sequential schedule for the given stop ordering.
///
/// Durations are in **seconds** and distances in **meters**, matching the
/// directions provider. A missing leg counts as zero travel.
pub fn compute_sequential_schedule(input: &ScheduleInput) -> Schedule {
    let n = input.stops.len();
    let mut route_details: Vec<ScheduledStop> = Vec::with_capacity(n);

    if n > 0 && input.legs.len() + 1 < n {
        warn!(
            "Route has {} legs for {} stops; missing legs count as zero travel",
            input.legs.len(),
            n
        );
    }

    let mut cursor = input.start_date.and_time(input.start_time);
    let mut total_travel_seconds: u64 = 0;

    for (i, stop) in input.stops.iter().enumerate() {
        // Travel leg from previous stop to this one.
        let leg = if i == 0 {
            Leg::default()
        } else {
            input.legs.get(i - 1).copied().unwrap_or_default()
        };

        cursor = advance(cursor, leg.duration_seconds);
        let arrival = schedule_time(cursor, input.start_date);

        cursor = advance(cursor, input.visit_duration_seconds);
        let departure = schedule_time(cursor, input.start_date);

        route_details.push(ScheduledStop {
            order: i + 1,
            stop: stop.clone(),
            arrival,
            departure,
            travel_duration_seconds: leg.duration_seconds,
            travel_time: format_duration(leg.duration_seconds),
            travel_distance_meters: leg.distance_meters,
            travel_distance: format_distance(leg.distance_meters),
            is_first: i == 0,
        });

        total_travel_seconds = total_travel_seconds.saturating_add(leg.duration_seconds);
    }

    let estimated_total_seconds = total_travel_seconds
        .saturating_add((n as u64).saturating_mul(input.visit_duration_seconds));

    Schedule {
        route_details,
        total_stops: n,
        total_travel_seconds,
        total_travel_time: format_duration(total_travel_seconds),
        estimated_total_seconds,
        estimated_total_time: format_duration(estimated_total_seconds),
        total_distance_meters: input.total_distance_meters,
        estimated_distance: format_distance(input.total_distance_meters),
        mileage_cost: estimate_cost(input.total_distance_meters, MILEAGE_RATE_PER_MILE),
        visit_days: format_visit_days(estimated_total_seconds),
        geometry: input.geometry.clone(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
