//! Route candidate evaluation.
//!
//! The directions provider answers with one or more candidate routes. The
//! first one travels the stops in the requested order; the fastest one (which
//! may carry a suggested waypoint permutation) becomes the optimized route.
//! Both orderings are turned into schedules and the one with the lower total
//! estimated time is reported as best.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::error::PlanningError;
use crate::services::sequential_schedule::{compute_sequential_schedule, ScheduleInput};
use crate::types::{CandidateRoute, RouteEvaluation, ScheduleChoice, Stop};

/// Reorder `stops` by a permutation of their indices.
pub fn apply_waypoint_order(stops: &[Stop], order: &[usize]) -> Result<Vec<Stop>, PlanningError> {
    let invalid = || PlanningError::InvalidWaypointOrder {
        order: order.to_vec(),
        stop_count: stops.len(),
    };

    if order.len() != stops.len() {
        return Err(invalid());
    }

    let mut seen = vec![false; stops.len()];
    let mut reordered = Vec::with_capacity(stops.len());
    for &idx in order {
        match seen.get_mut(idx) {
            Some(flag) if !*flag => *flag = true,
            _ => return Err(invalid()),
        }
        reordered.push(stops[idx].clone());
    }

    Ok(reordered)
}

/// Build original/optimized/best schedules from the provider's candidates.
pub fn evaluate_routes(
    stops: &[Stop],
    candidates: &[CandidateRoute],
    start_date: NaiveDate,
    start_time: NaiveTime,
    visit_duration_seconds: u64,
) -> Result<RouteEvaluation, PlanningError> {
    let original_route = candidates.first().ok_or(PlanningError::NoRouteFound)?;

    // First minimum wins, so a lone candidate is both original and optimized.
    let optimized_route = candidates
        .iter()
        .min_by_key(|c| c.total_duration_seconds)
        .unwrap_or(original_route);

    let optimized_stops = match &optimized_route.waypoint_order {
        Some(order) => apply_waypoint_order(stops, order)?,
        None => stops.to_vec(),
    };

    debug!(
        "Evaluating {} candidates: original {}s, optimized {}s (permutation: {:?})",
        candidates.len(),
        original_route.total_duration_seconds,
        optimized_route.total_duration_seconds,
        optimized_route.waypoint_order
    );

    let original = compute_sequential_schedule(&ScheduleInput::for_route(
        stops.to_vec(),
        original_route,
        start_date,
        start_time,
        visit_duration_seconds,
    ));
    let optimized = compute_sequential_schedule(&ScheduleInput::for_route(
        optimized_stops,
        optimized_route,
        start_date,
        start_time,
        visit_duration_seconds,
    ));

    // Ties go to the provider's ordering.
    let (best, best_choice) =
        if optimized.estimated_total_seconds <= original.estimated_total_seconds {
            (optimized.clone(), ScheduleChoice::Optimized)
        } else {
            (original.clone(), ScheduleChoice::Original)
        };

    Ok(RouteEvaluation {
        original,
        optimized,
        best,
        best_choice,
    })
}
