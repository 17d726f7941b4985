//! Route planning flow for one request.
//!
//! Validates the start time, asks the directions provider for candidates and
//! evaluates them. Nothing is cached: every call starts from the request.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::error::PlanningError;
use crate::services::directions::DirectionsService;
use crate::services::route_evaluator::evaluate_routes;
use crate::services::start_time_guard::ensure_start_not_in_past;
use crate::services::visit_duration::parse_visit_duration;
use crate::types::{Coordinates, RouteEvaluation, RouteRequest};

/// Plan a visit route for `request` as of `now`.
pub async fn plan_route(
    directions: &dyn DirectionsService,
    request: &RouteRequest,
    now: NaiveDateTime,
) -> Result<RouteEvaluation, PlanningError> {
    ensure_start_not_in_past(request.date, request.start_time, now)?;

    let visit_duration_seconds = parse_visit_duration(&request.visit_duration);
    let locations: Vec<Coordinates> = request.stops.iter().map(|s| s.coordinates).collect();

    debug!(
        "Requesting {} directions for {} stops",
        directions.name(),
        locations.len()
    );
    let candidates = directions.get_routes(&locations).await?;

    let evaluation = evaluate_routes(
        &request.stops,
        &candidates,
        request.date,
        request.start_time,
        visit_duration_seconds,
    )?;

    info!(
        "Planned {} stops on {}: best is {} ({})",
        evaluation.best.total_stops,
        request.date,
        evaluation.best_choice.as_str(),
        evaluation.best.estimated_total_time
    );

    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectionsError;
    use crate::services::directions::MockDirectionsService;
    use crate::types::{CandidateRoute, Leg, ScheduleChoice, Stop};
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    /// Returns a fixed answer regardless of the locations.
    struct FixedDirections(Result<Vec<CandidateRoute>, (String, String)>);

    #[async_trait]
    impl DirectionsService for FixedDirections {
        async fn get_routes(
            &self,
            _: &[Coordinates],
        ) -> Result<Vec<CandidateRoute>, DirectionsError> {
            match &self.0 {
                Ok(routes) => Ok(routes.clone()),
                Err((status, message)) => Err(DirectionsError::Status {
                    status: status.clone(),
                    message: message.clone(),
                }),
            }
        }

        fn name(&self) -> &str {
            "Fixed"
        }
    }

    fn request(start: &str, visit: &str) -> RouteRequest {
        let stops = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Stop::new(
                    Uuid::from_u128(i as u128 + 1),
                    *name,
                    format!("{} Oak Ave", 100 + i),
                    Coordinates { lat: 39.78 + i as f64 * 0.05, lng: -89.65 },
                )
            })
            .collect();

        RouteRequest {
            stops,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            visit_duration: visit.to_string(),
        }
    }

    fn early_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(6, 0, 0).unwrap()
    }

    fn legs() -> Vec<CandidateRoute> {
        vec![CandidateRoute::from_legs(vec![
            Leg { duration_seconds: 1200, distance_meters: 5000 },
            Leg { duration_seconds: 600, distance_meters: 2000 },
        ])]
    }

    #[tokio::test]
    async fn test_plan_route_concrete_scenario() {
        let service = FixedDirections(Ok(legs()));
        let eval = plan_route(&service, &request("09:00", "30 minutes"), early_morning())
            .await
            .unwrap();

        let details = &eval.best.route_details;
        assert_eq!(details[0].arrival.display, "09:00 AM");
        assert_eq!(details[0].departure.display, "09:30 AM");
        assert_eq!(details[1].arrival.display, "09:50 AM");
        assert_eq!(details[1].departure.display, "10:20 AM");
        assert_eq!(details[2].arrival.display, "10:30 AM");
        assert_eq!(details[2].departure.display, "11:00 AM");
        assert_eq!(eval.best.total_travel_seconds, 1800);
        assert_eq!(eval.best.estimated_total_time, "2h 0m");
        assert_eq!(eval.best_choice, ScheduleChoice::Optimized);
        assert_eq!(eval.best, eval.original);
    }

    #[tokio::test]
    async fn test_plan_route_rejects_past_start() {
        let service = FixedDirections(Ok(legs()));
        let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();

        let result = plan_route(&service, &request("08:00", "30 minutes"), now).await;
        assert!(matches!(result, Err(PlanningError::PastStartTime { .. })));
    }

    #[tokio::test]
    async fn test_plan_route_no_candidates() {
        let service = FixedDirections(Ok(vec![]));
        let result = plan_route(&service, &request("09:00", "1 hour"), early_morning()).await;
        assert!(matches!(result, Err(PlanningError::NoRouteFound)));
    }

    #[tokio::test]
    async fn test_plan_route_service_error_is_distinct() {
        let service = FixedDirections(Err((
            "OVER_QUERY_LIMIT".to_string(),
            "quota exceeded".to_string(),
        )));
        let result = plan_route(&service, &request("09:00", "1 hour"), early_morning()).await;

        match result {
            Err(PlanningError::Service { status, message }) => {
                assert_eq!(status, "OVER_QUERY_LIMIT");
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plan_route_with_mock_directions() {
        let service = MockDirectionsService::new();
        let eval = plan_route(&service, &request("23:30", "2 hours"), early_morning())
            .await
            .unwrap();

        assert_eq!(eval.best.total_stops, 3);
        assert_eq!(eval.best.route_details[0].departure.display, "01:30 AM (+1d)");
        assert!(eval.best.route_details[0].is_first);
    }

    #[test]
    fn test_plan_route_blocking() {
        let service = FixedDirections(Ok(legs()));
        let eval = tokio_test::block_on(plan_route(
            &service,
            &request("09:00", "garbled"),
            early_morning(),
        ))
        .unwrap();

        // Unreadable duration falls back to one hour per visit.
        assert_eq!(eval.best.estimated_total_seconds, 1800 + 3 * 3600);
    }
}
