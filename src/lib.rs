//! Visit Planner - multi-stop visit route scheduling
//!
//! Turns a set of selected stops, a start date/time and a per-visit duration
//! into time-stamped itineraries for the requested and the provider-optimized
//! stop order.

pub mod config;
pub mod defaults;
pub mod error;
pub mod services;
pub mod types;

pub use error::{DirectionsError, PlanningError};
pub use services::formatting::{estimate_cost, format_distance, format_duration};
pub use services::planner::plan_route;
pub use services::route_evaluator::evaluate_routes;
pub use services::sequential_schedule::{compute_sequential_schedule, ScheduleInput};
pub use services::start_time_guard::is_start_in_past;
pub use services::visit_duration::parse_visit_duration;
