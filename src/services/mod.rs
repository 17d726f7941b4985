//! Route scheduling services

pub mod directions;
pub mod formatting;
pub mod geo;
pub mod planner;
pub mod route_evaluator;
pub mod sequential_schedule;
pub mod start_time_guard;
pub mod visit_duration;
