//! Visit Planner - command-line front end for the route scheduling engine

mod cli;

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use visit_planner::config::Config;
use visit_planner::services::directions::create_directions_service;
use visit_planner::services::start_time_guard::is_start_in_past;
use visit_planner::types::{CandidateRoute, RouteRequest, SavedRoutePlan};
use visit_planner::{evaluate_routes, format_duration, parse_visit_duration, plan_route};

use cli::{Cli, Command};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A start time in the past is an error, giving a non-zero exit status.
fn check_start(date: NaiveDate, time: NaiveTime, now: NaiveDateTime) -> Result<String> {
    if is_start_in_past(date, time, now) {
        bail!("Start {} {} is in the past", date, time.format("%H:%M"));
    }
    Ok(format!("Start {} {} is OK", date, time.format("%H:%M")))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    // Logs directory - use LOGS_DIR env var or default to ./logs
    let logs_dir = std::env::var("LOGS_DIR").unwrap_or_else(|_| "./logs".to_string());
    std::fs::create_dir_all(&logs_dir).ok();

    // File appender for persistent logs (daily rotation)
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &logs_dir, "visit-planner.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize logging - stderr keeps stdout clean for JSON output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,visit_planner=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            return Err(e);
        }
    };

    match cli.command {
        Command::Plan { request, now, output } => {
            let request: RouteRequest = read_json(&request)?;
            let directions = create_directions_service(&config);

            let now = now.unwrap_or_else(local_now);

            let evaluation = match plan_route(directions.as_ref(), &request, now).await {
                Ok(evaluation) => evaluation,
                Err(e) => {
                    error!("Route planning failed [{}]: {}", e.code(), e);
                    return Err(e.into());
                }
            };

            println!("{}", serde_json::to_string_pretty(&evaluation)?);

            if let Some(path) = output {
                let plan =
                    SavedRoutePlan::from_evaluation(&request, &evaluation, evaluation.best_choice);
                std::fs::write(&path, serde_json::to_vec_pretty(&plan)?)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Saved {} plan {} to {}", plan.choice.as_str(), plan.id, path.display());
            }
        }
        Command::Evaluate { request, directions } => {
            let request: RouteRequest = read_json(&request)?;
            let candidates: Vec<CandidateRoute> = read_json(&directions)?;

            let evaluation = evaluate_routes(
                &request.stops,
                &candidates,
                request.date,
                request.start_time,
                parse_visit_duration(&request.visit_duration),
            )?;
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        }
        Command::CheckStart { date, time, now } => {
            println!("{}", check_start(date, time, now.unwrap_or_else(local_now))?);
        }
        Command::FormatDuration { seconds } => {
            println!("{}", format_duration(seconds));
        }
    }

    Ok(())
}
