//! CLI argument parsing for the visit-planner binary.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use visit_planner::types::parse_clock_time;

#[derive(Parser)]
#[command(name = "visit-planner", about = "Multi-stop visit route scheduler")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Request directions for a route request and print its schedules
    Plan {
        /// Route request JSON file
        #[arg(long)]
        request: PathBuf,
        /// Reference "now" for the past-start check (defaults to local time)
        #[arg(long, value_parser = parse_local_datetime)]
        now: Option<NaiveDateTime>,
        /// Write the best schedule as a saved plan to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Evaluate stored candidate routes without calling a directions provider
    Evaluate {
        /// Route request JSON file
        #[arg(long)]
        request: PathBuf,
        /// Candidate routes JSON file (array)
        #[arg(long)]
        directions: PathBuf,
    },
    /// Check whether a start date/time is already in the past
    CheckStart {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, value_parser = parse_time_of_day)]
        time: NaiveTime,
        #[arg(long, value_parser = parse_local_datetime)]
        now: Option<NaiveDateTime>,
    },
    /// Print a duration in seconds the way schedules show it
    FormatDuration { seconds: u64 },
}

fn parse_time_of_day(value: &str) -> Result<NaiveTime, String> {
    parse_clock_time(value).ok_or_else(|| format!("expected HH:MM, got {value:?}"))
}

fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("expected YYYY-MM-DDTHH:MM[:SS], got {value:?}"))
}
