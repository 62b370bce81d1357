//! `lift-log` command line: log workouts from JSON and print analytics as JSON

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::analytics::ExerciseRef;
use crate::commands::{self, analytics};
use crate::config::MAX_WEEKS;
use crate::db::AppState;
use crate::error::{ConfigError, StoreError};
use crate::models::NewWorkout;

#[derive(Debug, Parser)]
#[command(name = "lift-log", version, about = "Strength-training log and workout analytics")]
pub struct Cli {
  /// SQLite database URL (overrides LIFT_LOG_DATABASE_URL)
  #[arg(long, global = true)]
  pub database_url: Option<String>,

  /// Evaluate as of this RFC 3339 instant instead of the current time
  #[arg(long, global = true)]
  pub now: Option<DateTime<Utc>>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Log a workout from a JSON file (`{"date": ..., "exercises": [...]}`)
  Log {
    #[arg(long)]
    user: String,
    #[arg(long)]
    file: PathBuf,
  },
  /// Stats, muscle groups, records and weekly volume in one report
  Report {
    #[arg(long)]
    user: String,
  },
  /// Activity counts and streaks
  Stats {
    #[arg(long)]
    user: String,
  },
  /// Share of logged exercises per muscle group
  Muscles {
    #[arg(long)]
    user: String,
  },
  /// Personal records, best volume first
  Records {
    #[arg(long)]
    user: String,
  },
  /// Daily bests for one exercise
  Overload {
    #[arg(long)]
    user: String,
    /// Exercise name, fuzzy matched
    #[arg(long)]
    exercise: String,
    /// Canonical catalog id; legacy entries still match on name
    #[arg(long)]
    exercise_id: Option<i64>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WEEKS)))]
    weeks: Option<u32>,
  },
  /// Volume per Sunday-aligned week, oldest first
  Weekly {
    #[arg(long)]
    user: String,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WEEKS)))]
    weeks: Option<u32>,
  },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Store(#[from] StoreError),

  #[error("Failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("Invalid workout JSON: {0}")]
  Json(#[from] serde_json::Error),
}

/// Workout file body; the user comes from `--user`
#[derive(Debug, serde::Deserialize)]
struct WorkoutFile {
  date: DateTime<Utc>,
  exercises: Vec<crate::models::ExerciseEntry>,
}

pub async fn execute(cli: Cli, state: &AppState) -> Result<String, CliError> {
  let now = cli.now;

  match cli.command {
    Command::Log { user, file } => {
      let raw = tokio::fs::read_to_string(&file).await.map_err(|source| CliError::Read {
        path: file.clone(),
        source,
      })?;
      let body: WorkoutFile = serde_json::from_str(&raw)?;
      let workout = NewWorkout { user_id: user, date: body.date, exercises: body.exercises };
      to_json(&commands::log_workout(state, workout).await?)
    }
    Command::Report { user } => to_json(&analytics::get_dashboard(state, &user, now).await?),
    Command::Stats { user } => to_json(&analytics::get_workout_stats(state, &user, now).await?),
    Command::Muscles { user } => to_json(&analytics::get_muscle_groups(state, &user).await?),
    Command::Records { user } => to_json(&analytics::get_personal_records(state, &user).await?),
    Command::Overload { user, exercise, exercise_id, weeks } => {
      let exercise = match exercise_id {
        Some(id) => ExerciseRef::Canonical { id, name: exercise },
        None => ExerciseRef::FreeText { name: exercise },
      };
      to_json(&analytics::get_overload_series(state, &user, &exercise, weeks, now).await?)
    }
    Command::Weekly { user, weeks } => {
      to_json(&analytics::get_weekly_volume(state, &user, weeks, now).await?)
    }
  }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
  Ok(serde_json::to_string_pretty(value)?)
}
