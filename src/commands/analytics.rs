//! Analytics commands: fetch a user's log once, then run the pure aggregators
//!
//! `now` defaults to the wall clock; pass a value to replay a past view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analytics::{
  compute_muscle_group_distribution, compute_overload_series, compute_personal_records,
  compute_weekly_volume, compute_workout_stats, ExerciseRef, MuscleGroupStat, OverloadPoint,
  PersonalRecord, WeeklyVolume, WorkoutStats,
};
use crate::commands::get_workouts;
use crate::db::AppState;
use crate::error::StoreError;

/// ---------------------------------------------------------------------------
/// Dashboard
/// ---------------------------------------------------------------------------

/// Everything the progress screen shows, computed from a single fetch
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
  pub generated_at: DateTime<Utc>,
  pub stats: WorkoutStats,
  pub muscle_groups: Vec<MuscleGroupStat>,
  pub personal_records: Vec<PersonalRecord>,
  pub weekly_volume: Vec<WeeklyVolume>,
}

pub async fn get_dashboard(
  state: &AppState,
  user_id: &str,
  now: Option<DateTime<Utc>>,
) -> Result<Dashboard, StoreError> {
  let now = now.unwrap_or_else(Utc::now);
  let workouts = get_workouts(state, user_id).await?;

  let dashboard = Dashboard {
    generated_at: now,
    stats: compute_workout_stats(&workouts, now),
    muscle_groups: compute_muscle_group_distribution(&workouts),
    personal_records: compute_personal_records(&workouts),
    weekly_volume: compute_weekly_volume(&workouts, now, state.config.week_count),
  };

  tracing::debug!(
    user_id,
    workouts = workouts.len(),
    records = dashboard.personal_records.len(),
    "Computed dashboard"
  );

  Ok(dashboard)
}

/// ---------------------------------------------------------------------------
/// Single-metric Commands
/// ---------------------------------------------------------------------------

pub async fn get_workout_stats(
  state: &AppState,
  user_id: &str,
  now: Option<DateTime<Utc>>,
) -> Result<WorkoutStats, StoreError> {
  let workouts = get_workouts(state, user_id).await?;
  Ok(compute_workout_stats(&workouts, now.unwrap_or_else(Utc::now)))
}

pub async fn get_muscle_groups(
  state: &AppState,
  user_id: &str,
) -> Result<Vec<MuscleGroupStat>, StoreError> {
  let workouts = get_workouts(state, user_id).await?;
  Ok(compute_muscle_group_distribution(&workouts))
}

pub async fn get_personal_records(
  state: &AppState,
  user_id: &str,
) -> Result<Vec<PersonalRecord>, StoreError> {
  let workouts = get_workouts(state, user_id).await?;
  Ok(compute_personal_records(&workouts))
}

/// Overload series for one exercise; `weeks` falls back to the configured lookback
pub async fn get_overload_series(
  state: &AppState,
  user_id: &str,
  exercise: &ExerciseRef,
  weeks: Option<u32>,
  now: Option<DateTime<Utc>>,
) -> Result<Vec<OverloadPoint>, StoreError> {
  let workouts = get_workouts(state, user_id).await?;
  let weeks = weeks.unwrap_or(state.config.lookback_weeks);
  Ok(compute_overload_series(&workouts, exercise, weeks, now.unwrap_or_else(Utc::now)))
}

/// Weekly volume; `weeks` falls back to the configured week count
pub async fn get_weekly_volume(
  state: &AppState,
  user_id: &str,
  weeks: Option<u32>,
  now: Option<DateTime<Utc>>,
) -> Result<Vec<WeeklyVolume>, StoreError> {
  let workouts = get_workouts(state, user_id).await?;
  let weeks = weeks.unwrap_or(state.config.week_count);
  Ok(compute_weekly_volume(&workouts, now.unwrap_or_else(Utc::now), weeks))
}
