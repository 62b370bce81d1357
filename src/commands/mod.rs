pub mod analytics;

use crate::db::AppState;
use crate::error::StoreError;
use crate::models::{NewWorkout, WorkoutRecord};
use crate::store;

/// Every workout for a user, newest first, capped by the configured fetch limit
pub async fn get_workouts(state: &AppState, user_id: &str) -> Result<Vec<WorkoutRecord>, StoreError> {
  store::fetch_workouts(&state.db, user_id, state.config.fetch_limit).await
}

pub async fn log_workout(state: &AppState, workout: NewWorkout) -> Result<WorkoutRecord, StoreError> {
  store::insert_workout(&state.db, &workout).await
}

pub async fn delete_workout(state: &AppState, id: i64) -> Result<(), StoreError> {
  store::delete_workout(&state.db, id).await
}
