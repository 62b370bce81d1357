//! Test utilities and helpers for unit and integration testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - A fixed clock
//! - Helper assertions

use crate::config::AppConfig;
use crate::db::AppState;
use crate::models::{ExerciseEntry, SetEntry, WorkoutRecord};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::SqlitePool;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// App state over a fresh in-memory database with default config
pub async fn setup_test_state() -> AppState {
  AppState {
    db: setup_test_db().await,
    config: AppConfig::default(),
  }
}

/// Seed one workout per day for `user_id`, starting at `fixed_now()` and going back
/// Returns the IDs of created workouts
pub async fn seed_test_workouts(pool: &SqlitePool, user_id: &str, count: usize) -> Vec<i64> {
  let mut workout_ids = Vec::new();

  for i in 0..count {
    let date = fixed_now() - Duration::days(i as i64);
    let exercises = vec![
      mock_exercise("Bench Press", &[(100.0 + i as f64, 5), (100.0, 5)]),
      mock_exercise("Barbell Row", &[(80.0, 8)]),
    ];

    let result = sqlx::query(
      r#"
      INSERT INTO workouts (user_id, date, exercises_json, created_at)
      VALUES (?1, ?2, ?3, ?4)
      "#,
    )
    .bind(user_id)
    .bind(date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    .bind(serde_json::to_string(&exercises).expect("Failed to encode exercises"))
    .bind(Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    .execute(pool)
    .await
    .expect("Failed to insert test workout");

    workout_ids.push(result.last_insert_rowid());
  }

  workout_ids
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Wednesday 2024-06-12 15:00 UTC. The week starts Sunday 2024-06-09.
pub fn fixed_now() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 6, 12, 15, 0, 0).unwrap()
}

/// Exercise with completed (weight, reps) sets
pub fn mock_exercise(name: &str, sets: &[(f64, u32)]) -> ExerciseEntry {
  ExerciseEntry {
    name: name.to_string(),
    exercise_id: None,
    sets: sets
      .iter()
      .map(|&(weight, reps)| SetEntry { reps, weight: Some(weight), completed: true })
      .collect(),
  }
}

pub fn mock_workout_at(date: DateTime<Utc>, exercises: Vec<ExerciseEntry>) -> WorkoutRecord {
  WorkoutRecord {
    id: date.timestamp(),
    user_id: "test-user".to_string(),
    date,
    exercises,
    created_at: Some(date),
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name = 'workouts'"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_workouts_returns_correct_count() {
    let pool = setup_test_db().await;

    let ids = seed_test_workouts(&pool, "user-1", 5).await;
    assert_eq!(ids.len(), 5);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
      .fetch_one(&pool)
      .await
      .expect("Failed to count workouts");

    assert_eq!(count, 5);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let exercise = mock_exercise("Squat", &[(100.0, 5)]);
    assert_eq!(exercise.sets.len(), 1);
    assert!(exercise.sets[0].completed);

    let workout = mock_workout_at(fixed_now(), vec![exercise]);
    assert_eq!(workout.completed_sets().count(), 1);
  }
}
