//! Workout persistence: the only place records are read or written
//!
//! Exercises live in a JSON column, so a workout round-trips as one document.
//! Dates are stored as fixed-width RFC 3339 UTC strings, which keeps
//! `ORDER BY date` chronological.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DbPool;
use crate::error::StoreError;
use crate::models::{ExerciseEntry, NewWorkout, WorkoutRecord};

fn encode_date(date: DateTime<Utc>) -> String {
  date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn decode_date(id: i64, raw: &str) -> Result<DateTime<Utc>, StoreError> {
  DateTime::parse_from_rfc3339(raw)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| StoreError::Decode { id, reason: format!("bad date {:?}: {}", raw, e) })
}

fn workout_from_row(row: &SqliteRow) -> Result<WorkoutRecord, StoreError> {
  let id: i64 = row.try_get("id")?;
  let date: String = row.try_get("date")?;
  let created_at: Option<String> = row.try_get("created_at")?;
  let exercises_json: String = row.try_get("exercises_json")?;

  let exercises: Vec<ExerciseEntry> = serde_json::from_str(&exercises_json)
    .map_err(|e| StoreError::Decode { id, reason: format!("bad exercises: {}", e) })?;

  Ok(WorkoutRecord {
    id,
    user_id: row.try_get("user_id")?,
    date: decode_date(id, &date)?,
    exercises,
    created_at: created_at.map(|s| decode_date(id, &s)).transpose()?,
  })
}

/// Store a new workout and return it with its assigned id
pub async fn insert_workout(pool: &DbPool, workout: &NewWorkout) -> Result<WorkoutRecord, StoreError> {
  let exercises_json = serde_json::to_string(&workout.exercises)?;
  let created_at = Utc::now();

  let result = sqlx::query(
    r#"
    INSERT INTO workouts (user_id, date, exercises_json, created_at)
    VALUES (?1, ?2, ?3, ?4)
    "#,
  )
  .bind(&workout.user_id)
  .bind(encode_date(workout.date))
  .bind(&exercises_json)
  .bind(encode_date(created_at))
  .execute(pool)
  .await?;

  let id = result.last_insert_rowid();
  tracing::info!(id, user_id = %workout.user_id, exercises = workout.exercises.len(), "Logged workout");

  fetch_workout(pool, id).await
}

/// All workouts for a user, newest first, optionally capped at the `limit` most recent
pub async fn fetch_workouts(
  pool: &DbPool,
  user_id: &str,
  limit: Option<i64>,
) -> Result<Vec<WorkoutRecord>, StoreError> {
  // SQLite treats a negative LIMIT as no limit
  let rows = sqlx::query(
    r#"
    SELECT id, user_id, date, exercises_json, created_at
    FROM workouts
    WHERE user_id = ?1
    ORDER BY date DESC, id DESC
    LIMIT ?2
    "#,
  )
  .bind(user_id)
  .bind(limit.unwrap_or(-1))
  .fetch_all(pool)
  .await?;

  let workouts = rows.iter().map(workout_from_row).collect::<Result<Vec<_>, _>>()?;
  tracing::debug!(user_id, count = workouts.len(), "Fetched workouts");

  Ok(workouts)
}

pub async fn fetch_workout(pool: &DbPool, id: i64) -> Result<WorkoutRecord, StoreError> {
  let row = sqlx::query(
    "SELECT id, user_id, date, exercises_json, created_at FROM workouts WHERE id = ?1",
  )
  .bind(id)
  .fetch_optional(pool)
  .await?
  .ok_or(StoreError::NotFound(id))?;

  workout_from_row(&row)
}

pub async fn delete_workout(pool: &DbPool, id: i64) -> Result<(), StoreError> {
  let result = sqlx::query("DELETE FROM workouts WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(StoreError::NotFound(id));
  }

  tracing::info!(id, "Deleted workout");
  Ok(())
}
