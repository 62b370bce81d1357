use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged workout as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
  pub id: i64,
  pub user_id: String,
  /// When the workout happened (not when it was logged)
  pub date: DateTime<Utc>,
  pub exercises: Vec<ExerciseEntry>,
  pub created_at: Option<DateTime<Utc>>,
}

impl WorkoutRecord {
  /// Completed sets across every exercise in this workout
  pub fn completed_sets(&self) -> impl Iterator<Item = &SetEntry> {
    self.exercises.iter().flat_map(|e| e.completed_sets())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
  /// Free-text name as typed by the user
  pub name: String,
  /// Canonical catalog id; absent on legacy/free-text entries
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exercise_id: Option<i64>,
  #[serde(default)]
  pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
  pub fn completed_sets(&self) -> impl Iterator<Item = &SetEntry> {
    self.sets.iter().filter(|s| s.completed)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
  pub reps: u32,
  /// None means bodyweight / unweighted
  #[serde(default)]
  pub weight: Option<f64>,
  #[serde(default)]
  pub completed: bool,
}

impl SetEntry {
  /// Weight and reps when both are present and positive.
  ///
  /// Records and overload series only credit sets that pass this check.
  pub fn loaded(&self) -> Option<(f64, u32)> {
    match self.weight {
      Some(w) if w > 0.0 && self.reps > 0 => Some((w, self.reps)),
      _ => None,
    }
  }

  /// Volume for blended totals: unweighted sets count one unit per rep
  pub fn blended_volume(&self) -> f64 {
    self.reps as f64 * self.weight.unwrap_or(1.0)
  }
}

/// For inserting new workouts (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
  pub user_id: String,
  pub date: DateTime<Utc>,
  pub exercises: Vec<ExerciseEntry>,
}
