//! Personal records per exercise name
//!
//! Each of max weight, max reps and max volume is tracked independently.
//! `last_achieved` moves whenever any one of them improves, so it marks the
//! most recent PR of any kind rather than a single best session.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::WorkoutRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
  pub exercise_name: String,
  pub max_weight: f64,
  pub max_reps: u32,
  pub max_volume: f64,
  pub last_achieved: DateTime<Utc>,
}

impl PersonalRecord {
  fn new(exercise_name: &str) -> Self {
    Self {
      exercise_name: exercise_name.to_string(),
      max_weight: 0.0,
      max_reps: 0,
      max_volume: 0.0,
      last_achieved: DateTime::<Utc>::UNIX_EPOCH,
    }
  }

  /// Fold one loaded set into the record
  fn observe(&mut self, weight: f64, reps: u32, date: DateTime<Utc>) {
    let volume = weight * reps as f64;

    if weight > self.max_weight {
      self.max_weight = weight;
      self.last_achieved = date;
    }
    if reps > self.max_reps {
      self.max_reps = reps;
      self.last_achieved = date;
    }
    if volume > self.max_volume {
      self.max_volume = volume;
      self.last_achieved = date;
    }
  }
}

/// Scan every completed, loaded set and keep the best values per exercise.
///
/// Workouts are visited oldest first regardless of input order. Exercises that
/// never had a set with both weight and reps produce no record. Output is
/// ordered by max volume descending, ties broken by name.
pub fn compute_personal_records(workouts: &[WorkoutRecord]) -> Vec<PersonalRecord> {
  let mut chronological: Vec<&WorkoutRecord> = workouts.iter().collect();
  chronological.sort_by_key(|w| w.date);

  let mut records: HashMap<&str, PersonalRecord> = HashMap::new();

  for workout in chronological {
    for exercise in &workout.exercises {
      for (weight, reps) in exercise.completed_sets().filter_map(|s| s.loaded()) {
        records
          .entry(exercise.name.as_str())
          .or_insert_with(|| PersonalRecord::new(&exercise.name))
          .observe(weight, reps, workout.date);
      }
    }
  }

  let mut records: Vec<PersonalRecord> = records.into_values().collect();
  records.sort_by(|a, b| {
    b.max_volume
      .total_cmp(&a.max_volume)
      .then_with(|| a.exercise_name.cmp(&b.exercise_name))
  });
  records
}
