//! Progressive-overload series: daily best weight, reps and volume for one exercise

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::day_of;
use crate::models::{ExerciseEntry, WorkoutRecord};

/// How the caller identifies the exercise to chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExerciseRef {
  /// Catalog exercise. Entries carrying an id are joined on it; legacy
  /// entries without one fall back to fuzzy name matching.
  Canonical { id: i64, name: String },
  /// Free text, fuzzy matched against every entry
  FreeText { name: String },
}

impl ExerciseRef {
  pub fn free_text(name: impl Into<String>) -> Self {
    ExerciseRef::FreeText { name: name.into() }
  }

  pub fn matches(&self, entry: &ExerciseEntry) -> bool {
    match (self, entry.exercise_id) {
      (ExerciseRef::Canonical { id, .. }, Some(entry_id)) => *id == entry_id,
      (ExerciseRef::Canonical { name, .. }, None) => fuzzy_name_match(name, &entry.name),
      (ExerciseRef::FreeText { name }, _) => fuzzy_name_match(name, &entry.name),
    }
  }
}

/// Case-insensitive containment in either direction. A blank query matches nothing.
pub fn fuzzy_name_match(query: &str, name: &str) -> bool {
  let query = query.trim().to_lowercase();
  if query.is_empty() {
    return false;
  }
  let name = name.to_lowercase();
  name.contains(&query) || query.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverloadPoint {
  pub date: NaiveDate,
  pub max_weight: f64,
  pub max_reps: u32,
  pub max_volume: f64,
}

impl OverloadPoint {
  fn empty(date: NaiveDate) -> Self {
    Self { date, max_weight: 0.0, max_reps: 0, max_volume: 0.0 }
  }
}

/// Build the per-day series for `exercise` over the last `lookback_weeks`.
///
/// A window reaching past the earliest representable date has no cutoff.
/// Only the first matching exercise of each workout is used. Days without a
/// completed, loaded set are left out rather than zero-filled. Sorted by date.
pub fn compute_overload_series(
  workouts: &[WorkoutRecord],
  exercise: &ExerciseRef,
  lookback_weeks: u32,
  now: DateTime<Utc>,
) -> Vec<OverloadPoint> {
  let cutoff = Duration::try_weeks(i64::from(lookback_weeks))
    .and_then(|window| now.checked_sub_signed(window))
    .unwrap_or(DateTime::<Utc>::MIN_UTC);
  let mut by_day: BTreeMap<NaiveDate, OverloadPoint> = BTreeMap::new();

  for workout in workouts.iter().filter(|w| w.date >= cutoff) {
    let Some(entry) = workout.exercises.iter().find(|e| exercise.matches(e)) else {
      continue;
    };

    let day = day_of(workout.date);
    for (weight, reps) in entry.completed_sets().filter_map(|s| s.loaded()) {
      let point = by_day.entry(day).or_insert_with(|| OverloadPoint::empty(day));
      point.max_weight = point.max_weight.max(weight);
      point.max_reps = point.max_reps.max(reps);
      point.max_volume = point.max_volume.max(weight * reps as f64);
    }
  }

  by_day.into_values().collect()
}
