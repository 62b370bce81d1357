//! Per-calendar-week training volume (weeks start on Sunday)

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::day_of;
use crate::models::WorkoutRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
  /// Short label for the week's Sunday, e.g. "Jun 9"
  pub week_label: String,
  pub week_start: NaiveDate,
  pub workouts: usize,
  pub exercises: usize,
  /// reps × weight over completed sets, unweighted sets counting 1 per rep
  pub total_volume: f64,
}

impl WeeklyVolume {
  fn empty(week_start: NaiveDate) -> Self {
    Self {
      week_label: week_start.format("%b %-d").to_string(),
      week_start,
      workouts: 0,
      exercises: 0,
      total_volume: 0.0,
    }
  }
}

/// Sunday on or before the given instant's calendar day, clamped to the
/// earliest representable date
pub fn week_start(date: DateTime<Utc>) -> NaiveDate {
  let day = day_of(date);
  day
    .checked_sub_days(Days::new(day.weekday().num_days_from_sunday() as u64))
    .unwrap_or(NaiveDate::MIN)
}

/// Aggregate the trailing `week_count` weeks ending with the week containing `now`.
///
/// Workouts outside those weeks are dropped. Seeding stops at the earliest
/// representable week, so an oversized `week_count` yields fewer entries.
/// Output is oldest week first; callers should key on `week_start`, not position.
pub fn compute_weekly_volume(
  workouts: &[WorkoutRecord],
  now: DateTime<Utc>,
  week_count: u32,
) -> Vec<WeeklyVolume> {
  let mut weeks: BTreeMap<NaiveDate, WeeklyVolume> = (0..i64::from(week_count))
    .map_while(|i| Duration::try_weeks(i).and_then(|back| now.checked_sub_signed(back)))
    .map(week_start)
    .map(|start| (start, WeeklyVolume::empty(start)))
    .collect();

  for workout in workouts {
    if let Some(week) = weeks.get_mut(&week_start(workout.date)) {
      week.workouts += 1;
      week.exercises += workout.exercises.len();
      week.total_volume += workout.completed_sets().map(|s| s.blended_volume()).sum::<f64>();
    }
  }

  weeks.into_values().collect()
}
