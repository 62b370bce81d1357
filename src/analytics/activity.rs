//! Rolling-window activity counts and the combined workout stats card

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::streaks::compute_streaks;
use crate::models::WorkoutRecord;

const WEEK_WINDOW_DAYS: i64 = 7;
const MONTH_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivitySummary {
  pub total_workouts: usize,
  /// Workouts in the trailing 7 days (rolling, not calendar week)
  pub this_week: usize,
  /// Workouts in the trailing 30 days
  pub this_month: usize,
  pub last_workout: Option<DateTime<Utc>>,
  /// Rounded to one decimal place
  pub average_workouts_per_week: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutStats {
  pub total_workouts: usize,
  pub this_week: usize,
  pub this_month: usize,
  pub last_workout: Option<DateTime<Utc>>,
  pub average_workouts_per_week: f64,
  pub longest_streak: u32,
  pub current_streak: u32,
}

pub fn compute_activity_summary(workouts: &[WorkoutRecord], now: DateTime<Utc>) -> ActivitySummary {
  let (Some(first), Some(last)) = (
    workouts.iter().map(|w| w.date).min(),
    workouts.iter().map(|w| w.date).max(),
  ) else {
    return ActivitySummary::default();
  };

  let week_start = window_start(now, WEEK_WINDOW_DAYS);
  let month_start = window_start(now, MONTH_WINDOW_DAYS);
  let total_workouts = workouts.len();

  ActivitySummary {
    total_workouts,
    this_week: workouts.iter().filter(|w| w.date >= week_start).count(),
    this_month: workouts.iter().filter(|w| w.date >= month_start).count(),
    last_workout: Some(last),
    average_workouts_per_week: round_one_decimal(
      total_workouts as f64 / weeks_since(first, now) as f64,
    ),
  }
}

fn window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
  now.checked_sub_signed(Duration::days(days)).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Combine activity counts and streaks into the single stats card
pub fn compute_workout_stats(workouts: &[WorkoutRecord], now: DateTime<Utc>) -> WorkoutStats {
  let activity = compute_activity_summary(workouts, now);
  let streaks = compute_streaks(workouts, now);

  WorkoutStats {
    total_workouts: activity.total_workouts,
    this_week: activity.this_week,
    this_month: activity.this_month,
    last_workout: activity.last_workout,
    average_workouts_per_week: activity.average_workouts_per_week,
    longest_streak: streaks.longest_streak,
    current_streak: streaks.current_streak,
  }
}

/// Whole weeks (rounded up) from `first` to `now`, never less than one
fn weeks_since(first: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
  let week_ms = Duration::days(7).num_milliseconds() as f64;
  let elapsed_ms = (now - first).num_milliseconds() as f64;
  ((elapsed_ms / week_ms).ceil() as i64).max(1)
}

fn round_one_decimal(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::test_utils::{fixed_now, mock_workout_at};

  #[test]
  fn test_empty_summary_is_zeroed() {
    let summary = compute_activity_summary(&[], fixed_now());

    assert_eq!(summary.total_workouts, 0);
    assert_eq!(summary.this_week, 0);
    assert_eq!(summary.this_month, 0);
    assert_eq!(summary.last_workout, None);
    assert_eq!(summary.average_workouts_per_week, 0.0);
  }

  #[test]
  fn test_rolling_windows() {
    // Arrange: 2 in the last week, 1 more within 30 days, 1 older
    let now = fixed_now();
    let workouts = vec![
      mock_workout_at(now - Duration::days(1), vec![]),
      mock_workout_at(now - Duration::days(6), vec![]),
      mock_workout_at(now - Duration::days(20), vec![]),
      mock_workout_at(now - Duration::days(45), vec![]),
    ];

    // Act
    let summary = compute_activity_summary(&workouts, now);

    // Assert
    assert_eq!(summary.total_workouts, 4);
    assert_eq!(summary.this_week, 2);
    assert_eq!(summary.this_month, 3);
    assert_eq!(summary.last_workout, Some(now - Duration::days(1)));
  }

  #[test]
  fn test_window_edge_is_inclusive() {
    let now = fixed_now();
    let workouts = vec![mock_workout_at(now - Duration::days(7), vec![])];

    let summary = compute_activity_summary(&workouts, now);

    assert_eq!(summary.this_week, 1);
  }

  #[test]
  fn test_windows_near_earliest_date_count_everything() {
    let now = DateTime::<Utc>::MIN_UTC + Duration::days(2);
    let workouts = vec![
      mock_workout_at(DateTime::<Utc>::MIN_UTC, vec![]),
      mock_workout_at(now, vec![]),
    ];

    let summary = compute_activity_summary(&workouts, now);

    assert_eq!(summary.this_week, 2);
    assert_eq!(summary.this_month, 2);
  }

  #[test]
  fn test_average_per_week_rounds_up_weeks() {
    // 45 days since first workout -> ceil(6.43) = 7 weeks; 4 / 7 = 0.571 -> 0.6
    let now = fixed_now();
    let workouts = vec![
      mock_workout_at(now - Duration::days(1), vec![]),
      mock_workout_at(now - Duration::days(6), vec![]),
      mock_workout_at(now - Duration::days(20), vec![]),
      mock_workout_at(now - Duration::days(45), vec![]),
    ];

    let summary = compute_activity_summary(&workouts, now);

    assert_approx_eq!(summary.average_workouts_per_week, 0.6, 1e-9);
  }

  #[test]
  fn test_average_per_week_has_one_week_floor() {
    // Three workouts today: elapsed is under a week, divide by 1
    let now = fixed_now();
    let workouts = vec![
      mock_workout_at(now - Duration::hours(2), vec![]),
      mock_workout_at(now - Duration::hours(1), vec![]),
      mock_workout_at(now, vec![]),
    ];

    let summary = compute_activity_summary(&workouts, now);

    assert_approx_eq!(summary.average_workouts_per_week, 3.0, 1e-9);
  }

  #[test]
  fn test_workout_stats_merges_streaks() {
    let now = fixed_now();
    let workouts = vec![
      mock_workout_at(now, vec![]),
      mock_workout_at(now - Duration::days(1), vec![]),
      mock_workout_at(now - Duration::days(10), vec![]),
    ];

    let stats = compute_workout_stats(&workouts, now);

    assert_eq!(stats.total_workouts, 3);
    assert_eq!(stats.this_week, 2);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.last_workout, Some(now));
  }
}
