//! Consecutive-day workout streaks

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::day_of;
use crate::models::WorkoutRecord;

/// Upper bound on how far back the current streak walk goes
const CURRENT_STREAK_MAX_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakSummary {
  pub longest_streak: u32,
  pub current_streak: u32,
}

pub fn compute_streaks(workouts: &[WorkoutRecord], now: DateTime<Utc>) -> StreakSummary {
  if workouts.is_empty() {
    return StreakSummary::default();
  }

  let mut days: Vec<NaiveDate> = workouts.iter().map(|w| day_of(w.date)).collect();
  days.sort_unstable_by(|a, b| b.cmp(a));

  StreakSummary {
    longest_streak: longest_streak(&days),
    current_streak: current_streak(&days, day_of(now)),
  }
}

/// `days` must be sorted newest first; duplicates are allowed.
fn longest_streak(days: &[NaiveDate]) -> u32 {
  let mut longest = 0;
  let mut temp = 0;
  let mut prev: Option<NaiveDate> = None;

  for &day in days {
    match prev {
      None => temp = 1,
      Some(p) => match (p - day).num_days() {
        0 => {}
        1 => temp += 1,
        _ => {
          longest = longest.max(temp);
          temp = 1;
        }
      },
    }
    prev = Some(day);
  }

  longest.max(temp)
}

/// Walk back from today until a day without a workout. No workout today
/// means the streak is zero, even if yesterday had one.
fn current_streak(days: &[NaiveDate], today: NaiveDate) -> u32 {
  let trained: HashSet<NaiveDate> = days.iter().copied().collect();
  let mut streak = 0;

  for offset in 0..CURRENT_STREAK_MAX_DAYS {
    match today.checked_sub_signed(Duration::days(offset)) {
      Some(day) if trained.contains(&day) => streak += 1,
      _ => break,
    }
  }

  streak
}
