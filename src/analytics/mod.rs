//! Deterministic analytics over a user's workout log
//!
//! Every function here is a pure transform of `&[WorkoutRecord]`: no I/O, no
//! clock reads, no state kept between calls. Time-dependent aggregators take
//! `now` explicitly so history can be replayed.
//!
//! Calendar days are taken in UTC.

pub mod activity;
pub mod classifier;
pub mod muscle_groups;
pub mod overload;
pub mod records;
pub mod streaks;
pub mod weekly_volume;

use chrono::{DateTime, NaiveDate, Utc};

pub use activity::{compute_activity_summary, compute_workout_stats, ActivitySummary, WorkoutStats};
pub use classifier::{classify, MuscleGroup};
pub use muscle_groups::{compute_muscle_group_distribution, MuscleGroupStat};
pub use overload::{compute_overload_series, ExerciseRef, OverloadPoint};
pub use records::{compute_personal_records, PersonalRecord};
pub use streaks::{compute_streaks, StreakSummary};
pub use weekly_volume::{compute_weekly_volume, WeeklyVolume};

/// Calendar day of an instant, time of day discarded
pub(crate) fn day_of(date: DateTime<Utc>) -> NaiveDate {
  date.date_naive()
}
