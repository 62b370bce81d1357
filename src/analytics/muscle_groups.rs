//! Share of exercise occurrences per muscle group

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::classifier::{classify, MuscleGroup};
use crate::models::WorkoutRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroupStat {
  pub muscle_group: MuscleGroup,
  pub count: usize,
  /// Rounded to the nearest whole percent
  pub percentage: u32,
}

/// Tally every exercise entry (not every set) by its classified muscle group.
///
/// Ordered by count descending, then by group. Empty input gives an empty list.
pub fn compute_muscle_group_distribution(workouts: &[WorkoutRecord]) -> Vec<MuscleGroupStat> {
  let counts = workouts
    .iter()
    .flat_map(|w| w.exercises.iter())
    .fold(HashMap::<MuscleGroup, usize>::new(), |mut acc, exercise| {
      *acc.entry(classify(&exercise.name)).or_insert(0) += 1;
      acc
    });

  let total: usize = counts.values().sum();
  if total == 0 {
    return Vec::new();
  }

  let mut stats: Vec<MuscleGroupStat> = counts
    .into_iter()
    .map(|(muscle_group, count)| MuscleGroupStat {
      muscle_group,
      count,
      percentage: ((count as f64 / total as f64) * 100.0).round() as u32,
    })
    .collect();

  stats.sort_by(|a, b| b.count.cmp(&a.count).then(a.muscle_group.cmp(&b.muscle_group)));
  stats
}
