//! Keyword-based muscle-group classification for free-text exercise names

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MuscleGroup {
  Chest,
  Back,
  Shoulders,
  Biceps,
  Triceps,
  Legs,
  Core,
  Cardio,
  Other,
}

impl MuscleGroup {
  pub fn as_str(&self) -> &'static str {
    match self {
      MuscleGroup::Chest => "Chest",
      MuscleGroup::Back => "Back",
      MuscleGroup::Shoulders => "Shoulders",
      MuscleGroup::Biceps => "Biceps",
      MuscleGroup::Triceps => "Triceps",
      MuscleGroup::Legs => "Legs",
      MuscleGroup::Core => "Core",
      MuscleGroup::Cardio => "Cardio",
      MuscleGroup::Other => "Other",
    }
  }
}

impl std::fmt::Display for MuscleGroup {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Evaluated top to bottom, first match wins.
///
/// Order matters: "bench press" must land on Chest before the Shoulders rule
/// sees "press", and "crunch" must hit Core before Cardio sees "run".
const RULES: &[(&[&str], MuscleGroup)] = &[
  (&["push", "bench", "chest"], MuscleGroup::Chest),
  (&["pull", "row", "back"], MuscleGroup::Back),
  (&["shoulder", "press"], MuscleGroup::Shoulders),
  (&["curl", "bicep"], MuscleGroup::Biceps),
  (&["tricep", "dip"], MuscleGroup::Triceps),
  (&["squat", "leg", "lunge"], MuscleGroup::Legs),
  (&["plank", "crunch", "core"], MuscleGroup::Core),
  (&["run", "cardio", "cycle"], MuscleGroup::Cardio),
];

/// Classify an exercise name. Never fails; unknown names are `Other`.
pub fn classify(exercise_name: &str) -> MuscleGroup {
  let name = exercise_name.to_lowercase();

  RULES
    .iter()
    .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
    .map(|(_, group)| *group)
    .unwrap_or(MuscleGroup::Other)
}
