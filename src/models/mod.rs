pub mod workout;

pub use workout::{ExerciseEntry, NewWorkout, SetEntry, WorkoutRecord};
