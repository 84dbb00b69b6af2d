//! Rows from the `workouts` and `workout_entries` tables.

use sqlx::FromRow;
use workout_core::types::{DbId, Timestamp};
use workout_core::workout::{Workout, WorkoutEntry};

/// A row from the `workouts` table, without its entries.
#[derive(Debug, Clone, FromRow)]
pub struct WorkoutRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WorkoutRow {
    /// Attach the entries loaded for this row to build the aggregate.
    pub fn into_workout(self, entries: Vec<WorkoutEntry>) -> Workout {
        Workout {
            id: self.id,
            title: self.title,
            description: self.description,
            duration_minutes: self.duration_minutes,
            calories_burned: self.calories_burned,
            entries,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A row from the `workout_entries` table.
///
/// Rows are selected in `order_index` order; the index itself stays in the
/// database and position in the returned `Vec` carries it instead.
#[derive(Debug, Clone, FromRow)]
pub struct WorkoutEntryRow {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

impl From<WorkoutEntryRow> for WorkoutEntry {
    fn from(row: WorkoutEntryRow) -> Self {
        WorkoutEntry {
            exercise_name: row.exercise_name,
            sets: row.sets,
            reps: row.reps,
            duration_seconds: row.duration_seconds,
            weight: row.weight,
            notes: row.notes,
        }
    }
}
