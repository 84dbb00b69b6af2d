//! Workout aggregate, its input DTOs, and the partial-update resolver.
//!
//! A [`Workout`] owns an ordered list of [`WorkoutEntry`] values. Entries
//! have no identity outside their parent: an update that carries `entries`
//! replaces the whole list.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{DbId, Timestamp};

/// Entity name used in not-found errors.
pub const WORKOUT_ENTITY: &str = "Workout";

/// A stored workout with its entries in persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<WorkoutEntry>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One exercise line of a workout.
///
/// An entry is either rep-based (`reps`) or time-based (`duration_seconds`),
/// never both and never neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_entry_measure"))]
pub struct WorkoutEntry {
    #[validate(length(min = 1, message = "exercise_name must not be empty"))]
    pub exercise_name: String,
    #[validate(range(min = 1, message = "sets must be at least 1"))]
    pub sets: i32,
    #[validate(range(min = 1, message = "reps must be at least 1"))]
    pub reps: Option<i32>,
    #[validate(range(min = 1, message = "duration_seconds must be at least 1"))]
    pub duration_seconds: Option<i32>,
    #[validate(range(min = 0.0, message = "weight must not be negative"))]
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

fn validate_entry_measure(entry: &WorkoutEntry) -> Result<(), ValidationError> {
    if entry.reps.is_some() == entry.duration_seconds.is_some() {
        let mut err = ValidationError::new("reps_or_duration");
        err.message = Some("exactly one of reps or duration_seconds must be set".into());
        return Err(err);
    }
    Ok(())
}

/// DTO for creating a workout.
///
/// Omitted `description`, `duration_minutes`, `calories_burned` and `entries`
/// fall back to their empty / zero values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewWorkout {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "duration_minutes must not be negative"))]
    pub duration_minutes: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "calories_burned must not be negative"))]
    pub calories_burned: i32,
    #[serde(default)]
    #[validate(nested)]
    pub entries: Vec<WorkoutEntry>,
}

/// DTO for a partial update. `None` means "leave unchanged".
///
/// A JSON `null` deserializes to `None` as well; none of these fields is
/// nullable on the stored workout, so `null` can only mean "no change".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkout {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "duration_minutes must not be negative"))]
    pub duration_minutes: Option<i32>,
    #[validate(range(min = 0, message = "calories_burned must not be negative"))]
    pub calories_burned: Option<i32>,
    /// Full replacement of the entry list when present.
    #[validate(nested)]
    pub entries: Option<Vec<WorkoutEntry>>,
}

impl UpdateWorkout {
    /// `true` when no field is present, i.e. the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.duration_minutes.is_none()
            && self.calories_burned.is_none()
            && self.entries.is_none()
    }
}

impl Workout {
    /// Compute the workout that results from applying `update` to `self`.
    ///
    /// Present fields overwrite, including explicit zeros and an empty
    /// `entries` list. `self` is left untouched so a failed store write does
    /// not leave a half-merged value behind.
    pub fn apply_update(&self, update: UpdateWorkout) -> Workout {
        let mut merged = self.clone();
        if let Some(title) = update.title {
            merged.title = title;
        }
        if let Some(description) = update.description {
            merged.description = description;
        }
        if let Some(duration_minutes) = update.duration_minutes {
            merged.duration_minutes = duration_minutes;
        }
        if let Some(calories_burned) = update.calories_burned {
            merged.calories_burned = calories_burned;
        }
        if let Some(entries) = update.entries {
            merged.entries = entries;
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::validation::validate_input;

    fn entry(name: &str, reps: i32) -> WorkoutEntry {
        WorkoutEntry {
            exercise_name: name.to_string(),
            sets: 3,
            reps: Some(reps),
            duration_seconds: None,
            weight: Some(80.0),
            notes: None,
        }
    }

    fn leg_day() -> Workout {
        let now = Utc::now();
        Workout {
            id: 7,
            title: "Leg Day".to_string(),
            description: "Heavy squats".to_string(),
            duration_minutes: 45,
            calories_burned: 400,
            entries: vec![entry("Squat", 5), entry("Lunge", 10)],
            created_at: now,
            updated_at: now,
        }
    }

    // -- Resolver --

    #[test]
    fn empty_update_leaves_workout_unchanged() {
        let existing = leg_day();
        let update = UpdateWorkout::default();
        assert!(update.is_empty());
        assert_eq!(existing.apply_update(update), existing);
    }

    #[test]
    fn explicit_zero_duration_overwrites() {
        let existing = leg_day();
        let merged = existing.apply_update(UpdateWorkout {
            duration_minutes: Some(0),
            ..Default::default()
        });
        assert_eq!(merged.duration_minutes, 0);
        assert_eq!(merged.calories_burned, 400);
    }

    #[test]
    fn empty_entries_replace_existing_entries() {
        let existing = leg_day();
        let merged = existing.apply_update(UpdateWorkout {
            entries: Some(Vec::new()),
            ..Default::default()
        });
        assert!(merged.entries.is_empty());
        assert_eq!(existing.entries.len(), 2);
    }

    #[test]
    fn entries_are_replaced_not_merged() {
        let existing = leg_day();
        let replacement = vec![entry("Deadlift", 3)];
        let merged = existing.apply_update(UpdateWorkout {
            entries: Some(replacement.clone()),
            ..Default::default()
        });
        assert_eq!(merged.entries, replacement);
    }

    #[test]
    fn single_field_update_keeps_other_fields() {
        let existing = leg_day();
        let merged = existing.apply_update(UpdateWorkout {
            duration_minutes: Some(50),
            ..Default::default()
        });
        assert_eq!(merged.title, "Leg Day");
        assert_eq!(merged.duration_minutes, 50);
        assert_eq!(merged.entries, existing.entries);
        assert_eq!(merged.id, existing.id);
    }

    #[test]
    fn empty_description_overwrites() {
        let merged = leg_day().apply_update(UpdateWorkout {
            description: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(merged.description, "");
    }

    // -- Payload decoding --

    #[test]
    fn null_and_missing_fields_decode_as_absent() {
        let update: UpdateWorkout =
            serde_json::from_str(r#"{"title": null, "entries": null}"#).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn explicit_zero_decodes_as_present() {
        let update: UpdateWorkout = serde_json::from_str(r#"{"duration_minutes": 0}"#).unwrap();
        assert_eq!(update.duration_minutes, Some(0));
        assert!(!update.is_empty());
    }

    #[test]
    fn new_workout_defaults_optional_fields() {
        let input: NewWorkout = serde_json::from_str(r#"{"title": "Rest"}"#).unwrap();
        assert_eq!(input.description, "");
        assert_eq!(input.duration_minutes, 0);
        assert!(input.entries.is_empty());
    }

    // -- Validation --

    #[test]
    fn rejects_empty_title() {
        let input = NewWorkout {
            title: String::new(),
            description: String::new(),
            duration_minutes: 10,
            calories_burned: 10,
            entries: Vec::new(),
        };
        assert!(validate_input(&input).is_err());
    }

    #[test]
    fn rejects_negative_calories_in_update() {
        let update = UpdateWorkout {
            calories_burned: Some(-1),
            ..Default::default()
        };
        assert!(validate_input(&update).is_err());
    }

    #[test]
    fn accepts_zero_values() {
        let update = UpdateWorkout {
            duration_minutes: Some(0),
            calories_burned: Some(0),
            entries: Some(Vec::new()),
            ..Default::default()
        };
        assert!(validate_input(&update).is_ok());
    }

    #[test]
    fn entry_requires_exactly_one_measure() {
        let mut both = entry("Plank", 1);
        both.duration_seconds = Some(60);
        assert!(validate_input(&both).is_err());

        let mut neither = entry("Plank", 1);
        neither.reps = None;
        assert!(validate_input(&neither).is_err());

        let mut timed = entry("Plank", 1);
        timed.reps = None;
        timed.duration_seconds = Some(60);
        assert!(validate_input(&timed).is_ok());
    }

    #[test]
    fn nested_entry_errors_fail_the_workout() {
        let mut bad = entry("Row", 8);
        bad.sets = 0;
        let input = NewWorkout {
            title: "Pull".to_string(),
            description: String::new(),
            duration_minutes: 30,
            calories_burned: 200,
            entries: vec![entry("Curl", 12), bad],
        };
        assert!(validate_input(&input).is_err());

        let update = UpdateWorkout {
            entries: Some(vec![WorkoutEntry {
                exercise_name: String::new(),
                ..entry("Row", 8)
            }]),
            ..Default::default()
        };
        assert!(validate_input(&update).is_err());
    }
}
