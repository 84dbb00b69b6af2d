//! Repository for the `workouts` table and its owned `workout_entries`.

use sqlx::PgPool;
use workout_core::types::DbId;
use workout_core::workout::{NewWorkout, Workout, WorkoutEntry};

use crate::error::StoreError;
use crate::models::workout::{WorkoutEntryRow, WorkoutRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, duration_minutes, calories_burned, created_at, updated_at";

/// Entry columns decoded into [`WorkoutEntryRow`].
const ENTRY_COLUMNS: &str = "exercise_name, sets, reps, duration_seconds, weight, notes";

/// Provides CRUD operations for workouts.
///
/// Every write that touches entries runs in a single transaction, so a
/// workout is never visible with a partially written entry list.
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Insert a new workout and its entries, returning the stored aggregate.
    pub async fn create(pool: &PgPool, input: &NewWorkout) -> Result<Workout, StoreError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO workouts (title, description, duration_minutes, calories_burned)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, WorkoutRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration_minutes)
            .bind(input.calories_burned)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_entries(&mut tx, row.id, &input.entries).await?;

        tx.commit().await?;
        tracing::debug!(workout_id = row.id, "Inserted workout row and entries");
        Ok(row.into_workout(input.entries.clone()))
    }

    /// Find a workout by ID, with entries in persisted order.
    ///
    /// Returns `None` if no row matches. Both reads share one snapshot so a
    /// concurrent update cannot produce a mix of old and new entries.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workout>, StoreError> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM workouts WHERE id = $1");
        let row = sqlx::query_as::<_, WorkoutRow>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let workout = match row {
            Some(row) => {
                let entries = Self::find_entries(&mut tx, row.id).await?;
                Some(row.into_workout(entries))
            }
            None => None,
        };

        tx.commit().await?;
        Ok(workout)
    }

    /// Overwrite a workout with a complete replacement value.
    ///
    /// Scalar fields are overwritten and the entry list is deleted and
    /// re-inserted inside one transaction. Returns the stored aggregate with
    /// the refreshed `updated_at`, or [`StoreError::NotFound`] if the id does
    /// not exist.
    pub async fn update(pool: &PgPool, workout: &Workout) -> Result<Workout, StoreError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE workouts SET
                title = $2,
                description = $3,
                duration_minutes = $4,
                calories_burned = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, WorkoutRow>(&query)
            .bind(workout.id)
            .bind(&workout.title)
            .bind(&workout.description)
            .bind(workout.duration_minutes)
            .bind(workout.calories_burned)
            .fetch_optional(&mut *tx)
            .await?;

        // Dropping `tx` here rolls back.
        let Some(row) = row else {
            return Err(StoreError::NotFound { id: workout.id });
        };

        sqlx::query("DELETE FROM workout_entries WHERE workout_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;
        Self::insert_entries(&mut tx, row.id, &workout.entries).await?;

        tx.commit().await?;
        Ok(row.into_workout(workout.entries.clone()))
    }

    /// Permanently delete a workout. Entries go with it via `ON DELETE CASCADE`
    /// in the same statement.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert entries within an existing transaction, numbering them by position.
    async fn insert_entries(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        workout_id: DbId,
        entries: &[WorkoutEntry],
    ) -> Result<(), sqlx::Error> {
        for (order_index, entry) in entries.iter().enumerate() {
            sqlx::query(
                "INSERT INTO workout_entries
                    (workout_id, exercise_name, sets, reps, duration_seconds,
                     weight, notes, order_index)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(workout_id)
            .bind(&entry.exercise_name)
            .bind(entry.sets)
            .bind(entry.reps)
            .bind(entry.duration_seconds)
            .bind(entry.weight)
            .bind(&entry.notes)
            .bind(order_index as i32)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    /// Load the entries of one workout in persisted order.
    async fn find_entries(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        workout_id: DbId,
    ) -> Result<Vec<WorkoutEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM workout_entries
             WHERE workout_id = $1
             ORDER BY order_index ASC"
        );
        let rows = sqlx::query_as::<_, WorkoutEntryRow>(&query)
            .bind(workout_id)
            .fetch_all(&mut **tx)
            .await?;
        Ok(rows.into_iter().map(WorkoutEntry::from).collect())
    }
}
