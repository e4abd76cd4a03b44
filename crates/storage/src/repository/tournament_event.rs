use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament_event::{
    CreateTournamentEventRequest, JudgeInfo, TournamentEventRow, UpdateTournamentEventRequest,
};
use crate::error::{Result, StorageError};
use crate::models::TournamentEvent;

const TE_COLUMNS: &str = "tournament_event_id, tournament_id, event_id, head_judge_id, \
     event_order, mat_or_location, max_participants, registration_open, is_active, is_locked";

const TE_JOINED_COLUMNS: &str = "te.tournament_event_id, te.tournament_id, te.event_id, \
     e.english_name, e.chinese_name, e.skill_level, e.sex, te.head_judge_id, te.event_order, \
     te.mat_or_location, te.max_participants, te.registration_open, te.is_active, te.is_locked";

/// Repository for TournamentEvent database operations
pub struct TournamentEventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentEventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<TournamentEvent> {
        let te = sqlx::query_as::<_, TournamentEvent>(&format!(
            "SELECT {TE_COLUMNS} FROM tournament_events WHERE tournament_event_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(te)
    }

    /// List a tournament's events joined with their category, in schedule order.
    pub async fn list_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<TournamentEventRow>> {
        let rows = sqlx::query_as::<_, TournamentEventRow>(&format!(
            r#"
            SELECT {TE_JOINED_COLUMNS}
            FROM tournament_events te
            JOIN events e ON e.event_id = te.event_id
            WHERE te.tournament_id = $1
            ORDER BY te.mat_or_location, te.event_order NULLS LAST, e.english_name
            "#
        ))
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_row(&self, id: Uuid) -> Result<TournamentEventRow> {
        let row = sqlx::query_as::<_, TournamentEventRow>(&format!(
            r#"
            SELECT {TE_JOINED_COLUMNS}
            FROM tournament_events te
            JOIN events e ON e.event_id = te.event_id
            WHERE te.tournament_event_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(row)
    }

    pub async fn judges_for(&self, id: Uuid) -> Result<Vec<JudgeInfo>> {
        let judges = sqlx::query_as::<_, JudgeInfo>(
            r#"
            SELECT p.profile_id, p.first_name, p.last_name
            FROM tournament_event_judges tej
            JOIN profiles p ON p.profile_id = tej.profile_id
            WHERE tej.tournament_event_id = $1
            ORDER BY p.last_name, p.first_name
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(judges)
    }

    pub async fn create(
        &self,
        tournament_id: Uuid,
        req: &CreateTournamentEventRequest,
    ) -> Result<TournamentEvent> {
        let mut tx = self.pool.begin().await?;

        let te = sqlx::query_as::<_, TournamentEvent>(&format!(
            r#"
            INSERT INTO tournament_events (
                tournament_id, event_id, head_judge_id, event_order,
                mat_or_location, max_participants, registration_open
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TE_COLUMNS}
            "#
        ))
        .bind(tournament_id)
        .bind(req.event_id)
        .bind(req.head_judge_id)
        .bind(req.event_order)
        .bind(&req.mat_or_location)
        .bind(req.max_participants)
        .bind(req.registration_open)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique("This event or order is already scheduled in this tournament")
        })?;

        for judge_id in &req.judge_ids {
            sqlx::query(
                r#"
                INSERT INTO tournament_event_judges (tournament_event_id, profile_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(te.tournament_event_id)
            .bind(judge_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(te)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &TournamentEvent,
        req: &UpdateTournamentEventRequest,
    ) -> Result<TournamentEvent> {
        let mut tx = self.pool.begin().await?;

        let te = sqlx::query_as::<_, TournamentEvent>(&format!(
            r#"
            UPDATE tournament_events
            SET head_judge_id = $2,
                event_order = $3,
                mat_or_location = $4,
                max_participants = $5,
                registration_open = $6,
                is_active = $7,
                is_locked = $8
            WHERE tournament_event_id = $1
            RETURNING {TE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.head_judge_id.unwrap_or(existing.head_judge_id))
        .bind(req.event_order.unwrap_or(existing.event_order))
        .bind(
            req.mat_or_location
                .as_ref()
                .unwrap_or(&existing.mat_or_location),
        )
        .bind(req.max_participants.unwrap_or(existing.max_participants))
        .bind(req.registration_open.unwrap_or(existing.registration_open))
        .bind(req.is_active.unwrap_or(existing.is_active))
        .bind(req.is_locked.unwrap_or(existing.is_locked))
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique("This event or order is already scheduled in this tournament")
        })?
        .ok_or(StorageError::NotFound)?;

        if let Some(judge_ids) = &req.judge_ids {
            sqlx::query("DELETE FROM tournament_event_judges WHERE tournament_event_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for judge_id in judge_ids {
                sqlx::query(
                    r#"
                    INSERT INTO tournament_event_judges (tournament_event_id, profile_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(id)
                .bind(judge_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(te)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tournament_events WHERE tournament_event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Next ordered event in the same tournament, if any.
    pub async fn next_in_tournament(
        &self,
        tournament_id: Uuid,
        event_order: i32,
    ) -> Result<Option<Uuid>> {
        let next: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT tournament_event_id
            FROM tournament_events
            WHERE tournament_id = $1 AND event_order > $2
            ORDER BY event_order
            LIMIT 1
            "#,
        )
        .bind(tournament_id)
        .bind(event_order)
        .fetch_optional(self.pool)
        .await?;

        Ok(next.map(|(id,)| id))
    }

    /// Previous ordered event in the same tournament, if any.
    pub async fn previous_in_tournament(
        &self,
        tournament_id: Uuid,
        event_order: i32,
    ) -> Result<Option<Uuid>> {
        let previous: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT tournament_event_id
            FROM tournament_events
            WHERE tournament_id = $1 AND event_order < $2
            ORDER BY event_order DESC
            LIMIT 1
            "#,
        )
        .bind(tournament_id)
        .bind(event_order)
        .fetch_optional(self.pool)
        .await?;

        Ok(previous.map(|(id,)| id))
    }
}
