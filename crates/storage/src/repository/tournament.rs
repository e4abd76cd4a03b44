use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest};
use crate::error::{Result, StorageError};
use crate::models::Tournament;

const TOURNAMENT_COLUMNS: &str = "tournament_id, name, start_at, end_at, location, \
     registration_open, registration_start_at, early_registration_end_at, \
     registration_end_at, is_active, is_locked, created_at";

/// Repository for Tournament database operations
pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tournaments, active ones first, soonest first within each.
    pub async fn list(&self) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments ORDER BY is_active DESC, start_at"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(tournaments)
    }

    /// List tournaments currently marked active.
    pub async fn list_active(&self) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE is_active ORDER BY start_at"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(tournaments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE tournament_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    pub async fn create(&self, req: &CreateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            r#"
            INSERT INTO tournaments (
                name, start_at, end_at, location, registration_open,
                registration_start_at, early_registration_end_at,
                registration_end_at, is_active, is_locked
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {TOURNAMENT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(req.start_at)
        .bind(req.end_at)
        .bind(&req.location)
        .bind(req.registration_open)
        .bind(req.registration_start_at)
        .bind(req.early_registration_end_at)
        .bind(req.registration_end_at)
        .bind(req.is_active)
        .bind(req.is_locked)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This tournament already exists"))?;

        Ok(tournament)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Tournament,
        req: &UpdateTournamentRequest,
    ) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            r#"
            UPDATE tournaments
            SET name = $2,
                start_at = $3,
                end_at = $4,
                location = $5,
                registration_open = $6,
                registration_start_at = $7,
                early_registration_end_at = $8,
                registration_end_at = $9,
                is_active = $10,
                is_locked = $11
            WHERE tournament_id = $1
            RETURNING {TOURNAMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.name.as_ref().unwrap_or(&existing.name))
        .bind(req.start_at.unwrap_or(existing.start_at))
        .bind(req.end_at.unwrap_or(existing.end_at))
        .bind(req.location.as_ref().unwrap_or(&existing.location))
        .bind(req.registration_open.unwrap_or(existing.registration_open))
        .bind(
            req.registration_start_at
                .unwrap_or(existing.registration_start_at),
        )
        .bind(
            req.early_registration_end_at
                .unwrap_or(existing.early_registration_end_at),
        )
        .bind(
            req.registration_end_at
                .unwrap_or(existing.registration_end_at),
        )
        .bind(req.is_active.unwrap_or(existing.is_active))
        .bind(req.is_locked.unwrap_or(existing.is_locked))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This tournament already exists"))?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tournaments WHERE tournament_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
