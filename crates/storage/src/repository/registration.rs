use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::registration::{CreateRegistrantRequest, MyRegistrationEntry};
use crate::error::{Result, StorageError};
use crate::models::{Registrant, Registration};

const REGISTRANT_COLUMNS: &str = "registrant_id, tournament_id, is_group, group_name, \
     school_or_club, is_kungfu_team_competitor, created_at";

const REGISTRATION_COLUMNS: &str = "registration_id, tournament_event_id, registrant_id, \
     performance_order, notes, registered_at, is_paid, is_withdrawn, is_checked_in, \
     is_disqualified, is_completed";

/// Repository for registrants and their event registrations.
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a registrant with its member list in one transaction.
    pub async fn create_registrant(
        &self,
        req: &CreateRegistrantRequest,
        member_profile_ids: &[Uuid],
    ) -> Result<Registrant> {
        let mut tx = self.pool.begin().await?;

        let registrant = sqlx::query_as::<_, Registrant>(&format!(
            r#"
            INSERT INTO registrants (
                tournament_id, is_group, group_name, school_or_club,
                is_kungfu_team_competitor
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {REGISTRANT_COLUMNS}
            "#
        ))
        .bind(req.tournament_id)
        .bind(req.is_group)
        .bind(&req.group_name)
        .bind(&req.school_or_club)
        .bind(req.is_kungfu_team_competitor)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This group name already exists"))?;

        for profile_id in member_profile_ids {
            sqlx::query(
                r#"
                INSERT INTO registrant_members (registrant_id, profile_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(registrant.registrant_id)
            .bind(profile_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(registrant)
    }

    pub async fn find_registrant(&self, id: Uuid) -> Result<Registrant> {
        let registrant = sqlx::query_as::<_, Registrant>(&format!(
            "SELECT {REGISTRANT_COLUMNS} FROM registrants WHERE registrant_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registrant)
    }

    pub async fn registrant_member_ids(&self, id: Uuid) -> Result<Vec<Uuid>> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            "SELECT profile_id FROM registrant_members WHERE registrant_id = $1",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn is_registrant_member(&self, registrant_id: Uuid, profile_id: Uuid) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM registrant_members
                WHERE registrant_id = $1 AND profile_id = $2
            )
            "#,
        )
        .bind(registrant_id)
        .bind(profile_id)
        .fetch_one(self.pool)
        .await?;

        Ok(exists.0)
    }

    pub async fn create_registration(
        &self,
        registrant_id: Uuid,
        tournament_event_id: Uuid,
        notes: Option<&str>,
    ) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            INSERT INTO registrations (tournament_event_id, registrant_id, notes, is_paid)
            VALUES ($1, $2, $3, FALSE)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(tournament_event_id)
        .bind(registrant_id)
        .bind(notes)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique("This registrant is already registered for this event")
        })?;

        Ok(registration)
    }

    pub async fn find_registration(&self, id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE registration_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    pub async fn find_by_event_and_order(
        &self,
        tournament_event_id: Uuid,
        performance_order: i32,
    ) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            SELECT {REGISTRATION_COLUMNS}
            FROM registrations
            WHERE tournament_event_id = $1 AND performance_order = $2
            "#
        ))
        .bind(tournament_event_id)
        .bind(performance_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// Registrations counting against an event's capacity.
    pub async fn count_live_for_event(&self, tournament_event_id: Uuid) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM registrations
            WHERE tournament_event_id = $1
              AND NOT is_withdrawn
              AND NOT is_disqualified
            "#,
        )
        .bind(tournament_event_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count.0)
    }

    /// Every registration whose registrant includes the given profile.
    pub async fn list_for_profile(&self, profile_id: Uuid) -> Result<Vec<MyRegistrationEntry>> {
        let entries = sqlx::query_as::<_, MyRegistrationEntry>(
            r#"
            SELECT r.registration_id, t.tournament_id, t.name AS tournament_name,
                   te.tournament_event_id, e.english_name, e.chinese_name,
                   te.mat_or_location, r.performance_order, r.registered_at,
                   r.is_paid, r.is_withdrawn, r.is_checked_in
            FROM registrations r
            JOIN registrants reg ON reg.registrant_id = r.registrant_id
            JOIN registrant_members rm ON rm.registrant_id = reg.registrant_id
            JOIN tournament_events te ON te.tournament_event_id = r.tournament_event_id
            JOIN events e ON e.event_id = te.event_id
            JOIN tournaments t ON t.tournament_id = te.tournament_id
            WHERE rm.profile_id = $1
            ORDER BY t.start_at, te.mat_or_location, r.performance_order NULLS LAST
            "#,
        )
        .bind(profile_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn list_for_event(&self, tournament_event_id: Uuid) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            r#"
            SELECT {REGISTRATION_COLUMNS}
            FROM registrations
            WHERE tournament_event_id = $1
            ORDER BY performance_order NULLS LAST, registered_at
            "#
        ))
        .bind(tournament_event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    /// Flip one of the status flags. `flag` is a compile-time column name, not
    /// caller input.
    async fn set_flag(&self, id: Uuid, flag: &'static str, value: bool) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            UPDATE registrations
            SET {flag} = $2
            WHERE registration_id = $1
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(value)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    pub async fn withdraw(&self, id: Uuid) -> Result<Registration> {
        self.set_flag(id, "is_withdrawn", true).await
    }

    pub async fn set_paid(&self, id: Uuid, value: bool) -> Result<Registration> {
        self.set_flag(id, "is_paid", value).await
    }

    pub async fn set_checked_in(&self, id: Uuid, value: bool) -> Result<Registration> {
        self.set_flag(id, "is_checked_in", value).await
    }

    pub async fn set_disqualified(&self, id: Uuid, value: bool) -> Result<Registration> {
        self.set_flag(id, "is_disqualified", value).await
    }

    pub async fn set_completed(&self, id: Uuid, value: bool) -> Result<Registration> {
        self.set_flag(id, "is_completed", value).await
    }

    /// Assign the running order and create the empty final-score record in
    /// one transaction. Scheduling twice just moves the competitor.
    pub async fn schedule(&self, id: Uuid, performance_order: i32) -> Result<Registration> {
        let mut tx = self.pool.begin().await?;

        let registration = sqlx::query_as::<_, Registration>(&format!(
            r#"
            UPDATE registrations
            SET performance_order = $2
            WHERE registration_id = $1
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(performance_order)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This order already exists"))?
        .ok_or(StorageError::NotFound)?;

        sqlx::query(
            r#"
            INSERT INTO final_scores (registration_id)
            VALUES ($1)
            ON CONFLICT (registration_id) DO NOTHING
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(registration)
    }
}
