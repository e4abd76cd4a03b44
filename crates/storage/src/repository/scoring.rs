use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::scoring::{CompetitorEntry, JudgeScoreEntry, ScheduledEventEntry};
use crate::error::{Result, StorageError};
use crate::models::{FinalScore, JudgeScore};

// A competitor's display name is the group name for groups, otherwise the
// first member's full name.
const COMPETITOR_SELECT: &str = r#"
    SELECT r.registration_id, r.performance_order,
           COALESCE(reg.group_name, m.first_name || ' ' || m.last_name) AS registrant_name,
           reg.school_or_club, r.is_checked_in, r.is_disqualified, r.is_completed,
           fs.score AS final_score, fs.rank AS final_rank
    FROM registrations r
    JOIN registrants reg ON reg.registrant_id = r.registrant_id
    JOIN final_scores fs ON fs.registration_id = r.registration_id
    LEFT JOIN LATERAL (
        SELECT p.first_name, p.last_name
        FROM registrant_members rm
        JOIN profiles p ON p.profile_id = rm.profile_id
        WHERE rm.registrant_id = reg.registrant_id
        ORDER BY p.last_name, p.first_name
        LIMIT 1
    ) m ON TRUE
"#;

/// Repository for the judging workflow: dashboards, judge scores, and the
/// head judge's final results.
pub struct ScoringRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoringRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Ordered events of a tournament for the judging dashboard. Events
    /// without a schedule slot are not judged and are left out.
    pub async fn list_scheduled_events(&self, tournament_id: Uuid) -> Result<Vec<ScheduledEventEntry>> {
        let entries = sqlx::query_as::<_, ScheduledEventEntry>(
            r#"
            SELECT te.tournament_event_id, te.event_order, te.mat_or_location,
                   e.english_name, e.chinese_name, e.skill_level, e.sex
            FROM tournament_events te
            JOIN events e ON e.event_id = te.event_id
            WHERE te.tournament_id = $1 AND te.event_order IS NOT NULL
            ORDER BY te.event_order
            "#,
        )
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Scoreable competitors of an event: a final-score record exists and a
    /// running order has been assigned.
    pub async fn list_competitors(&self, tournament_event_id: Uuid) -> Result<Vec<CompetitorEntry>> {
        let competitors = sqlx::query_as::<_, CompetitorEntry>(&format!(
            r#"
            {COMPETITOR_SELECT}
            WHERE r.tournament_event_id = $1 AND r.performance_order IS NOT NULL
            ORDER BY r.performance_order
            "#
        ))
        .bind(tournament_event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(competitors)
    }

    pub async fn find_competitor(
        &self,
        tournament_event_id: Uuid,
        performance_order: i32,
    ) -> Result<CompetitorEntry> {
        let competitor = sqlx::query_as::<_, CompetitorEntry>(&format!(
            r#"
            {COMPETITOR_SELECT}
            WHERE r.tournament_event_id = $1 AND r.performance_order = $2
            "#
        ))
        .bind(tournament_event_id)
        .bind(performance_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competitor)
    }

    /// Next competitor's order after the given one, if any.
    pub async fn next_competitor_order(
        &self,
        tournament_event_id: Uuid,
        performance_order: i32,
    ) -> Result<Option<i32>> {
        let next: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT performance_order
            FROM registrations
            WHERE tournament_event_id = $1 AND performance_order > $2
            ORDER BY performance_order
            LIMIT 1
            "#,
        )
        .bind(tournament_event_id)
        .bind(performance_order)
        .fetch_optional(self.pool)
        .await?;

        Ok(next.map(|(order,)| order))
    }

    /// Previous competitor's order before the given one, if any.
    pub async fn previous_competitor_order(
        &self,
        tournament_event_id: Uuid,
        performance_order: i32,
    ) -> Result<Option<i32>> {
        let previous: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT performance_order
            FROM registrations
            WHERE tournament_event_id = $1 AND performance_order < $2
            ORDER BY performance_order DESC
            LIMIT 1
            "#,
        )
        .bind(tournament_event_id)
        .bind(performance_order)
        .fetch_optional(self.pool)
        .await?;

        Ok(previous.map(|(order,)| order))
    }

    pub async fn find_final_score(&self, registration_id: Uuid) -> Result<FinalScore> {
        let final_score = sqlx::query_as::<_, FinalScore>(
            r#"
            SELECT final_score_id, registration_id, score, rank
            FROM final_scores
            WHERE registration_id = $1
            "#,
        )
        .bind(registration_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(final_score)
    }

    /// The calling judge's own score for a competitor, if submitted.
    pub async fn find_own_score(
        &self,
        final_score_id: Uuid,
        judge_id: Uuid,
    ) -> Result<Option<JudgeScoreEntry>> {
        let entry = sqlx::query_as::<_, JudgeScoreEntry>(
            r#"
            SELECT js.judge_id, p.first_name || ' ' || p.last_name AS judge_name,
                   js.score, js.justification
            FROM judge_scores js
            JOIN profiles p ON p.profile_id = js.judge_id
            WHERE js.final_score_id = $1 AND js.judge_id = $2
            "#,
        )
        .bind(final_score_id)
        .bind(judge_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(entry)
    }

    /// Every other judge's score for a competitor. Head judge only; the
    /// caller enforces that.
    pub async fn list_other_scores(
        &self,
        final_score_id: Uuid,
        judge_id: Uuid,
    ) -> Result<Vec<JudgeScoreEntry>> {
        let entries = sqlx::query_as::<_, JudgeScoreEntry>(
            r#"
            SELECT js.judge_id, p.first_name || ' ' || p.last_name AS judge_name,
                   js.score, js.justification
            FROM judge_scores js
            JOIN profiles p ON p.profile_id = js.judge_id
            WHERE js.final_score_id = $1 AND js.judge_id <> $2
            ORDER BY p.last_name, p.first_name
            "#,
        )
        .bind(final_score_id)
        .bind(judge_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Insert or update a judge's score. The unique (final_score, judge)
    /// constraint makes two judges submitting concurrently independent row
    /// upserts.
    pub async fn upsert_judge_score(
        &self,
        final_score_id: Uuid,
        judge_id: Uuid,
        score: f64,
        justification: Option<&str>,
    ) -> Result<JudgeScore> {
        let judge_score = sqlx::query_as::<_, JudgeScore>(
            r#"
            INSERT INTO judge_scores (final_score_id, judge_id, score, justification)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (final_score_id, judge_id)
            DO UPDATE SET score = EXCLUDED.score, justification = EXCLUDED.justification
            RETURNING judge_score_id, final_score_id, judge_id, score, justification
            "#,
        )
        .bind(final_score_id)
        .bind(judge_id)
        .bind(score)
        .bind(justification)
        .fetch_one(self.pool)
        .await?;

        Ok(judge_score)
    }

    /// Record the head judge's official score and rank. A rank already held
    /// by another competitor of the same event is a conflict.
    pub async fn set_final_score(
        &self,
        final_score_id: Uuid,
        tournament_event_id: Uuid,
        score: f64,
        rank: i32,
    ) -> Result<FinalScore> {
        let taken: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM final_scores fs
                JOIN registrations r ON r.registration_id = fs.registration_id
                WHERE r.tournament_event_id = $1
                  AND fs.rank = $2
                  AND fs.final_score_id <> $3
            )
            "#,
        )
        .bind(tournament_event_id)
        .bind(rank)
        .bind(final_score_id)
        .fetch_one(self.pool)
        .await?;

        if taken.0 {
            return Err(StorageError::ConstraintViolation(
                "This rank is already assigned in this event".to_string(),
            ));
        }

        let final_score = sqlx::query_as::<_, FinalScore>(
            r#"
            UPDATE final_scores
            SET score = $2, rank = $3
            WHERE final_score_id = $1
            RETURNING final_score_id, registration_id, score, rank
            "#,
        )
        .bind(final_score_id)
        .bind(score)
        .bind(rank)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(final_score)
    }
}
