use sqlx::PgPool;
use storage::{
    dto::scoring::{
        CompetitorEntry, FinalScoreInfo, MatSchedule, ScoringSheetResponse, SubmitFinalScoreRequest,
        SubmitJudgeScoreRequest,
    },
    error::StorageError,
    models::{FinalScore, JudgeScore, Tournament, TournamentEvent},
    repository::registration::RegistrationRepository,
    repository::scoring::ScoringRepository,
    repository::tournament::TournamentRepository,
    repository::tournament_event::TournamentEventRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::middleware::auth::AuthUser;

pub async fn list_judging_tournaments(pool: &PgPool) -> WebResult<Vec<Tournament>> {
    let repo = TournamentRepository::new(pool);
    Ok(repo.list_active().await?)
}

pub async fn list_scheduled_events(
    pool: &PgPool,
    tournament_id: Uuid,
) -> WebResult<Vec<MatSchedule>> {
    let tournaments = TournamentRepository::new(pool);
    tournaments.find_by_id(tournament_id).await?;

    let repo = ScoringRepository::new(pool);
    let entries = repo.list_scheduled_events(tournament_id).await?;

    Ok(MatSchedule::group(entries))
}

/// The event must actually belong to the tournament in the path. A mismatch
/// is treated as a forbidden access, not a lookup miss.
async fn event_in_tournament(
    pool: &PgPool,
    tournament_id: Uuid,
    tournament_event_id: Uuid,
) -> WebResult<TournamentEvent> {
    let repo = TournamentEventRepository::new(pool);

    let tournament_event = repo.find_by_id(tournament_event_id).await?;
    if tournament_event.tournament_id != tournament_id {
        return Err(WebError::Forbidden);
    }

    Ok(tournament_event)
}

pub async fn list_competitors(
    pool: &PgPool,
    tournament_id: Uuid,
    tournament_event_id: Uuid,
) -> WebResult<Vec<CompetitorEntry>> {
    event_in_tournament(pool, tournament_id, tournament_event_id).await?;

    let repo = ScoringRepository::new(pool);
    Ok(repo.list_competitors(tournament_event_id).await?)
}

/// A competitor is scoreable once staff have scheduled them, which creates
/// their final-score record. A missing record means the competitor is not
/// admitted to judging yet.
async fn final_score_for(
    pool: &PgPool,
    registration_id: Uuid,
) -> WebResult<FinalScore> {
    let repo = ScoringRepository::new(pool);

    match repo.find_final_score(registration_id).await {
        Ok(final_score) => Ok(final_score),
        Err(StorageError::NotFound) => Err(WebError::Forbidden),
        Err(e) => Err(e.into()),
    }
}

pub async fn scoring_sheet(
    pool: &PgPool,
    user: &AuthUser,
    tournament_id: Uuid,
    tournament_event_id: Uuid,
    performance_order: i32,
) -> WebResult<ScoringSheetResponse> {
    let tournament_event = event_in_tournament(pool, tournament_id, tournament_event_id).await?;

    let registrations = RegistrationRepository::new(pool);
    let registration = registrations
        .find_by_event_and_order(tournament_event_id, performance_order)
        .await?;

    let final_score = final_score_for(pool, registration.registration_id).await?;

    let repo = ScoringRepository::new(pool);
    let competitor = repo
        .find_competitor(tournament_event_id, performance_order)
        .await?;

    let is_head_judge = tournament_event.head_judge_id == Some(user.profile_id);

    let own_score = repo
        .find_own_score(final_score.final_score_id, user.profile_id)
        .await?;

    let (other_scores, final_score_info) = if is_head_judge {
        let others = repo
            .list_other_scores(final_score.final_score_id, user.profile_id)
            .await?;
        let info = FinalScoreInfo {
            score: final_score.score,
            rank: final_score.rank,
        };
        (Some(others), Some(info))
    } else {
        (None, None)
    };

    let previous_competitor_order = repo
        .previous_competitor_order(tournament_event_id, performance_order)
        .await?;
    let next_competitor_order = repo
        .next_competitor_order(tournament_event_id, performance_order)
        .await?;

    let te_repo = TournamentEventRepository::new(pool);
    let (previous_tournament_event_id, next_tournament_event_id) =
        match tournament_event.event_order {
            Some(event_order) => (
                te_repo.previous_in_tournament(tournament_id, event_order).await?,
                te_repo.next_in_tournament(tournament_id, event_order).await?,
            ),
            None => (None, None),
        };

    Ok(ScoringSheetResponse {
        tournament_event_id,
        competitor,
        is_head_judge,
        own_score,
        other_scores,
        final_score: final_score_info,
        previous_competitor_order,
        next_competitor_order,
        previous_tournament_event_id,
        next_tournament_event_id,
    })
}

pub async fn submit_judge_score(
    pool: &PgPool,
    user: &AuthUser,
    tournament_id: Uuid,
    tournament_event_id: Uuid,
    performance_order: i32,
    req: &SubmitJudgeScoreRequest,
) -> WebResult<JudgeScore> {
    event_in_tournament(pool, tournament_id, tournament_event_id).await?;

    let registrations = RegistrationRepository::new(pool);
    let registration = registrations
        .find_by_event_and_order(tournament_event_id, performance_order)
        .await?;

    let final_score = final_score_for(pool, registration.registration_id).await?;

    let repo = ScoringRepository::new(pool);
    Ok(repo
        .upsert_judge_score(
            final_score.final_score_id,
            user.profile_id,
            req.score,
            req.justification.as_deref(),
        )
        .await?)
}

/// Only the event's head judge records the official result.
pub async fn submit_final_score(
    pool: &PgPool,
    user: &AuthUser,
    tournament_id: Uuid,
    tournament_event_id: Uuid,
    performance_order: i32,
    req: &SubmitFinalScoreRequest,
) -> WebResult<FinalScore> {
    let tournament_event = event_in_tournament(pool, tournament_id, tournament_event_id).await?;

    if tournament_event.head_judge_id != Some(user.profile_id) {
        return Err(WebError::Forbidden);
    }

    let registrations = RegistrationRepository::new(pool);
    let registration = registrations
        .find_by_event_and_order(tournament_event_id, performance_order)
        .await?;

    let final_score = final_score_for(pool, registration.registration_id).await?;

    let repo = ScoringRepository::new(pool);
    Ok(repo
        .set_final_score(
            final_score.final_score_id,
            tournament_event_id,
            req.score,
            req.rank,
        )
        .await?)
}
