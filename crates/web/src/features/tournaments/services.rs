use sqlx::PgPool;
use storage::{
    dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest},
    dto::tournament_event::{
        CreateTournamentEventRequest, TournamentEventResponse, UpdateTournamentEventRequest,
    },
    models::{Tournament, TournamentEvent},
    repository::profile::ProfileRepository,
    repository::tournament::TournamentRepository,
    repository::tournament_event::TournamentEventRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn list_tournaments(pool: &PgPool) -> WebResult<Vec<Tournament>> {
    let repo = TournamentRepository::new(pool);
    Ok(repo.list().await?)
}

pub async fn get_tournament(pool: &PgPool, id: Uuid) -> WebResult<Tournament> {
    let repo = TournamentRepository::new(pool);
    Ok(repo.find_by_id(id).await?)
}

pub async fn create_tournament(
    pool: &PgPool,
    req: &CreateTournamentRequest,
) -> WebResult<Tournament> {
    let repo = TournamentRepository::new(pool);
    Ok(repo.create(req).await?)
}

pub async fn update_tournament(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateTournamentRequest,
) -> WebResult<Tournament> {
    let repo = TournamentRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    Ok(repo.update(id, &existing, req).await?)
}

pub async fn delete_tournament(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = TournamentRepository::new(pool);
    Ok(repo.delete(id).await?)
}

/// The tournament's events with their category and judge panel attached.
pub async fn list_tournament_events(
    pool: &PgPool,
    tournament_id: Uuid,
) -> WebResult<Vec<TournamentEventResponse>> {
    let tournaments = TournamentRepository::new(pool);
    tournaments.find_by_id(tournament_id).await?;

    let repo = TournamentEventRepository::new(pool);
    let rows = repo.list_by_tournament(tournament_id).await?;

    let mut events = Vec::with_capacity(rows.len());
    for row in rows {
        let judges = repo.judges_for(row.tournament_event_id).await?;
        events.push(row.into_response(judges));
    }

    Ok(events)
}

pub async fn get_tournament_event(
    pool: &PgPool,
    tournament_id: Uuid,
    tournament_event_id: Uuid,
) -> WebResult<TournamentEventResponse> {
    let repo = TournamentEventRepository::new(pool);

    let row = repo.find_row(tournament_event_id).await?;
    if row.tournament_id != tournament_id {
        return Err(WebError::Forbidden);
    }

    let judges = repo.judges_for(tournament_event_id).await?;
    Ok(row.into_response(judges))
}

/// Judge panel and head judge must actually hold the judge flag.
async fn ensure_judges(pool: &PgPool, profile_ids: &[Uuid]) -> WebResult<()> {
    let profiles = ProfileRepository::new(pool);

    for profile_id in profile_ids {
        let profile = profiles.find_by_id(*profile_id).await?;
        if !profile.is_judge {
            return Err(WebError::BadRequest(format!(
                "Profile {} is not a judge",
                profile_id
            )));
        }
    }

    Ok(())
}

pub async fn create_tournament_event(
    pool: &PgPool,
    tournament_id: Uuid,
    req: &CreateTournamentEventRequest,
) -> WebResult<TournamentEvent> {
    let tournaments = TournamentRepository::new(pool);
    tournaments.find_by_id(tournament_id).await?;

    let mut judge_ids = req.judge_ids.clone();
    if let Some(head) = req.head_judge_id {
        judge_ids.push(head);
    }
    ensure_judges(pool, &judge_ids).await?;

    let repo = TournamentEventRepository::new(pool);
    Ok(repo.create(tournament_id, req).await?)
}

pub async fn update_tournament_event(
    pool: &PgPool,
    tournament_id: Uuid,
    tournament_event_id: Uuid,
    req: &UpdateTournamentEventRequest,
) -> WebResult<TournamentEvent> {
    let repo = TournamentEventRepository::new(pool);

    let existing = repo.find_by_id(tournament_event_id).await?;
    if existing.tournament_id != tournament_id {
        return Err(WebError::Forbidden);
    }

    let mut judge_ids = req.judge_ids.clone().unwrap_or_default();
    if let Some(Some(head)) = req.head_judge_id {
        judge_ids.push(head);
    }
    ensure_judges(pool, &judge_ids).await?;

    Ok(repo.update(tournament_event_id, &existing, req).await?)
}

pub async fn delete_tournament_event(
    pool: &PgPool,
    tournament_id: Uuid,
    tournament_event_id: Uuid,
) -> WebResult<()> {
    let repo = TournamentEventRepository::new(pool);

    let existing = repo.find_by_id(tournament_event_id).await?;
    if existing.tournament_id != tournament_id {
        return Err(WebError::Forbidden);
    }

    Ok(repo.delete(tournament_event_id).await?)
}
