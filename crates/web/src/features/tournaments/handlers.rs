use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::tournament::{CreateTournamentRequest, TournamentResponse, UpdateTournamentRequest},
    dto::tournament_event::{
        CreateTournamentEventRequest, TournamentEventResponse, TournamentEventSummary,
        UpdateTournamentEventRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    responses(
        (status = 200, description = "List all tournaments", body = Vec<TournamentResponse>)
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(State(db): State<Database>) -> Result<Response, WebError> {
    let tournaments = services::list_tournaments(db.pool()).await?;

    let response: Vec<TournamentResponse> = tournaments
        .into_iter()
        .map(TournamentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Tournament found", body = TournamentResponse),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let tournament = services::get_tournament(db.pool(), tournament_id).await?;

    Ok(Json(TournamentResponse::from(tournament)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments",
    request_body = CreateTournamentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Tournament created", body = TournamentResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 409, description = "Tournament already exists")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(db): State<Database>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_schedule()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let tournament = services::create_tournament(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(TournamentResponse::from(tournament)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournaments/{tournament_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = UpdateTournamentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tournament updated", body = TournamentResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Tournament not found"),
        (status = 409, description = "Tournament already exists")
    ),
    tag = "tournaments"
)]
pub async fn update_tournament(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
    Json(req): Json<UpdateTournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tournament = services::update_tournament(db.pool(), tournament_id, &req).await?;

    Ok(Json(TournamentResponse::from(tournament)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{tournament_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Tournament deleted"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn delete_tournament(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_tournament(db.pool(), tournament_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/events",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "The tournament's scheduled events", body = Vec<TournamentEventResponse>),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn list_tournament_events(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let events = services::list_tournament_events(db.pool(), tournament_id).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/events/{tournament_event_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID"),
        ("tournament_event_id" = Uuid, Path, description = "Tournament event ID")
    ),
    responses(
        (status = 200, description = "Tournament event found", body = TournamentEventResponse),
        (status = 403, description = "Event not in this tournament"),
        (status = 404, description = "Tournament event not found")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament_event(
    State(db): State<Database>,
    Path((tournament_id, tournament_event_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let event =
        services::get_tournament_event(db.pool(), tournament_id, tournament_event_id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{tournament_id}/events",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = CreateTournamentEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Event scheduled in the tournament", body = TournamentEventSummary),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Tournament not found"),
        (status = 409, description = "Event or order already scheduled")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament_event(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
    Json(req): Json<CreateTournamentEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let te = services::create_tournament_event(db.pool(), tournament_id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(TournamentEventSummary::from(te)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournaments/{tournament_id}/events/{tournament_event_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID"),
        ("tournament_event_id" = Uuid, Path, description = "Tournament event ID")
    ),
    request_body = UpdateTournamentEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tournament event updated", body = TournamentEventSummary),
        (status = 403, description = "Staff only, or event not in this tournament"),
        (status = 404, description = "Tournament event not found"),
        (status = 409, description = "Order already scheduled")
    ),
    tag = "tournaments"
)]
pub async fn update_tournament_event(
    State(db): State<Database>,
    Path((tournament_id, tournament_event_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateTournamentEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_order()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let te =
        services::update_tournament_event(db.pool(), tournament_id, tournament_event_id, &req)
            .await?;

    Ok(Json(TournamentEventSummary::from(te)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{tournament_id}/events/{tournament_event_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID"),
        ("tournament_event_id" = Uuid, Path, description = "Tournament event ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Tournament event deleted"),
        (status = 403, description = "Staff only, or event not in this tournament"),
        (status = 404, description = "Tournament event not found")
    ),
    tag = "tournaments"
)]
pub async fn delete_tournament_event(
    State(db): State<Database>,
    Path((tournament_id, tournament_event_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_tournament_event(db.pool(), tournament_id, tournament_event_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
