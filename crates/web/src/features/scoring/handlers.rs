use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::scoring::{
        CompetitorEntry, MatSchedule, ScoringSheetResponse, SubmitFinalScoreRequest,
        SubmitJudgeScoreRequest,
    },
    dto::tournament::TournamentResponse,
    models::{FinalScore, JudgeScore},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scoring/tournaments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active tournaments open for judging", body = Vec<TournamentResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Judges only")
    ),
    tag = "scoring"
)]
pub async fn list_judging_tournaments(State(db): State<Database>) -> Result<Response, WebError> {
    let tournaments = services::list_judging_tournaments(db.pool()).await?;

    let response: Vec<TournamentResponse> = tournaments
        .into_iter()
        .map(TournamentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scoring/tournaments/{tournament_id}/events",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Scheduled events grouped by mat", body = Vec<MatSchedule>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Judges only"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "scoring"
)]
pub async fn list_scheduled_events(
    State(db): State<Database>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let mats = services::list_scheduled_events(db.pool(), tournament_id).await?;

    Ok(Json(mats).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scoring/tournaments/{tournament_id}/events/{tournament_event_id}/competitors",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID"),
        ("tournament_event_id" = Uuid, Path, description = "Tournament event ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Scheduled competitors in running order", body = Vec<CompetitorEntry>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Judges only, or event not in this tournament"),
        (status = 404, description = "Tournament event not found")
    ),
    tag = "scoring"
)]
pub async fn list_scoreable_competitors(
    State(db): State<Database>,
    Path((tournament_id, tournament_event_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let competitors =
        services::list_competitors(db.pool(), tournament_id, tournament_event_id).await?;

    Ok(Json(competitors).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scoring/tournaments/{tournament_id}/events/{tournament_event_id}/competitors/{performance_order}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID"),
        ("tournament_event_id" = Uuid, Path, description = "Tournament event ID"),
        ("performance_order" = i32, Path, description = "Competitor's running order")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Scoring sheet for the competitor", body = ScoringSheetResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Judges only, or competitor not admitted to judging"),
        (status = 404, description = "No competitor at this order")
    ),
    tag = "scoring"
)]
pub async fn get_scoring_sheet(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path((tournament_id, tournament_event_id, performance_order)): Path<(Uuid, Uuid, i32)>,
) -> Result<Response, WebError> {
    let sheet = services::scoring_sheet(
        db.pool(),
        &user,
        tournament_id,
        tournament_event_id,
        performance_order,
    )
    .await?;

    Ok(Json(sheet).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scoring/tournaments/{tournament_id}/events/{tournament_event_id}/competitors/{performance_order}/judge-score",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID"),
        ("tournament_event_id" = Uuid, Path, description = "Tournament event ID"),
        ("performance_order" = i32, Path, description = "Competitor's running order")
    ),
    request_body = SubmitJudgeScoreRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Score recorded", body = JudgeScore),
        (status = 400, description = "Score out of range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Judges only, or competitor not admitted to judging"),
        (status = 404, description = "No competitor at this order")
    ),
    tag = "scoring"
)]
pub async fn submit_judge_score(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path((tournament_id, tournament_event_id, performance_order)): Path<(Uuid, Uuid, i32)>,
    Json(req): Json<SubmitJudgeScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let judge_score = services::submit_judge_score(
        db.pool(),
        &user,
        tournament_id,
        tournament_event_id,
        performance_order,
        &req,
    )
    .await?;

    Ok(Json(judge_score).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scoring/tournaments/{tournament_id}/events/{tournament_event_id}/competitors/{performance_order}/final-score",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID"),
        ("tournament_event_id" = Uuid, Path, description = "Tournament event ID"),
        ("performance_order" = i32, Path, description = "Competitor's running order")
    ),
    request_body = SubmitFinalScoreRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Official result recorded", body = FinalScore),
        (status = 400, description = "Score or rank out of range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Head judge only"),
        (status = 404, description = "No competitor at this order"),
        (status = 409, description = "Rank already assigned in this event")
    ),
    tag = "scoring"
)]
pub async fn submit_final_score(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path((tournament_id, tournament_event_id, performance_order)): Path<(Uuid, Uuid, i32)>,
    Json(req): Json<SubmitFinalScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let final_score = services::submit_final_score(
        db.pool(),
        &user,
        tournament_id,
        tournament_event_id,
        performance_order,
        &req,
    )
    .await?;

    Ok(Json(final_score).into_response())
}
