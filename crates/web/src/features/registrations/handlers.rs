use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::registration::{
        CreateRegistrantRequest, CreateRegistrationRequest, MyRegistrationEntry,
        RegistrantResponse, RegistrationResponse, ScheduleRegistrationRequest, SetFlagRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/registrants",
    request_body = CreateRegistrantRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Registrant created", body = RegistrantResponse),
        (status = 400, description = "Validation error or registration closed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found"),
        (status = 409, description = "Group name already taken")
    ),
    tag = "registrations"
)]
pub async fn create_registrant(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateRegistrantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_kind()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let (registrant, member_profile_ids) =
        services::create_registrant(db.pool(), &user, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrantResponse::from_registrant(
            registrant,
            member_profile_ids,
        )),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrants/{registrant_id}",
    params(
        ("registrant_id" = Uuid, Path, description = "Registrant ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Registrant found", body = RegistrantResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a member of the registrant"),
        (status = 404, description = "Registrant not found")
    ),
    tag = "registrations"
)]
pub async fn get_registrant(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(registrant_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let (registrant, member_profile_ids) =
        services::get_registrant(db.pool(), &user, registrant_id).await?;

    Ok(Json(RegistrantResponse::from_registrant(
        registrant,
        member_profile_ids,
    ))
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = CreateRegistrationRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Registration created", body = RegistrationResponse),
        (status = 400, description = "Guard failed: window closed, wrong kind, or event full"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a member of the registrant"),
        (status = 404, description = "Registrant or event not found"),
        (status = 409, description = "Already registered for this event")
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::create_registration(db.pool(), &user, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/mine",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's registrations", body = Vec<MyRegistrationEntry>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registrations"
)]
pub async fn list_my_registrations(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let entries = services::list_my_registrations(db.pool(), user.profile_id).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{registration_id}/withdraw",
    params(
        ("registration_id" = Uuid, Path, description = "Registration ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Registration withdrawn", body = RegistrationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a member of the registrant"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn withdraw_registration(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(registration_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registration = services::withdraw(db.pool(), &user, registration_id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/event/{tournament_event_id}",
    params(
        ("tournament_event_id" = Uuid, Path, description = "Tournament event ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All registrations for the event", body = Vec<RegistrationResponse>),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Tournament event not found")
    ),
    tag = "registrations"
)]
pub async fn list_event_registrations(
    State(db): State<Database>,
    Path(tournament_event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registrations = services::list_for_event(db.pool(), tournament_event_id).await?;

    let response: Vec<RegistrationResponse> = registrations
        .into_iter()
        .map(RegistrationResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{registration_id}/schedule",
    params(
        ("registration_id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = ScheduleRegistrationRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Running order assigned", body = RegistrationResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Order already taken")
    ),
    tag = "registrations"
)]
pub async fn schedule_registration(
    State(db): State<Database>,
    Path(registration_id): Path<Uuid>,
    Json(req): Json<ScheduleRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration =
        services::schedule(db.pool(), registration_id, req.performance_order).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{registration_id}/paid",
    params(
        ("registration_id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = SetFlagRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Payment flag updated", body = RegistrationResponse),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn mark_paid(
    State(db): State<Database>,
    Path(registration_id): Path<Uuid>,
    Json(req): Json<SetFlagRequest>,
) -> Result<Response, WebError> {
    let registration = services::set_paid(db.pool(), registration_id, req.value).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{registration_id}/check-in",
    params(
        ("registration_id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = SetFlagRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Check-in flag updated", body = RegistrationResponse),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn check_in_registration(
    State(db): State<Database>,
    Path(registration_id): Path<Uuid>,
    Json(req): Json<SetFlagRequest>,
) -> Result<Response, WebError> {
    let registration = services::set_checked_in(db.pool(), registration_id, req.value).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{registration_id}/disqualify",
    params(
        ("registration_id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = SetFlagRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Disqualification flag updated", body = RegistrationResponse),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn disqualify_registration(
    State(db): State<Database>,
    Path(registration_id): Path<Uuid>,
    Json(req): Json<SetFlagRequest>,
) -> Result<Response, WebError> {
    let registration = services::set_disqualified(db.pool(), registration_id, req.value).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{registration_id}/complete",
    params(
        ("registration_id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = SetFlagRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Completion flag updated", body = RegistrationResponse),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn complete_registration(
    State(db): State<Database>,
    Path(registration_id): Path<Uuid>,
    Json(req): Json<SetFlagRequest>,
) -> Result<Response, WebError> {
    let registration = services::set_completed(db.pool(), registration_id, req.value).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}
