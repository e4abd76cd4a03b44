use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{
        AgeGroupResponse, CreateAgeGroupRequest, CreateEventRequest, EventResponse,
        UpdateAgeGroupRequest, UpdateEventRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List the event catalog", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Response, WebError> {
    let events = services::list_events(db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), event_id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 409, description = "Event already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Event already exists")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::update_event(db.pool(), event_id, &req).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_event(db.pool(), event_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/age-groups",
    responses(
        (status = 200, description = "List all age groups", body = Vec<AgeGroupResponse>)
    ),
    tag = "events"
)]
pub async fn list_age_groups(State(db): State<Database>) -> Result<Response, WebError> {
    let groups = services::list_age_groups(db.pool()).await?;

    let response: Vec<AgeGroupResponse> = groups.into_iter().map(AgeGroupResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/age-groups",
    request_body = CreateAgeGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Age group created", body = AgeGroupResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 409, description = "Age group already exists")
    ),
    tag = "events"
)]
pub async fn create_age_group(
    State(db): State<Database>,
    Json(req): Json<CreateAgeGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_range()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let group = services::create_age_group(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(AgeGroupResponse::from(group))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/age-groups/{age_group_id}",
    params(
        ("age_group_id" = Uuid, Path, description = "Age group ID")
    ),
    request_body = UpdateAgeGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Age group updated", body = AgeGroupResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Age group not found"),
        (status = 409, description = "Age group already exists")
    ),
    tag = "events"
)]
pub async fn update_age_group(
    State(db): State<Database>,
    Path(age_group_id): Path<Uuid>,
    Json(req): Json<UpdateAgeGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let group = services::update_age_group(db.pool(), age_group_id, &req).await?;

    Ok(Json(AgeGroupResponse::from(group)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/age-groups/{age_group_id}",
    params(
        ("age_group_id" = Uuid, Path, description = "Age group ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Age group deleted"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Age group not found")
    ),
    tag = "events"
)]
pub async fn delete_age_group(
    State(db): State<Database>,
    Path(age_group_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_age_group(db.pool(), age_group_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
