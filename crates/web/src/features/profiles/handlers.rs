use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{PaginatedResponse, PaginationParams},
    dto::profile::{ProfileResponse, SetJudgeRequest, UpdateProfileRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/profiles/me",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "profiles"
)]
pub async fn get_me(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let profile = services::get_profile(db.pool(), user.profile_id).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/profiles/me",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email already in use")
    ),
    tag = "profiles"
)]
pub async fn update_me(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_clearable()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let profile = services::update_profile(db.pool(), user.profile_id, &req).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/profiles",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Paginated profile list", body = PaginatedResponse<ProfileResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff only")
    ),
    tag = "profiles"
)]
pub async fn list_profiles(
    State(db): State<Database>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let page = services::list_profiles(db.pool(), &params).await?;

    Ok(Json(page).into_response())
}

#[utoipa::path(
    put,
    path = "/api/profiles/{profile_id}/judge",
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID")
    ),
    request_body = SetJudgeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Judge flag updated", body = ProfileResponse),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Profile not found")
    ),
    tag = "profiles"
)]
pub async fn set_judge(
    State(db): State<Database>,
    Path(profile_id): Path<Uuid>,
    Json(req): Json<SetJudgeRequest>,
) -> Result<Response, WebError> {
    let profile = services::set_judge(db.pool(), profile_id, req.is_judge).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}
