use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::auth::{LoginRequest, SignupRequest, TokenResponse},
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::JwtKeys;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created and logged in", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already in use")
    ),
    tag = "auth"
)]
pub async fn signup(
    State(db): State<Database>,
    Extension(keys): Extension<JwtKeys>,
    Json(req): Json<SignupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_birth_date(Utc::now().date_naive())
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let token = services::signup(db.pool(), &keys, &req).await?;

    Ok((StatusCode::CREATED, Json(token)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    Extension(keys): Extension<JwtKeys>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let token = services::login(db.pool(), &keys, &req).await?;

    Ok(Json(token).into_response())
}
