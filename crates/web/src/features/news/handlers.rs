use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::news::{CreateNewsRequest, NewsResponse, UpdateNewsRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/news",
    responses(
        (status = 200, description = "Displayed articles, newest first", body = Vec<NewsResponse>)
    ),
    tag = "news"
)]
pub async fn list_news(State(db): State<Database>) -> Result<Response, WebError> {
    let news = services::list_displayed(db.pool()).await?;

    let response: Vec<NewsResponse> = news.into_iter().map(NewsResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/news/latest",
    responses(
        (status = 200, description = "The newest displayed articles", body = Vec<NewsResponse>)
    ),
    tag = "news"
)]
pub async fn latest_news(State(db): State<Database>) -> Result<Response, WebError> {
    let news = services::latest(db.pool()).await?;

    let response: Vec<NewsResponse> = news.into_iter().map(NewsResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/news/all",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All articles including hidden ones", body = Vec<NewsResponse>),
        (status = 403, description = "Staff only")
    ),
    tag = "news"
)]
pub async fn list_all_news(State(db): State<Database>) -> Result<Response, WebError> {
    let news = services::list_all(db.pool()).await?;

    let response: Vec<NewsResponse> = news.into_iter().map(NewsResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/news",
    request_body = CreateNewsRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Article created", body = NewsResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only")
    ),
    tag = "news"
)]
pub async fn create_news(
    State(db): State<Database>,
    Json(req): Json<CreateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let news = services::create(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(NewsResponse::from(news))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/news/{news_id}",
    params(
        ("news_id" = Uuid, Path, description = "News ID")
    ),
    request_body = UpdateNewsRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Article updated", body = NewsResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn update_news(
    State(db): State<Database>,
    Path(news_id): Path<Uuid>,
    Json(req): Json<UpdateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let news = services::update(db.pool(), news_id, &req).await?;

    Ok(Json(NewsResponse::from(news)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/news/{news_id}",
    params(
        ("news_id" = Uuid, Path, description = "News ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn delete_news(
    State(db): State<Database>,
    Path(news_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete(db.pool(), news_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
