use sqlx::PgPool;
use storage::{
    dto::news::{CreateNewsRequest, UpdateNewsRequest},
    models::News,
    repository::news::NewsRepository,
};
use uuid::Uuid;

use crate::error::WebResult;

/// How many articles the home-page feed shows.
const LATEST_LIMIT: u32 = 3;

pub async fn list_displayed(pool: &PgPool) -> WebResult<Vec<News>> {
    let repo = NewsRepository::new(pool);
    Ok(repo.list_displayed(None).await?)
}

pub async fn latest(pool: &PgPool) -> WebResult<Vec<News>> {
    let repo = NewsRepository::new(pool);
    Ok(repo.list_displayed(Some(LATEST_LIMIT)).await?)
}

pub async fn list_all(pool: &PgPool) -> WebResult<Vec<News>> {
    let repo = NewsRepository::new(pool);
    Ok(repo.list_all().await?)
}

pub async fn create(pool: &PgPool, req: &CreateNewsRequest) -> WebResult<News> {
    let repo = NewsRepository::new(pool);
    Ok(repo.create(req).await?)
}

pub async fn update(pool: &PgPool, id: Uuid, req: &UpdateNewsRequest) -> WebResult<News> {
    let repo = NewsRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    Ok(repo.update(id, &existing, req).await?)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = NewsRepository::new(pool);
    Ok(repo.delete(id).await?)
}
