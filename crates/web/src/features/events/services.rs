use sqlx::PgPool;
use storage::{
    dto::event::{
        CreateAgeGroupRequest, CreateEventRequest, UpdateAgeGroupRequest, UpdateEventRequest,
    },
    error::StorageError,
    models::{AgeGroup, Event},
    repository::event::EventRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn list_events(pool: &PgPool) -> WebResult<Vec<Event>> {
    let repo = EventRepository::new(pool);
    Ok(repo.list().await?)
}

pub async fn get_event(pool: &PgPool, id: Uuid) -> WebResult<Event> {
    let repo = EventRepository::new(pool);
    Ok(repo.find_by_id(id).await?)
}

/// Referencing a missing age group reads as a bad request, not a foreign key
/// blowup.
async fn ensure_age_group(repo: &EventRepository<'_>, age_group_id: Uuid) -> WebResult<()> {
    match repo.find_age_group(age_group_id).await {
        Ok(_) => Ok(()),
        Err(StorageError::NotFound) => Err(WebError::BadRequest(format!(
            "Age group {} does not exist",
            age_group_id
        ))),
        Err(e) => Err(e.into()),
    }
}

pub async fn create_event(pool: &PgPool, req: &CreateEventRequest) -> WebResult<Event> {
    let repo = EventRepository::new(pool);

    ensure_age_group(&repo, req.age_group_id).await?;
    Ok(repo.create(req).await?)
}

pub async fn update_event(pool: &PgPool, id: Uuid, req: &UpdateEventRequest) -> WebResult<Event> {
    let repo = EventRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    if let Some(age_group_id) = req.age_group_id {
        ensure_age_group(&repo, age_group_id).await?;
    }
    Ok(repo.update(id, &existing, req).await?)
}

pub async fn delete_event(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = EventRepository::new(pool);
    Ok(repo.delete(id).await?)
}

pub async fn list_age_groups(pool: &PgPool) -> WebResult<Vec<AgeGroup>> {
    let repo = EventRepository::new(pool);
    Ok(repo.list_age_groups().await?)
}

pub async fn create_age_group(pool: &PgPool, req: &CreateAgeGroupRequest) -> WebResult<AgeGroup> {
    let repo = EventRepository::new(pool);
    Ok(repo.create_age_group(req).await?)
}

pub async fn update_age_group(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateAgeGroupRequest,
) -> WebResult<AgeGroup> {
    let repo = EventRepository::new(pool);

    let existing = repo.find_age_group(id).await?;
    req.validate_range(&existing)
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    Ok(repo.update_age_group(id, &existing, req).await?)
}

pub async fn delete_age_group(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = EventRepository::new(pool);
    Ok(repo.delete_age_group(id).await?)
}
