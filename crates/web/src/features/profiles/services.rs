use sqlx::PgPool;
use storage::{
    dto::common::{PaginatedResponse, PaginationParams},
    dto::profile::{ProfileResponse, UpdateProfileRequest},
    error::Result,
    models::Profile,
    repository::profile::ProfileRepository,
};
use uuid::Uuid;

pub async fn get_profile(pool: &PgPool, profile_id: Uuid) -> Result<Profile> {
    let repo = ProfileRepository::new(pool);
    repo.find_by_id(profile_id).await
}

pub async fn update_profile(
    pool: &PgPool,
    profile_id: Uuid,
    req: &UpdateProfileRequest,
) -> Result<Profile> {
    let repo = ProfileRepository::new(pool);
    repo.update(profile_id, req).await
}

pub async fn list_profiles(
    pool: &PgPool,
    params: &PaginationParams,
) -> Result<PaginatedResponse<ProfileResponse>> {
    let repo = ProfileRepository::new(pool);

    let total = repo.count().await?;
    let profiles = repo.list(params.limit(), params.offset()).await?;

    let data = profiles.into_iter().map(ProfileResponse::from).collect();
    Ok(PaginatedResponse::new(
        data,
        params.page,
        params.page_size,
        total,
    ))
}

pub async fn set_judge(pool: &PgPool, profile_id: Uuid, is_judge: bool) -> Result<Profile> {
    let repo = ProfileRepository::new(pool);
    repo.set_judge(profile_id, is_judge).await
}
