use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Login credentials record. The person-facing fields live on [`crate::models::Profile`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserAccount {
    pub user_id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_staff: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
