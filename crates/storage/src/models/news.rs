use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct News {
    pub news_id: Uuid,
    pub title: String,
    pub content: String,
    pub posted_at: chrono::DateTime<chrono::Utc>,
    pub display: bool,
}
