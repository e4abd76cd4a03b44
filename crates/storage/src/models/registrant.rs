use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An individual or named group entered into a tournament. The database
/// enforces the tagged variant: `group_name` is non-null exactly when
/// `is_group` is true.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registrant {
    pub registrant_id: Uuid,
    pub tournament_id: Uuid,
    pub is_group: bool,
    pub group_name: Option<String>,
    pub school_or_club: Option<String>,
    pub is_kungfu_team_competitor: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
