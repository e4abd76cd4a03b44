use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A registrant's entry into a single tournament event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub tournament_event_id: Uuid,
    pub registrant_id: Uuid,
    pub performance_order: Option<i32>,
    pub notes: Option<String>,
    pub registered_at: chrono::DateTime<chrono::Utc>,
    pub is_paid: bool,
    pub is_withdrawn: bool,
    pub is_checked_in: bool,
    pub is_disqualified: bool,
    pub is_completed: bool,
}
