use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// The head-judge-determined official result for one registration. Created
/// empty when the competitor is scheduled; score and rank are filled in by
/// the head judge during judging.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FinalScore {
    pub final_score_id: Uuid,
    pub registration_id: Uuid,
    pub score: Option<f64>,
    pub rank: Option<i32>,
}
