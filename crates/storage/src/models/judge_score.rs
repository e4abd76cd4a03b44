use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One judge's individual score and justification, unique per (final score,
/// judge) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JudgeScore {
    pub judge_score_id: Uuid,
    pub final_score_id: Uuid,
    pub judge_id: Uuid,
    pub score: f64,
    pub justification: Option<String>,
}
