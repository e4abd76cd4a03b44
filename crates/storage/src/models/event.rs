use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A competition category (e.g. Compulsory Southern Fist, advanced, male,
/// 18-35). Tournament-specific scheduling lives on TournamentEvent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub age_group_id: Uuid,
    pub english_name: String,
    pub chinese_name: String,
    pub description: Option<String>,
    pub judging_criteria: Option<String>,
    pub rules: Option<String>,
    pub skill_level: String,
    pub sex: String,
    pub type_of_form: String,
    pub is_group_event: bool,
    pub is_weapon_event: bool,
    pub is_taolu_event: bool,
    pub is_nandu_event: bool,
}
