use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TournamentEvent;

/// Request payload for scheduling an event within a tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentEventRequest {
    pub event_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub mat_or_location: String,

    #[validate(range(min = 1, message = "The order must be at least 1"))]
    pub event_order: Option<i32>,

    #[validate(range(min = 1, message = "The maximum number of participants must be at least 1"))]
    #[serde(default = "default_max_participants")]
    pub max_participants: i32,

    #[serde(default)]
    pub registration_open: bool,

    pub head_judge_id: Option<Uuid>,

    #[serde(default)]
    pub judge_ids: Vec<Uuid>,
}

/// The schedule slot and the head judge are nullable, so they distinguish an
/// absent field (keep) from an explicit `null` (clear).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTournamentEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub mat_or_location: Option<String>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<i32>)]
    pub event_order: Option<Option<i32>>,

    #[validate(range(min = 1))]
    pub max_participants: Option<i32>,

    pub registration_open: Option<bool>,

    pub is_active: Option<bool>,

    pub is_locked: Option<bool>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub head_judge_id: Option<Option<Uuid>>,

    /// When present, replaces the judge panel wholesale.
    pub judge_ids: Option<Vec<Uuid>>,
}

impl UpdateTournamentEventRequest {
    pub fn validate_order(&self) -> Result<(), &'static str> {
        if let Some(Some(order)) = self.event_order
            && order < 1
        {
            return Err("The order must be at least 1");
        }
        Ok(())
    }
}

/// A tournament event together with its category and judge panel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentEventResponse {
    pub tournament_event_id: Uuid,
    pub tournament_id: Uuid,
    pub event_id: Uuid,
    pub english_name: String,
    pub chinese_name: String,
    pub skill_level: String,
    pub sex: String,
    pub head_judge_id: Option<Uuid>,
    pub event_order: Option<i32>,
    pub mat_or_location: String,
    pub max_participants: i32,
    pub registration_open: bool,
    pub is_active: bool,
    pub is_locked: bool,
    pub judges: Vec<JudgeInfo>,
}

/// Joined row backing [`TournamentEventResponse`], before the judge panel is
/// attached.
#[derive(Debug, Clone, FromRow)]
pub struct TournamentEventRow {
    pub tournament_event_id: Uuid,
    pub tournament_id: Uuid,
    pub event_id: Uuid,
    pub english_name: String,
    pub chinese_name: String,
    pub skill_level: String,
    pub sex: String,
    pub head_judge_id: Option<Uuid>,
    pub event_order: Option<i32>,
    pub mat_or_location: String,
    pub max_participants: i32,
    pub registration_open: bool,
    pub is_active: bool,
    pub is_locked: bool,
}

impl TournamentEventRow {
    pub fn into_response(self, judges: Vec<JudgeInfo>) -> TournamentEventResponse {
        TournamentEventResponse {
            tournament_event_id: self.tournament_event_id,
            tournament_id: self.tournament_id,
            event_id: self.event_id,
            english_name: self.english_name,
            chinese_name: self.chinese_name,
            skill_level: self.skill_level,
            sex: self.sex,
            head_judge_id: self.head_judge_id,
            event_order: self.event_order,
            mat_or_location: self.mat_or_location,
            max_participants: self.max_participants,
            registration_open: self.registration_open,
            is_active: self.is_active,
            is_locked: self.is_locked,
            judges,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JudgeInfo {
    pub profile_id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<TournamentEvent> for TournamentEventSummary {
    fn from(te: TournamentEvent) -> Self {
        Self {
            tournament_event_id: te.tournament_event_id,
            tournament_id: te.tournament_id,
            event_id: te.event_id,
            event_order: te.event_order,
            mat_or_location: te.mat_or_location,
            max_participants: te.max_participants,
            registration_open: te.registration_open,
            is_active: te.is_active,
            is_locked: te.is_locked,
        }
    }
}

/// Bare tournament event without the joined category, for mutation responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentEventSummary {
    pub tournament_event_id: Uuid,
    pub tournament_id: Uuid,
    pub event_id: Uuid,
    pub event_order: Option<i32>,
    pub mat_or_location: String,
    pub max_participants: i32,
    pub registration_open: bool,
    pub is_active: bool,
    pub is_locked: bool,
}

fn default_max_participants() -> i32 {
    999
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_must_be_positive_when_set() {
        let req: UpdateTournamentEventRequest =
            serde_json::from_str(r#"{"event_order": 0}"#).unwrap();
        assert!(req.validate_order().is_err());

        let req: UpdateTournamentEventRequest =
            serde_json::from_str(r#"{"event_order": 3}"#).unwrap();
        assert!(req.validate_order().is_ok());
    }

    #[test]
    fn update_can_clear_the_head_judge_and_order() {
        let req: UpdateTournamentEventRequest =
            serde_json::from_str(r#"{"head_judge_id": null, "event_order": null}"#).unwrap();
        assert_eq!(req.head_judge_id, Some(None));
        assert_eq!(req.event_order, Some(None));
        assert!(req.validate_order().is_ok());

        let req: UpdateTournamentEventRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.head_judge_id, None);
        assert_eq!(req.event_order, None);
    }
}
