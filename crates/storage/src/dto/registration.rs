use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Registrant, Registration};

/// Request payload for entering a registrant into a tournament. Individual
/// registrants are the caller; groups name their members explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrantRequest {
    pub tournament_id: Uuid,

    pub is_group: bool,

    #[validate(length(min = 1, max = 255))]
    pub group_name: Option<String>,

    #[validate(length(max = 255))]
    pub school_or_club: Option<String>,

    #[serde(default)]
    pub is_kungfu_team_competitor: bool,

    /// Group members. Ignored for individual registrants, who always consist
    /// of the caller alone.
    #[serde(default)]
    pub member_profile_ids: Vec<Uuid>,
}

impl CreateRegistrantRequest {
    /// The tagged-variant rule: groups are named and have members, individuals
    /// have neither.
    pub fn validate_kind(&self) -> Result<(), &'static str> {
        if self.is_group {
            if self.group_name.is_none() {
                return Err("The group name must not be null if it is a group");
            }
            if self.member_profile_ids.is_empty() {
                return Err("A group registrant needs at least one member");
            }
        } else if self.group_name.is_some() {
            return Err("The group name must be null if it is not a group");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrantResponse {
    pub registrant_id: Uuid,
    pub tournament_id: Uuid,
    pub is_group: bool,
    pub group_name: Option<String>,
    pub school_or_club: Option<String>,
    pub is_kungfu_team_competitor: bool,
    pub member_profile_ids: Vec<Uuid>,
}

impl RegistrantResponse {
    pub fn from_registrant(registrant: Registrant, member_profile_ids: Vec<Uuid>) -> Self {
        Self {
            registrant_id: registrant.registrant_id,
            tournament_id: registrant.tournament_id,
            is_group: registrant.is_group,
            group_name: registrant.group_name,
            school_or_club: registrant.school_or_club,
            is_kungfu_team_competitor: registrant.is_kungfu_team_competitor,
            member_profile_ids,
        }
    }
}

/// Request payload for registering a registrant into a tournament event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    pub registrant_id: Uuid,

    pub tournament_event_id: Uuid,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
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

impl From<Registration> for RegistrationResponse {
    fn from(r: Registration) -> Self {
        Self {
            registration_id: r.registration_id,
            tournament_event_id: r.tournament_event_id,
            registrant_id: r.registrant_id,
            performance_order: r.performance_order,
            notes: r.notes,
            registered_at: r.registered_at,
            is_paid: r.is_paid,
            is_withdrawn: r.is_withdrawn,
            is_checked_in: r.is_checked_in,
            is_disqualified: r.is_disqualified,
            is_completed: r.is_completed,
        }
    }
}

/// One row of "my registrations": the registration joined with what it is for.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MyRegistrationEntry {
    pub registration_id: Uuid,
    pub tournament_id: Uuid,
    pub tournament_name: String,
    pub tournament_event_id: Uuid,
    pub english_name: String,
    pub chinese_name: String,
    pub mat_or_location: String,
    pub performance_order: Option<i32>,
    pub registered_at: chrono::DateTime<chrono::Utc>,
    pub is_paid: bool,
    pub is_withdrawn: bool,
    pub is_checked_in: bool,
}

/// Staff payload assigning the running order. Scheduling also creates the
/// empty final-score record that admits the competitor to judging.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScheduleRegistrationRequest {
    #[validate(range(min = 1, message = "The order must be at least 1"))]
    pub performance_order: i32,
}

/// Staff payload flipping one of the registration status flags.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetFlagRequest {
    pub value: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individual() -> CreateRegistrantRequest {
        CreateRegistrantRequest {
            tournament_id: Uuid::new_v4(),
            is_group: false,
            group_name: None,
            school_or_club: None,
            is_kungfu_team_competitor: false,
            member_profile_ids: vec![],
        }
    }

    #[test]
    fn individual_without_group_name_passes() {
        assert!(individual().validate_kind().is_ok());
    }

    #[test]
    fn individual_with_group_name_fails() {
        let mut req = individual();
        req.group_name = Some("Dragons".to_string());
        assert!(req.validate_kind().is_err());
    }

    #[test]
    fn group_requires_name_and_members() {
        let mut req = individual();
        req.is_group = true;
        assert!(req.validate_kind().is_err());

        req.group_name = Some("Dragons".to_string());
        assert!(req.validate_kind().is_err());

        req.member_profile_ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        assert!(req.validate_kind().is_ok());
    }
}
