use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{AgeGroup, Event};

/// Request payload for creating an age group
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAgeGroupRequest {
    #[validate(range(min = 0, message = "The minimum age must be non-negative"))]
    pub min_age: i32,

    pub max_age: Option<i32>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateAgeGroupRequest {
    pub fn validate_range(&self) -> Result<(), &'static str> {
        if let Some(max) = self.max_age
            && self.min_age > max
        {
            return Err("The minimum age must be the same as or before the maximum age");
        }
        Ok(())
    }
}

/// Request payload for updating an age group. The maximum age is nullable, so
/// it distinguishes an absent field (keep) from an explicit `null` (make the
/// group open-ended).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAgeGroupRequest {
    #[validate(range(min = 0, message = "The minimum age must be non-negative"))]
    pub min_age: Option<i32>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<i32>)]
    pub max_age: Option<Option<i32>>,

    pub is_active: Option<bool>,
}

impl UpdateAgeGroupRequest {
    /// Range check over the merged result of the update.
    pub fn validate_range(&self, existing: &AgeGroup) -> Result<(), &'static str> {
        let min = self.min_age.unwrap_or(existing.min_age);
        let max = self.max_age.unwrap_or(existing.max_age);

        if let Some(max) = max
            && min > max
        {
            return Err("The minimum age must be the same as or before the maximum age");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgeGroupResponse {
    pub age_group_id: Uuid,
    pub min_age: i32,
    pub max_age: Option<i32>,
    pub label: String,
    pub is_active: bool,
}

impl From<AgeGroup> for AgeGroupResponse {
    fn from(group: AgeGroup) -> Self {
        let label = group.label();
        Self {
            age_group_id: group.age_group_id,
            min_age: group.min_age,
            max_age: group.max_age,
            label,
            is_active: group.is_active,
        }
    }
}

/// Request payload for creating an event category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    pub age_group_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub english_name: String,

    #[validate(length(min = 1, max = 255))]
    pub chinese_name: String,

    pub description: Option<String>,

    pub judging_criteria: Option<String>,

    pub rules: Option<String>,

    #[validate(custom(function = "crate::dto::common::validate_skill_level"))]
    pub skill_level: String,

    #[validate(custom(function = "crate::dto::common::validate_sex"))]
    pub sex: String,

    #[validate(length(min = 1, max = 255))]
    pub type_of_form: String,

    pub is_group_event: bool,
    pub is_weapon_event: bool,
    pub is_taolu_event: bool,
    pub is_nandu_event: bool,
}

/// Request payload for updating an event category. The free-text fields are
/// nullable, so they distinguish an absent field (keep) from an explicit
/// `null` (clear).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    pub age_group_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub english_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub chinese_name: Option<String>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<String>)]
    pub judging_criteria: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<String>)]
    pub rules: Option<Option<String>>,

    #[validate(custom(function = "crate::dto::common::validate_skill_level"))]
    pub skill_level: Option<String>,

    #[validate(custom(function = "crate::dto::common::validate_sex"))]
    pub sex: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub type_of_form: Option<String>,

    pub is_group_event: Option<bool>,
    pub is_weapon_event: Option<bool>,
    pub is_taolu_event: Option<bool>,
    pub is_nandu_event: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
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

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            age_group_id: event.age_group_id,
            english_name: event.english_name,
            chinese_name: event.chinese_name,
            description: event.description,
            judging_criteria: event.judging_criteria,
            rules: event.rules,
            skill_level: event.skill_level,
            sex: event.sex,
            type_of_form: event.type_of_form,
            is_group_event: event.is_group_event,
            is_weapon_event: event.is_weapon_event,
            is_taolu_event: event.is_taolu_event,
            is_nandu_event: event.is_nandu_event,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_group_range_validation() {
        let req = CreateAgeGroupRequest {
            min_age: 18,
            max_age: Some(35),
            is_active: true,
        };
        assert!(req.validate_range().is_ok());

        let req = CreateAgeGroupRequest {
            min_age: 40,
            max_age: Some(35),
            is_active: true,
        };
        assert!(req.validate_range().is_err());

        let req = CreateAgeGroupRequest {
            min_age: 60,
            max_age: None,
            is_active: true,
        };
        assert!(req.validate_range().is_ok());
    }

    #[test]
    fn age_group_update_validates_the_merged_range() {
        let existing = AgeGroup {
            age_group_id: Uuid::new_v4(),
            min_age: 18,
            max_age: Some(35),
            is_active: true,
        };

        let req: UpdateAgeGroupRequest = serde_json::from_str(r#"{"min_age": 40}"#).unwrap();
        assert!(req.validate_range(&existing).is_err());

        let req: UpdateAgeGroupRequest = serde_json::from_str(r#"{"max_age": 45}"#).unwrap();
        assert!(req.validate_range(&existing).is_ok());

        // Clearing the maximum makes the group open-ended, so any minimum fits.
        let req: UpdateAgeGroupRequest =
            serde_json::from_str(r#"{"min_age": 60, "max_age": null}"#).unwrap();
        assert_eq!(req.max_age, Some(None));
        assert!(req.validate_range(&existing).is_ok());
    }

    #[test]
    fn event_update_can_clear_free_text() {
        let req: UpdateEventRequest =
            serde_json::from_str(r#"{"description": null, "rules": "no repeats"}"#).unwrap();
        assert_eq!(req.description, Some(None));
        assert_eq!(req.rules, Some(Some("no repeats".to_string())));
        assert_eq!(req.judging_criteria, None);
    }
}
