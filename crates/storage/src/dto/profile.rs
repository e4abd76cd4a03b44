use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Profile;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub profile_id: uuid::Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub skill_level: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub school_or_club: Option<String>,
    pub usawkf_id: Option<String>,
    pub is_judge: bool,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            profile_id: profile.profile_id,
            first_name: profile.first_name,
            middle_name: profile.middle_name,
            last_name: profile.last_name,
            birth_date: profile.birth_date,
            sex: profile.sex,
            skill_level: profile.skill_level,
            email: profile.email,
            phone_number: profile.phone_number,
            school_or_club: profile.school_or_club,
            usawkf_id: profile.usawkf_id,
            is_judge: profile.is_judge,
        }
    }
}

/// Partial update of the caller's own profile. Name, birth date and sex are
/// fixed at signup; contact and club details can change. The nullable fields
/// distinguish an absent field (keep) from an explicit `null` (clear).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<String>)]
    pub phone_number: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<String>)]
    pub school_or_club: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<String>)]
    pub usawkf_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<String>)]
    pub skill_level: Option<Option<String>>,
}

impl UpdateProfileRequest {
    /// Checks on the clearable fields, which the derive cannot reach through
    /// the nested option.
    pub fn validate_clearable(&self) -> Result<(), &'static str> {
        if let Some(Some(phone)) = &self.phone_number
            && phone.len() > 30
        {
            return Err("The phone number must be at most 30 characters");
        }
        if let Some(Some(club)) = &self.school_or_club
            && club.len() > 255
        {
            return Err("The school or club must be at most 255 characters");
        }
        if let Some(Some(id)) = &self.usawkf_id
            && id.len() > 255
        {
            return Err("The USAWKF ID must be at most 255 characters");
        }
        if let Some(Some(level)) = &self.skill_level
            && crate::dto::common::validate_skill_level(level).is_err()
        {
            return Err("The skill level must be beginner, intermediate, or advanced");
        }
        Ok(())
    }
}

/// Staff-only toggle of the judge flag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetJudgeRequest {
    pub is_judge: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_can_clear_contact_details() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"phone_number": null, "usawkf_id": null}"#).unwrap();
        assert_eq!(req.phone_number, Some(None));
        assert_eq!(req.usawkf_id, Some(None));
        assert_eq!(req.school_or_club, None);
        assert!(req.validate_clearable().is_ok());
    }

    #[test]
    fn clearable_fields_are_still_validated_when_set() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"skill_level": "expert"}"#).unwrap();
        assert!(req.validate_clearable().is_err());

        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"skill_level": "advanced"}"#).unwrap();
        assert!(req.validate_clearable().is_ok());
    }
}
