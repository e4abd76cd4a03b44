use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::profile::ProfileResponse;

/// Signup payload: account credentials plus the competitor profile created
/// alongside them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(
        min = 3,
        max = 150,
        message = "Username must be between 3 and 150 characters"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(max = 255))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    pub birth_date: NaiveDate,

    #[validate(custom(function = "crate::dto::common::validate_sex"))]
    pub sex: String,

    #[validate(custom(function = "crate::dto::common::validate_skill_level"))]
    pub skill_level: Option<String>,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(max = 30))]
    pub phone_number: Option<String>,

    #[validate(length(max = 255))]
    pub school_or_club: Option<String>,

    #[validate(length(max = 255))]
    pub usawkf_id: Option<String>,
}

impl SignupRequest {
    /// Validation that needs the clock: birth dates in the future are nonsense.
    pub fn validate_birth_date(&self, today: NaiveDate) -> Result<(), &'static str> {
        if self.birth_date > today {
            return Err("Please enter a valid birth date");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Issued on both signup and login; signup logs the new user in directly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub profile: ProfileResponse,
}

impl TokenResponse {
    pub fn bearer(token: String, profile: ProfileResponse) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            profile,
        }
    }
}

fn validate_username(username: &str) -> Result<(), validator::ValidationError> {
    // Letters, digits and @/./+/-/_ only, matching the original signup rules.
    let is_valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_username"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupRequest {
        SignupRequest {
            username: "jdoe".to_string(),
            password: "hunter2hunter2".to_string(),
            first_name: "John".to_string(),
            middle_name: None,
            last_name: "Doe".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            sex: "male".to_string(),
            skill_level: Some("beginner".to_string()),
            email: "jdoe@example.com".to_string(),
            phone_number: None,
            school_or_club: Some("Ohio Wushu Academy".to_string()),
            usawkf_id: None,
        }
    }

    #[test]
    fn valid_signup_passes() {
        assert!(signup().validate().is_ok());
    }

    #[test]
    fn rejects_bad_email_and_short_password() {
        let mut req = signup();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());

        let mut req = signup();
        req.password = "short".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_username_with_spaces() {
        let mut req = signup();
        req.username = "john doe".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_future_birth_date() {
        let req = signup();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(req.validate_birth_date(today).is_ok());

        let early = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert!(req.validate_birth_date(early).is_err());
    }
}
