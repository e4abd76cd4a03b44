use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A person: competitor, judge, or both. One-to-one with a user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Profile {
    pub profile_id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub sex: String,
    pub skill_level: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub school_or_club: Option<String>,
    pub usawkf_id: Option<String>,
    pub is_judge: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Profile {
    /// Age in whole years on the given day.
    pub fn age_on(&self, day: chrono::NaiveDate) -> i32 {
        use chrono::Datelike;

        let mut age = day.year() - self.birth_date.year();
        if (day.month(), day.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile(birth_date: NaiveDate) -> Profile {
        Profile {
            profile_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            first_name: "Mei".to_string(),
            middle_name: None,
            last_name: "Chen".to_string(),
            birth_date,
            sex: "female".to_string(),
            skill_level: Some("advanced".to_string()),
            email: "mei@example.com".to_string(),
            phone_number: None,
            school_or_club: None,
            usawkf_id: None,
            is_judge: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn age_counts_whole_years_only() {
        let p = profile(NaiveDate::from_ymd_opt(2006, 8, 15).unwrap());

        // Day before the birthday, on it, and after it.
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2024, 8, 14).unwrap()), 17);
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()), 18);
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()), 18);
    }
}
