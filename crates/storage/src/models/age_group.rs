use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Age bracket referenced by events. An open-ended group ("60+") has no max age.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AgeGroup {
    pub age_group_id: Uuid,
    pub min_age: i32,
    pub max_age: Option<i32>,
    pub is_active: bool,
}

impl AgeGroup {
    pub fn label(&self) -> String {
        match self.max_age {
            Some(max) => format!("{}-{}", self.min_age, max),
            None => format!("{}+", self.min_age),
        }
    }

    pub fn contains(&self, age: i32) -> bool {
        age >= self.min_age && self.max_age.is_none_or(|max| age <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_formats_open_ended_groups() {
        let bounded = AgeGroup {
            age_group_id: Uuid::new_v4(),
            min_age: 18,
            max_age: Some(35),
            is_active: true,
        };
        let open = AgeGroup {
            age_group_id: Uuid::new_v4(),
            min_age: 60,
            max_age: None,
            is_active: true,
        };

        assert_eq!(bounded.label(), "18-35");
        assert_eq!(open.label(), "60+");
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let group = AgeGroup {
            age_group_id: Uuid::new_v4(),
            min_age: 18,
            max_age: Some(35),
            is_active: true,
        };

        assert!(group.contains(18));
        assert!(group.contains(35));
        assert!(!group.contains(17));
        assert!(!group.contains(36));

        let open = AgeGroup {
            age_group_id: Uuid::new_v4(),
            min_age: 60,
            max_age: None,
            is_active: true,
        };
        assert!(open.contains(99));
        assert!(!open.contains(59));
    }
}
