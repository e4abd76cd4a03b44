use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > 100 {
            return Err("page_size must be between 1 and 100".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

/// Deserializer for nullable columns in partial updates. An absent field
/// deserializes to `None` (leave the stored value alone); an explicit `null`
/// deserializes to `Some(None)` (clear it). Pair with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

// Validators shared by profile and event payloads.

pub fn validate_sex(sex: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXES: &[&str] = &["male", "female", "other"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_sex"))
    }
}

pub fn validate_skill_level(skill_level: &str) -> Result<(), validator::ValidationError> {
    const VALID_SKILL_LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];

    if VALID_SKILL_LEVELS.contains(&skill_level) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_skill_level"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_offset_and_limit() {
        let params = PaginationParams {
            page: 3,
            page_size: 20,
        };
        assert_eq!(params.offset(), 40);
        assert_eq!(params.limit(), 20);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn pagination_rejects_oversized_page() {
        let params = PaginationParams {
            page: 1,
            page_size: 500,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn pagination_meta_rounds_up() {
        let meta = PaginationMeta::new(1, 50, 101);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn double_option_distinguishes_absent_from_null() {
        #[derive(serde::Deserialize)]
        struct Patch {
            #[serde(default, deserialize_with = "double_option")]
            note: Option<Option<String>>,
        }

        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.note, None);

        let cleared: Patch = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(cleared.note, Some(None));

        let set: Patch = serde_json::from_str(r#"{"note": "hello"}"#).unwrap();
        assert_eq!(set.note, Some(Some("hello".to_string())));
    }

    #[test]
    fn sex_and_skill_level_validators() {
        assert!(validate_sex("female").is_ok());
        assert!(validate_sex("Female").is_err());
        assert!(validate_skill_level("advanced").is_ok());
        assert!(validate_skill_level("expert").is_err());
    }
}
