use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::News;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewsRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Title must be between 1 and 100 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[serde(default = "default_display")]
    pub display: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,

    pub display: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsResponse {
    pub news_id: Uuid,
    pub title: String,
    pub content: String,
    pub posted_at: chrono::DateTime<chrono::Utc>,
    pub display: bool,
}

impl From<News> for NewsResponse {
    fn from(news: News) -> Self {
        Self {
            news_id: news.news_id,
            title: news.title,
            content: news.content,
            posted_at: news.posted_at,
            display: news.display,
        }
    }
}

fn default_display() -> bool {
    true
}
