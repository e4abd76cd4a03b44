use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::news::{CreateNewsRequest, UpdateNewsRequest};
use crate::error::{Result, StorageError};
use crate::models::News;

const NEWS_COLUMNS: &str = "news_id, title, content, posted_at, display";

/// Repository for News database operations
pub struct NewsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NewsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Displayed articles, newest first. `limit` caps the home-page feed.
    pub async fn list_displayed(&self, limit: Option<u32>) -> Result<Vec<News>> {
        let news = sqlx::query_as::<_, News>(&format!(
            r#"
            SELECT {NEWS_COLUMNS}
            FROM news
            WHERE display
            ORDER BY posted_at DESC
            LIMIT $1
            "#
        ))
        .bind(limit.map(|l| l as i64).unwrap_or(i64::MAX))
        .fetch_all(self.pool)
        .await?;

        Ok(news)
    }

    pub async fn list_all(&self) -> Result<Vec<News>> {
        let news = sqlx::query_as::<_, News>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news ORDER BY posted_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(news)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<News> {
        let news = sqlx::query_as::<_, News>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news WHERE news_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(news)
    }

    pub async fn create(&self, req: &CreateNewsRequest) -> Result<News> {
        let news = sqlx::query_as::<_, News>(&format!(
            r#"
            INSERT INTO news (title, content, display)
            VALUES ($1, $2, $3)
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(&req.title)
        .bind(&req.content)
        .bind(req.display)
        .fetch_one(self.pool)
        .await?;

        Ok(news)
    }

    pub async fn update(&self, id: Uuid, existing: &News, req: &UpdateNewsRequest) -> Result<News> {
        let news = sqlx::query_as::<_, News>(&format!(
            r#"
            UPDATE news
            SET title = $2, content = $3, display = $4
            WHERE news_id = $1
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.title.as_ref().unwrap_or(&existing.title))
        .bind(req.content.as_ref().unwrap_or(&existing.content))
        .bind(req.display.unwrap_or(existing.display))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(news)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM news WHERE news_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
