use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{
    CreateAgeGroupRequest, CreateEventRequest, UpdateAgeGroupRequest, UpdateEventRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{AgeGroup, Event};

const EVENT_COLUMNS: &str = "event_id, age_group_id, english_name, chinese_name, description, \
     judging_criteria, rules, skill_level, sex, type_of_form, is_group_event, \
     is_weapon_event, is_taolu_event, is_nandu_event";

/// Repository for the event catalog and its age groups.
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY english_name, sex, skill_level"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (
                age_group_id, english_name, chinese_name, description,
                judging_criteria, rules, skill_level, sex, type_of_form,
                is_group_event, is_weapon_event, is_taolu_event, is_nandu_event
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(req.age_group_id)
        .bind(&req.english_name)
        .bind(&req.chinese_name)
        .bind(&req.description)
        .bind(&req.judging_criteria)
        .bind(&req.rules)
        .bind(&req.skill_level)
        .bind(&req.sex)
        .bind(&req.type_of_form)
        .bind(req.is_group_event)
        .bind(req.is_weapon_event)
        .bind(req.is_taolu_event)
        .bind(req.is_nandu_event)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This event already exists"))?;

        Ok(event)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Event,
        req: &UpdateEventRequest,
    ) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET age_group_id = $2,
                english_name = $3,
                chinese_name = $4,
                description = $5,
                judging_criteria = $6,
                rules = $7,
                skill_level = $8,
                sex = $9,
                type_of_form = $10,
                is_group_event = $11,
                is_weapon_event = $12,
                is_taolu_event = $13,
                is_nandu_event = $14
            WHERE event_id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.age_group_id.unwrap_or(existing.age_group_id))
        .bind(req.english_name.as_ref().unwrap_or(&existing.english_name))
        .bind(req.chinese_name.as_ref().unwrap_or(&existing.chinese_name))
        .bind(req.description.as_ref().unwrap_or(&existing.description))
        .bind(
            req.judging_criteria
                .as_ref()
                .unwrap_or(&existing.judging_criteria),
        )
        .bind(req.rules.as_ref().unwrap_or(&existing.rules))
        .bind(req.skill_level.as_ref().unwrap_or(&existing.skill_level))
        .bind(req.sex.as_ref().unwrap_or(&existing.sex))
        .bind(req.type_of_form.as_ref().unwrap_or(&existing.type_of_form))
        .bind(req.is_group_event.unwrap_or(existing.is_group_event))
        .bind(req.is_weapon_event.unwrap_or(existing.is_weapon_event))
        .bind(req.is_taolu_event.unwrap_or(existing.is_taolu_event))
        .bind(req.is_nandu_event.unwrap_or(existing.is_nandu_event))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This event already exists"))?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    // Age groups.

    pub async fn list_age_groups(&self) -> Result<Vec<AgeGroup>> {
        let groups = sqlx::query_as::<_, AgeGroup>(
            r#"
            SELECT age_group_id, min_age, max_age, is_active
            FROM age_groups
            ORDER BY min_age, max_age
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(groups)
    }

    pub async fn find_age_group(&self, id: Uuid) -> Result<AgeGroup> {
        let group = sqlx::query_as::<_, AgeGroup>(
            r#"
            SELECT age_group_id, min_age, max_age, is_active
            FROM age_groups
            WHERE age_group_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    pub async fn create_age_group(&self, req: &CreateAgeGroupRequest) -> Result<AgeGroup> {
        let group = sqlx::query_as::<_, AgeGroup>(
            r#"
            INSERT INTO age_groups (min_age, max_age, is_active)
            VALUES ($1, $2, $3)
            RETURNING age_group_id, min_age, max_age, is_active
            "#,
        )
        .bind(req.min_age)
        .bind(req.max_age)
        .bind(req.is_active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This age group already exists"))?;

        Ok(group)
    }

    pub async fn update_age_group(
        &self,
        id: Uuid,
        existing: &AgeGroup,
        req: &UpdateAgeGroupRequest,
    ) -> Result<AgeGroup> {
        let group = sqlx::query_as::<_, AgeGroup>(
            r#"
            UPDATE age_groups
            SET min_age = $2,
                max_age = $3,
                is_active = $4
            WHERE age_group_id = $1
            RETURNING age_group_id, min_age, max_age, is_active
            "#,
        )
        .bind(id)
        .bind(req.min_age.unwrap_or(existing.min_age))
        .bind(req.max_age.unwrap_or(existing.max_age))
        .bind(req.is_active.unwrap_or(existing.is_active))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This age group already exists"))?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    pub async fn delete_age_group(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM age_groups WHERE age_group_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
