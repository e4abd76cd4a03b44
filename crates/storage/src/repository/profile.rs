use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth::SignupRequest;
use crate::dto::profile::UpdateProfileRequest;
use crate::error::{Result, StorageError};
use crate::models::{Profile, UserAccount};

/// Repository for user accounts and their profiles.
pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create the account and its profile in one transaction. The password
    /// arrives already hashed; the web layer owns bcrypt.
    pub async fn create_account(&self, req: &SignupRequest, password_hash: &str) -> Result<Profile> {
        let mut tx = self.pool.begin().await?;

        let account = sqlx::query_as::<_, UserAccount>(
            r#"
            INSERT INTO user_accounts (username, password_hash)
            VALUES ($1, $2)
            RETURNING user_id, username, password_hash, is_staff, created_at
            "#,
        )
        .bind(&req.username)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This username is already in use"))?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (
                user_id, first_name, middle_name, last_name, birth_date, sex,
                skill_level, email, phone_number, school_or_club, usawkf_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING profile_id, user_id, first_name, middle_name, last_name,
                      birth_date, sex, skill_level, email, phone_number,
                      school_or_club, usawkf_id, is_judge, created_at
            "#,
        )
        .bind(account.user_id)
        .bind(&req.first_name)
        .bind(&req.middle_name)
        .bind(&req.last_name)
        .bind(req.birth_date)
        .bind(&req.sex)
        .bind(&req.skill_level)
        .bind(&req.email)
        .bind(&req.phone_number)
        .bind(&req.school_or_club)
        .bind(&req.usawkf_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This email is already in use"))?;

        tx.commit().await?;

        Ok(profile)
    }

    pub async fn find_account_by_username(&self, username: &str) -> Result<UserAccount> {
        let account = sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT user_id, username, password_hash, is_staff, created_at
            FROM user_accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(account)
    }

    pub async fn find_account_by_id(&self, user_id: Uuid) -> Result<UserAccount> {
        let account = sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT user_id, username, password_hash, is_staff, created_at
            FROM user_accounts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(account)
    }

    pub async fn find_by_id(&self, profile_id: Uuid) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT profile_id, user_id, first_name, middle_name, last_name,
                   birth_date, sex, skill_level, email, phone_number,
                   school_or_club, usawkf_id, is_judge, created_at
            FROM profiles
            WHERE profile_id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(profile)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT profile_id, user_id, first_name, middle_name, last_name,
                   birth_date, sex, skill_level, email, phone_number,
                   school_or_club, usawkf_id, is_judge, created_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(profile)
    }

    /// List profiles ordered by last then first name.
    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Profile>> {
        let profiles = sqlx::query_as::<_, Profile>(
            r#"
            SELECT profile_id, user_id, first_name, middle_name, last_name,
                   birth_date, sex, skill_level, email, phone_number,
                   school_or_club, usawkf_id, is_judge, created_at
            FROM profiles
            ORDER BY last_name, first_name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(profiles)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
            .fetch_one(self.pool)
            .await?;

        Ok(count.0)
    }

    /// Apply a partial update to the caller's own profile.
    pub async fn update(&self, profile_id: Uuid, req: &UpdateProfileRequest) -> Result<Profile> {
        let existing = self.find_by_id(profile_id).await?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET email = $2,
                phone_number = $3,
                school_or_club = $4,
                usawkf_id = $5,
                skill_level = $6
            WHERE profile_id = $1
            RETURNING profile_id, user_id, first_name, middle_name, last_name,
                      birth_date, sex, skill_level, email, phone_number,
                      school_or_club, usawkf_id, is_judge, created_at
            "#,
        )
        .bind(profile_id)
        .bind(req.email.as_ref().unwrap_or(&existing.email))
        .bind(req.phone_number.as_ref().unwrap_or(&existing.phone_number))
        .bind(
            req.school_or_club
                .as_ref()
                .unwrap_or(&existing.school_or_club),
        )
        .bind(req.usawkf_id.as_ref().unwrap_or(&existing.usawkf_id))
        .bind(req.skill_level.as_ref().unwrap_or(&existing.skill_level))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("This email is already in use"))?
        .ok_or(StorageError::NotFound)?;

        Ok(profile)
    }

    pub async fn set_judge(&self, profile_id: Uuid, is_judge: bool) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET is_judge = $2
            WHERE profile_id = $1
            RETURNING profile_id, user_id, first_name, middle_name, last_name,
                      birth_date, sex, skill_level, email, phone_number,
                      school_or_club, usawkf_id, is_judge, created_at
            "#,
        )
        .bind(profile_id)
        .bind(is_judge)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(profile)
    }
}
