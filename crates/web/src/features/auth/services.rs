use sqlx::PgPool;
use storage::{
    dto::auth::{LoginRequest, SignupRequest, TokenResponse},
    error::StorageError,
    repository::profile::ProfileRepository,
};

use crate::error::{WebError, WebResult};
use crate::middleware::auth::JwtKeys;

/// Create the account and profile, then log the new user straight in.
pub async fn signup(pool: &PgPool, keys: &JwtKeys, req: &SignupRequest) -> WebResult<TokenResponse> {
    let repo = ProfileRepository::new(pool);

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)?;
    let profile = repo.create_account(req, &password_hash).await?;
    let account = repo.find_account_by_id(profile.user_id).await?;

    let token = keys.issue(&account, &profile)?;
    Ok(TokenResponse::bearer(token, profile.into()))
}

/// Verify credentials and issue a token. Unknown usernames and wrong
/// passwords are indistinguishable to the caller.
pub async fn login(pool: &PgPool, keys: &JwtKeys, req: &LoginRequest) -> WebResult<TokenResponse> {
    let repo = ProfileRepository::new(pool);

    let account = repo
        .find_account_by_username(&req.username)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::Unauthorized,
            other => WebError::from(other),
        })?;

    if !bcrypt::verify(&req.password, &account.password_hash)? {
        return Err(WebError::Unauthorized);
    }

    let profile = repo.find_by_user_id(account.user_id).await?;

    let token = keys.issue(&account, &profile)?;
    Ok(TokenResponse::bearer(token, profile.into()))
}
