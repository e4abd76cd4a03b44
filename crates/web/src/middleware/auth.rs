use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use storage::models::{Profile, UserAccount};
use uuid::Uuid;

use crate::error::WebError;

/// Signed into every token; carries enough to authorize without a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub profile_id: Uuid,
    pub is_judge: bool,
    pub is_staff: bool,
    pub iat: i64,
    pub exp: i64,
}

/// The authenticated caller, inserted into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub profile_id: Uuid,
    pub is_judge: bool,
    pub is_staff: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            profile_id: claims.profile_id,
            is_judge: claims.is_judge,
            is_staff: claims.is_staff,
        }
    }
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    pub fn issue(&self, account: &UserAccount, profile: &Profile) -> Result<String, WebError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.user_id,
            profile_id: profile.profile_id,
            is_judge: profile.is_judge,
            is_staff: account.is_staff,
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(self.ttl_hours)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| WebError::InternalServerError(format!("Token encoding error: {}", e)))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, WebError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| WebError::Unauthorized)
    }
}

/// Authenticate the bearer token and stash the caller in extensions.
pub async fn require_auth(
    State(keys): State<JwtKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(WebError::Unauthorized)?;

    let claims = keys.verify(token)?;
    req.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(req).await)
}

/// Layered inside [`require_auth`]; rejects callers without the judge flag.
pub async fn require_judge(req: Request, next: Next) -> Result<Response, WebError> {
    let user = req
        .extensions()
        .get::<AuthUser>()
        .ok_or(WebError::Unauthorized)?;

    if !user.is_judge {
        tracing::warn!(user_id = %user.user_id, "Non-judge attempted to access judging routes");
        return Err(WebError::Forbidden);
    }

    Ok(next.run(req).await)
}

/// Layered inside [`require_auth`]; rejects callers without the staff flag.
pub async fn require_staff(req: Request, next: Next) -> Result<Response, WebError> {
    let user = req
        .extensions()
        .get::<AuthUser>()
        .ok_or(WebError::Unauthorized)?;

    if !user.is_staff {
        tracing::warn!(user_id = %user.user_id, "Non-staff attempted to access staff routes");
        return Err(WebError::Forbidden);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn account(is_staff: bool) -> UserAccount {
        UserAccount {
            user_id: Uuid::new_v4(),
            username: "jdoe".to_string(),
            password_hash: "irrelevant".to_string(),
            is_staff,
            created_at: Utc::now(),
        }
    }

    fn profile(user_id: Uuid, is_judge: bool) -> Profile {
        Profile {
            profile_id: Uuid::new_v4(),
            user_id,
            first_name: "John".to_string(),
            middle_name: None,
            last_name: "Doe".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            sex: "male".to_string(),
            skill_level: None,
            email: "jdoe@example.com".to_string(),
            phone_number: None,
            school_or_club: None,
            usawkf_id: None,
            is_judge,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let keys = JwtKeys::new("test-secret", 1);
        let account = account(true);
        let profile = profile(account.user_id, true);

        let token = keys.issue(&account, &profile).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, account.user_id);
        assert_eq!(claims.profile_id, profile.profile_id);
        assert!(claims.is_judge);
        assert!(claims.is_staff);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let keys = JwtKeys::new("test-secret", 1);
        let other = JwtKeys::new("other-secret", 1);
        let account = account(false);
        let profile = profile(account.user_id, false);

        let token = other.issue(&account, &profile).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = JwtKeys::new("test-secret", 1);
        assert!(keys.verify("not-a-token").is_err());
    }
}
