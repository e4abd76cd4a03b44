use axum::{Extension, Router, routing::post};
use storage::Database;

use super::handlers::{login, signup};
use crate::middleware::auth::JwtKeys;

pub fn routes(keys: JwtKeys) -> Router<Database> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .layer(Extension(keys))
}
