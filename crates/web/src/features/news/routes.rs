use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_news, delete_news, latest_news, list_all_news, list_news, update_news,
};
use crate::middleware::auth::{JwtKeys, require_auth, require_staff};

pub fn routes(keys: JwtKeys) -> Router<Database> {
    let staff = Router::new()
        .route("/all", get(list_all_news))
        .route("/", post(create_news))
        .route("/:news_id", put(update_news))
        .route("/:news_id", delete(delete_news))
        .route_layer(middleware::from_fn(require_staff))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/", get(list_news))
        .route("/latest", get(latest_news))
        .merge(staff)
}
