use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_age_group, create_event, delete_age_group, delete_event, get_event, list_age_groups,
    list_events, update_age_group, update_event,
};
use crate::middleware::auth::{JwtKeys, require_auth, require_staff};

pub fn routes(keys: JwtKeys) -> Router<Database> {
    let staff = Router::new()
        .route("/", post(create_event))
        .route("/:event_id", put(update_event))
        .route("/:event_id", delete(delete_event))
        .route_layer(middleware::from_fn(require_staff))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/", get(list_events))
        .route("/:event_id", get(get_event))
        .merge(staff)
}

pub fn age_group_routes(keys: JwtKeys) -> Router<Database> {
    let staff = Router::new()
        .route("/", post(create_age_group))
        .route("/:age_group_id", put(update_age_group))
        .route("/:age_group_id", delete(delete_age_group))
        .route_layer(middleware::from_fn(require_staff))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new().route("/", get(list_age_groups)).merge(staff)
}
