use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{get_me, list_profiles, set_judge, update_me};
use crate::middleware::auth::{JwtKeys, require_auth, require_staff};

pub fn routes(keys: JwtKeys) -> Router<Database> {
    let staff = Router::new()
        .route("/", get(list_profiles))
        .route("/:profile_id/judge", put(set_judge))
        .route_layer(middleware::from_fn(require_staff));

    Router::new()
        .route("/me", get(get_me))
        .route("/me", put(update_me))
        .merge(staff)
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
