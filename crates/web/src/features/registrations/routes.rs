use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    check_in_registration, complete_registration, create_registrant, create_registration,
    disqualify_registration, get_registrant, list_event_registrations, list_my_registrations,
    mark_paid, schedule_registration, withdraw_registration,
};
use crate::middleware::auth::{JwtKeys, require_auth, require_staff};

pub fn registrant_routes(keys: JwtKeys) -> Router<Database> {
    Router::new()
        .route("/", post(create_registrant))
        .route("/:registrant_id", get(get_registrant))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}

pub fn routes(keys: JwtKeys) -> Router<Database> {
    let staff = Router::new()
        .route("/event/:tournament_event_id", get(list_event_registrations))
        .route("/:registration_id/schedule", post(schedule_registration))
        .route("/:registration_id/paid", post(mark_paid))
        .route("/:registration_id/check-in", post(check_in_registration))
        .route("/:registration_id/disqualify", post(disqualify_registration))
        .route("/:registration_id/complete", post(complete_registration))
        .route_layer(middleware::from_fn(require_staff));

    Router::new()
        .route("/", post(create_registration))
        .route("/mine", get(list_my_registrations))
        .route("/:registration_id/withdraw", post(withdraw_registration))
        .merge(staff)
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
