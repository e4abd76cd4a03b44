use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_tournament, create_tournament_event, delete_tournament, delete_tournament_event,
    get_tournament, get_tournament_event, list_tournament_events, list_tournaments,
    update_tournament, update_tournament_event,
};
use crate::middleware::auth::{JwtKeys, require_auth, require_staff};

pub fn routes(keys: JwtKeys) -> Router<Database> {
    let staff = Router::new()
        .route("/", post(create_tournament))
        .route("/:tournament_id", put(update_tournament))
        .route("/:tournament_id", delete(delete_tournament))
        .route("/:tournament_id/events", post(create_tournament_event))
        .route(
            "/:tournament_id/events/:tournament_event_id",
            put(update_tournament_event),
        )
        .route(
            "/:tournament_id/events/:tournament_event_id",
            delete(delete_tournament_event),
        )
        .route_layer(middleware::from_fn(require_staff))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/", get(list_tournaments))
        .route("/:tournament_id", get(get_tournament))
        .route("/:tournament_id/events", get(list_tournament_events))
        .route(
            "/:tournament_id/events/:tournament_event_id",
            get(get_tournament_event),
        )
        .merge(staff)
}
