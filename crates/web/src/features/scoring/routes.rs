use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    get_scoring_sheet, list_judging_tournaments, list_scheduled_events, list_scoreable_competitors,
    submit_final_score, submit_judge_score,
};
use crate::middleware::auth::{JwtKeys, require_auth, require_judge};

pub fn routes(keys: JwtKeys) -> Router<Database> {
    Router::new()
        .route("/tournaments", get(list_judging_tournaments))
        .route("/tournaments/:tournament_id/events", get(list_scheduled_events))
        .route(
            "/tournaments/:tournament_id/events/:tournament_event_id/competitors",
            get(list_scoreable_competitors),
        )
        .route(
            "/tournaments/:tournament_id/events/:tournament_event_id/competitors/:performance_order",
            get(get_scoring_sheet),
        )
        .route(
            "/tournaments/:tournament_id/events/:tournament_event_id/competitors/:performance_order/judge-score",
            post(submit_judge_score),
        )
        .route(
            "/tournaments/:tournament_id/events/:tournament_event_id/competitors/:performance_order/final-score",
            post(submit_final_score),
        )
        .route_layer(middleware::from_fn(require_judge))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
