pub mod handlers;
mod routes;
mod services;

pub use routes::{age_group_routes, routes};
