pub mod auth;
pub mod common;
pub mod event;
pub mod news;
pub mod profile;
pub mod registration;
pub mod scoring;
pub mod tournament;
pub mod tournament_event;
