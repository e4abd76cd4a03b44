pub mod auth;
pub mod events;
pub mod news;
pub mod profiles;
pub mod registrations;
pub mod scoring;
pub mod tournaments;
