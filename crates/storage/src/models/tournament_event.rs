use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An event instance scheduled within a tournament: which mat it runs on, in
/// what order, and who judges it. `event_order` is null until the schedule is
/// drawn up; only ordered events appear on the judging dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TournamentEvent {
    pub tournament_event_id: Uuid,
    pub tournament_id: Uuid,
    pub event_id: Uuid,
    pub head_judge_id: Option<Uuid>,
    pub event_order: Option<i32>,
    pub mat_or_location: String,
    pub max_participants: i32,
    pub registration_open: bool,
    pub is_active: bool,
    pub is_locked: bool,
}

impl TournamentEvent {
    /// Whether this event accepts new registrations, independent of the
    /// tournament-level window.
    pub fn accepts_registrations(&self) -> bool {
        self.registration_open && self.is_active && !self.is_locked
    }
}
