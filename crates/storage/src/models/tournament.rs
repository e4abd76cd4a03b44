use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub name: String,
    pub start_at: chrono::DateTime<chrono::Utc>,
    pub end_at: chrono::DateTime<chrono::Utc>,
    pub location: String,
    pub registration_open: bool,
    pub registration_start_at: chrono::DateTime<chrono::Utc>,
    pub early_registration_end_at: Option<chrono::DateTime<chrono::Utc>>,
    pub registration_end_at: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
    pub is_locked: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Tournament {
    /// Whether the registration window admits new registrations at `now`.
    /// Both the flag and the clock have to agree.
    pub fn is_registration_window_open(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.registration_open
            && now >= self.registration_start_at
            && now <= self.registration_end_at
    }

    /// Whether `now` still falls inside the early registration period.
    pub fn is_early_registration(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        match self.early_registration_end_at {
            Some(early_end) => now >= self.registration_start_at && now <= early_end,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, Utc};

    fn at(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn tournament(early_end: Option<&str>) -> Tournament {
        Tournament {
            tournament_id: Uuid::new_v4(),
            name: "Ohio International 2024".to_string(),
            start_at: at("2024-08-01 09:00:00"),
            end_at: at("2024-08-01 18:00:00"),
            location: "Mintonette Sports".to_string(),
            registration_open: true,
            registration_start_at: at("2024-05-01 00:00:00"),
            early_registration_end_at: early_end.map(at),
            registration_end_at: at("2024-07-01 23:59:59"),
            is_active: true,
            is_locked: false,
            created_at: at("2024-04-01 00:00:00"),
        }
    }

    #[test]
    fn window_open_between_start_and_end() {
        let t = tournament(None);

        assert!(t.is_registration_window_open(at("2024-06-15 12:00:00")));
        assert!(!t.is_registration_window_open(at("2024-04-30 23:59:59")));
        assert!(!t.is_registration_window_open(at("2024-07-02 00:00:00")));
    }

    #[test]
    fn window_closed_when_flag_off() {
        let mut t = tournament(None);
        t.registration_open = false;

        assert!(!t.is_registration_window_open(at("2024-06-15 12:00:00")));
    }

    #[test]
    fn early_registration_requires_deadline() {
        let t = tournament(Some("2024-06-01 23:59:59"));
        assert!(t.is_early_registration(at("2024-05-15 12:00:00")));
        assert!(!t.is_early_registration(at("2024-06-02 00:00:00")));

        let t = tournament(None);
        assert!(!t.is_early_registration(at("2024-05-15 12:00:00")));
    }
}
