use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Tournament;

/// Request payload for creating a new tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub start_at: DateTime<Utc>,

    pub end_at: DateTime<Utc>,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[serde(default)]
    pub registration_open: bool,

    pub registration_start_at: DateTime<Utc>,

    pub early_registration_end_at: Option<DateTime<Utc>>,

    pub registration_end_at: DateTime<Utc>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_locked: bool,
}

fn default_true() -> bool {
    true
}

impl CreateTournamentRequest {
    /// Temporal orderings that span multiple fields. Mirrors the database
    /// check constraints so bad payloads fail before hitting the pool.
    pub fn validate_schedule(&self) -> Result<(), &'static str> {
        if self.start_at > self.end_at {
            return Err("The start date must be the same day as or before the end date");
        }

        if self.registration_start_at > self.registration_end_at {
            return Err("The registration start must be before the registration end");
        }

        if let Some(early_end) = self.early_registration_end_at {
            if self.registration_start_at > early_end {
                return Err("The registration start must be before the early registration end");
            }
            if early_end > self.registration_end_at {
                return Err("The early registration end must be before the registration end");
            }
        }

        Ok(())
    }
}

/// Request payload for updating an existing tournament. The early deadline is
/// nullable, so it distinguishes an absent field (keep) from an explicit
/// `null` (clear).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTournamentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub start_at: Option<DateTime<Utc>>,

    pub end_at: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,

    pub registration_open: Option<bool>,

    pub registration_start_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "crate::dto::common::double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub early_registration_end_at: Option<Option<DateTime<Utc>>>,

    pub registration_end_at: Option<DateTime<Utc>>,

    pub is_active: Option<bool>,

    pub is_locked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentResponse {
    pub tournament_id: uuid::Uuid,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: String,
    pub registration_open: bool,
    pub registration_start_at: DateTime<Utc>,
    pub early_registration_end_at: Option<DateTime<Utc>>,
    pub registration_end_at: DateTime<Utc>,
    /// Whether the early registration period is still running.
    pub is_early_registration: bool,
    pub is_active: bool,
    pub is_locked: bool,
}

impl From<Tournament> for TournamentResponse {
    fn from(t: Tournament) -> Self {
        let is_early_registration = t.is_early_registration(Utc::now());
        Self {
            tournament_id: t.tournament_id,
            name: t.name,
            start_at: t.start_at,
            end_at: t.end_at,
            location: t.location,
            registration_open: t.registration_open,
            registration_start_at: t.registration_start_at,
            early_registration_end_at: t.early_registration_end_at,
            registration_end_at: t.registration_end_at,
            is_early_registration,
            is_active: t.is_active,
            is_locked: t.is_locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn request() -> CreateTournamentRequest {
        CreateTournamentRequest {
            name: "Ohio International 2024".to_string(),
            start_at: at("2024-08-01 09:00:00"),
            end_at: at("2024-08-01 18:00:00"),
            location: "Mintonette Sports".to_string(),
            registration_open: true,
            registration_start_at: at("2024-05-01 00:00:00"),
            early_registration_end_at: Some(at("2024-06-01 23:59:59")),
            registration_end_at: at("2024-07-01 23:59:59"),
            is_active: true,
            is_locked: false,
        }
    }

    #[test]
    fn well_ordered_schedule_passes() {
        assert!(request().validate_schedule().is_ok());
    }

    #[test]
    fn rejects_start_after_end() {
        let mut req = request();
        req.end_at = at("2024-07-31 09:00:00");
        assert!(req.validate_schedule().is_err());
    }

    #[test]
    fn rejects_early_deadline_outside_window() {
        let mut req = request();
        req.early_registration_end_at = Some(at("2024-04-01 00:00:00"));
        assert!(req.validate_schedule().is_err());

        let mut req = request();
        req.early_registration_end_at = Some(at("2024-07-15 00:00:00"));
        assert!(req.validate_schedule().is_err());
    }

    #[test]
    fn no_early_deadline_is_fine() {
        let mut req = request();
        req.early_registration_end_at = None;
        assert!(req.validate_schedule().is_ok());
    }

    #[test]
    fn update_can_clear_the_early_deadline() {
        let req: UpdateTournamentRequest =
            serde_json::from_str(r#"{"early_registration_end_at": null}"#).unwrap();
        assert_eq!(req.early_registration_end_at, Some(None));

        let req: UpdateTournamentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.early_registration_end_at, None);
    }

    #[test]
    fn response_reports_a_running_early_period() {
        use crate::models::Tournament;
        use chrono::Duration;

        let now = Utc::now();
        let tournament = Tournament {
            tournament_id: uuid::Uuid::new_v4(),
            name: "Ohio International 2024".to_string(),
            start_at: now + Duration::days(60),
            end_at: now + Duration::days(61),
            location: "Mintonette Sports".to_string(),
            registration_open: true,
            registration_start_at: now - Duration::days(1),
            early_registration_end_at: Some(now + Duration::days(7)),
            registration_end_at: now + Duration::days(30),
            is_active: true,
            is_locked: false,
            created_at: now - Duration::days(2),
        };

        let response = TournamentResponse::from(tournament.clone());
        assert!(response.is_early_registration);

        let mut past = tournament;
        past.early_registration_end_at = Some(now - Duration::hours(1));
        let response = TournamentResponse::from(past);
        assert!(!response.is_early_registration);
    }
}
