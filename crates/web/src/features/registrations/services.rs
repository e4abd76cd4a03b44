use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::registration::{CreateRegistrantRequest, CreateRegistrationRequest, MyRegistrationEntry},
    error::StorageError,
    models::{Registrant, Registration},
    repository::event::EventRepository,
    repository::profile::ProfileRepository,
    repository::registration::RegistrationRepository,
    repository::tournament::TournamentRepository,
    repository::tournament_event::TournamentEventRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::middleware::auth::AuthUser;

/// Create a registrant for the calling user. Individuals always consist of
/// the caller alone; groups carry the member list from the request, which may
/// or may not include the caller (a coach can enter a team).
pub async fn create_registrant(
    pool: &PgPool,
    user: &AuthUser,
    req: &CreateRegistrantRequest,
) -> WebResult<(Registrant, Vec<Uuid>)> {
    let tournaments = TournamentRepository::new(pool);
    let tournament = tournaments.find_by_id(req.tournament_id).await?;

    if !tournament.is_active || tournament.is_locked {
        return Err(WebError::BadRequest(
            "This tournament is not accepting registrants".to_string(),
        ));
    }
    if !tournament.is_registration_window_open(Utc::now()) {
        return Err(WebError::BadRequest(
            "Registration is closed for this tournament".to_string(),
        ));
    }

    let member_profile_ids = if req.is_group {
        req.member_profile_ids.clone()
    } else {
        vec![user.profile_id]
    };

    let profiles = ProfileRepository::new(pool);
    for profile_id in &member_profile_ids {
        if let Err(e) = profiles.find_by_id(*profile_id).await {
            return Err(match e {
                StorageError::NotFound => {
                    WebError::BadRequest(format!("Profile {} does not exist", profile_id))
                }
                other => other.into(),
            });
        }
    }

    let repo = RegistrationRepository::new(pool);
    let registrant = repo.create_registrant(req, &member_profile_ids).await?;

    Ok((registrant, member_profile_ids))
}

/// Fetch a registrant with its member list. Members and staff only.
pub async fn get_registrant(
    pool: &PgPool,
    user: &AuthUser,
    registrant_id: Uuid,
) -> WebResult<(Registrant, Vec<Uuid>)> {
    let repo = RegistrationRepository::new(pool);

    let registrant = repo.find_registrant(registrant_id).await?;
    if !user.is_staff && !repo.is_registrant_member(registrant_id, user.profile_id).await? {
        return Err(WebError::Forbidden);
    }

    let member_profile_ids = repo.registrant_member_ids(registrant_id).await?;
    Ok((registrant, member_profile_ids))
}

/// Register a registrant into a tournament event, running the full guard
/// chain: membership, tournament window, event state, kind match, age
/// eligibility, capacity.
pub async fn create_registration(
    pool: &PgPool,
    user: &AuthUser,
    req: &CreateRegistrationRequest,
) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);

    let registrant = repo.find_registrant(req.registrant_id).await?;
    if !user.is_staff && !repo.is_registrant_member(registrant.registrant_id, user.profile_id).await?
    {
        return Err(WebError::Forbidden);
    }

    let te_repo = TournamentEventRepository::new(pool);
    let tournament_event = te_repo.find_by_id(req.tournament_event_id).await?;

    if tournament_event.tournament_id != registrant.tournament_id {
        return Err(WebError::BadRequest(
            "This registrant belongs to a different tournament".to_string(),
        ));
    }

    let tournaments = TournamentRepository::new(pool);
    let tournament = tournaments.find_by_id(tournament_event.tournament_id).await?;

    if !tournament.is_active || tournament.is_locked {
        return Err(WebError::BadRequest(
            "This tournament is not accepting registrations".to_string(),
        ));
    }
    if !tournament.is_registration_window_open(Utc::now()) {
        return Err(WebError::BadRequest(
            "Registration is closed for this tournament".to_string(),
        ));
    }
    if !tournament_event.accepts_registrations() {
        return Err(WebError::BadRequest(
            "This event is not accepting registrations".to_string(),
        ));
    }

    let events = EventRepository::new(pool);
    let event = events.find_by_id(tournament_event.event_id).await?;

    if event.is_group_event != registrant.is_group {
        let message = if event.is_group_event {
            "This event only admits group registrants"
        } else {
            "This event only admits individual registrants"
        };
        return Err(WebError::BadRequest(message.to_string()));
    }

    // Every member has to fit the event's age group on the tournament's
    // opening day.
    let age_group = events.find_age_group(event.age_group_id).await?;
    let opening_day = tournament.start_at.date_naive();
    let profiles = ProfileRepository::new(pool);
    for member_id in repo.registrant_member_ids(registrant.registrant_id).await? {
        let member = profiles.find_by_id(member_id).await?;
        if !age_group.contains(member.age_on(opening_day)) {
            return Err(WebError::BadRequest(format!(
                "{} {} is outside the {} age group for this event",
                member.first_name,
                member.last_name,
                age_group.label()
            )));
        }
    }

    let live = repo.count_live_for_event(tournament_event.tournament_event_id).await?;
    if live >= i64::from(tournament_event.max_participants) {
        return Err(WebError::BadRequest("This event is full".to_string()));
    }

    Ok(repo
        .create_registration(req.registrant_id, req.tournament_event_id, req.notes.as_deref())
        .await?)
}

pub async fn list_my_registrations(
    pool: &PgPool,
    profile_id: Uuid,
) -> WebResult<Vec<MyRegistrationEntry>> {
    let repo = RegistrationRepository::new(pool);
    Ok(repo.list_for_profile(profile_id).await?)
}

/// Withdraw a registration. Competitors can only withdraw registrations
/// belonging to a registrant they are a member of; staff can withdraw any.
pub async fn withdraw(pool: &PgPool, user: &AuthUser, registration_id: Uuid) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);

    let registration = repo.find_registration(registration_id).await?;
    if !user.is_staff
        && !repo.is_registrant_member(registration.registrant_id, user.profile_id).await?
    {
        return Err(WebError::Forbidden);
    }

    Ok(repo.withdraw(registration_id).await?)
}

pub async fn list_for_event(
    pool: &PgPool,
    tournament_event_id: Uuid,
) -> WebResult<Vec<Registration>> {
    let te_repo = TournamentEventRepository::new(pool);
    te_repo.find_by_id(tournament_event_id).await?;

    let repo = RegistrationRepository::new(pool);
    Ok(repo.list_for_event(tournament_event_id).await?)
}

pub async fn schedule(
    pool: &PgPool,
    registration_id: Uuid,
    performance_order: i32,
) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);
    Ok(repo.schedule(registration_id, performance_order).await?)
}

pub async fn set_paid(pool: &PgPool, registration_id: Uuid, value: bool) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);
    Ok(repo.set_paid(registration_id, value).await?)
}

pub async fn set_checked_in(
    pool: &PgPool,
    registration_id: Uuid,
    value: bool,
) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);
    Ok(repo.set_checked_in(registration_id, value).await?)
}

pub async fn set_disqualified(
    pool: &PgPool,
    registration_id: Uuid,
    value: bool,
) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);
    Ok(repo.set_disqualified(registration_id, value).await?)
}

pub async fn set_completed(
    pool: &PgPool,
    registration_id: Uuid,
    value: bool,
) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);
    Ok(repo.set_completed(registration_id, value).await?)
}
