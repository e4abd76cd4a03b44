use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::JwtKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::signup,
        features::auth::handlers::login,
        features::profiles::handlers::get_me,
        features::profiles::handlers::update_me,
        features::profiles::handlers::list_profiles,
        features::profiles::handlers::set_judge,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::get_tournament,
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::update_tournament,
        features::tournaments::handlers::delete_tournament,
        features::tournaments::handlers::list_tournament_events,
        features::tournaments::handlers::get_tournament_event,
        features::tournaments::handlers::create_tournament_event,
        features::tournaments::handlers::update_tournament_event,
        features::tournaments::handlers::delete_tournament_event,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::events::handlers::list_age_groups,
        features::events::handlers::create_age_group,
        features::events::handlers::update_age_group,
        features::events::handlers::delete_age_group,
        features::registrations::handlers::create_registrant,
        features::registrations::handlers::get_registrant,
        features::registrations::handlers::create_registration,
        features::registrations::handlers::list_my_registrations,
        features::registrations::handlers::withdraw_registration,
        features::registrations::handlers::list_event_registrations,
        features::registrations::handlers::schedule_registration,
        features::registrations::handlers::mark_paid,
        features::registrations::handlers::check_in_registration,
        features::registrations::handlers::disqualify_registration,
        features::registrations::handlers::complete_registration,
        features::scoring::handlers::list_judging_tournaments,
        features::scoring::handlers::list_scheduled_events,
        features::scoring::handlers::list_scoreable_competitors,
        features::scoring::handlers::get_scoring_sheet,
        features::scoring::handlers::submit_judge_score,
        features::scoring::handlers::submit_final_score,
        features::news::handlers::list_news,
        features::news::handlers::latest_news,
        features::news::handlers::list_all_news,
        features::news::handlers::create_news,
        features::news::handlers::update_news,
        features::news::handlers::delete_news,
    ),
    components(
        schemas(
            storage::dto::auth::SignupRequest,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::TokenResponse,
            storage::dto::profile::ProfileResponse,
            storage::dto::profile::UpdateProfileRequest,
            storage::dto::profile::SetJudgeRequest,
            storage::dto::common::PaginationMeta,
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::UpdateTournamentRequest,
            storage::dto::tournament::TournamentResponse,
            storage::dto::tournament_event::CreateTournamentEventRequest,
            storage::dto::tournament_event::UpdateTournamentEventRequest,
            storage::dto::tournament_event::TournamentEventResponse,
            storage::dto::tournament_event::TournamentEventSummary,
            storage::dto::tournament_event::JudgeInfo,
            storage::dto::event::CreateAgeGroupRequest,
            storage::dto::event::UpdateAgeGroupRequest,
            storage::dto::event::AgeGroupResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::registration::CreateRegistrantRequest,
            storage::dto::registration::RegistrantResponse,
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::registration::MyRegistrationEntry,
            storage::dto::registration::ScheduleRegistrationRequest,
            storage::dto::registration::SetFlagRequest,
            storage::dto::scoring::SubmitJudgeScoreRequest,
            storage::dto::scoring::SubmitFinalScoreRequest,
            storage::dto::scoring::CompetitorEntry,
            storage::dto::scoring::ScheduledEventEntry,
            storage::dto::scoring::MatSchedule,
            storage::dto::scoring::JudgeScoreEntry,
            storage::dto::scoring::FinalScoreInfo,
            storage::dto::scoring::ScoringSheetResponse,
            storage::dto::news::CreateNewsRequest,
            storage::dto::news::UpdateNewsRequest,
            storage::dto::news::NewsResponse,
            storage::models::FinalScore,
            storage::models::JudgeScore,
        )
    ),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "profiles", description = "Competitor profiles"),
        (name = "tournaments", description = "Tournaments and their scheduled events"),
        (name = "events", description = "Event catalog and age groups"),
        (name = "registrations", description = "Registrants and event registrations"),
        (name = "scoring", description = "Judging dashboards and score entry"),
        (name = "news", description = "News articles"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting tournament API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let keys = JwtKeys::new(&config.jwt_secret, config.token_ttl_hours);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/auth", features::auth::routes(keys.clone()))
        .nest("/api/profiles", features::profiles::routes(keys.clone()))
        .nest("/api/tournaments", features::tournaments::routes(keys.clone()))
        .nest("/api/events", features::events::routes(keys.clone()))
        .nest("/api/age-groups", features::events::age_group_routes(keys.clone()))
        .nest(
            "/api/registrants",
            features::registrations::registrant_routes(keys.clone()),
        )
        .nest("/api/registrations", features::registrations::routes(keys.clone()))
        .nest("/api/scoring", features::scoring::routes(keys.clone()))
        .nest("/api/news", features::news::routes(keys))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
