use anyhow::Context;
use storage::{Database, DisciplineCatalog};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use features::{age_groups, athletes, goals, records, stadiums, venues};
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
        stadiums::handlers::list_stadiums,
        stadiums::handlers::get_stadium,
        stadiums::handlers::list_stadium_disciplines,
        stadiums::handlers::create_stadium,
        stadiums::handlers::update_stadium,
        stadiums::handlers::delete_stadium,
        stadiums::handlers::list_disciplines,
        stadiums::handlers::get_discipline_catalog,
        stadiums::handlers::create_discipline,
        stadiums::handlers::delete_discipline,
        venues::handlers::list_venues,
        venues::handlers::create_venue,
        venues::handlers::delete_venue,
        age_groups::handlers::list_age_groups,
        age_groups::handlers::create_age_group,
        age_groups::handlers::delete_age_group,
        records::handlers::list_records,
        records::handlers::get_record,
        records::handlers::create_record,
        records::handlers::update_record,
        records::handlers::delete_record,
        goals::handlers::list_goals,
        goals::handlers::get_goal,
        goals::handlers::create_goal,
        goals::handlers::update_goal,
        goals::handlers::delete_goal,
    ),
    components(
        schemas(
            storage::DisciplineType,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::stadium::CreateStadiumRequest,
            storage::dto::stadium::UpdateStadiumRequest,
            storage::dto::stadium::CreateDisciplineRequest,
            storage::dto::stadium::DisciplineResponse,
            storage::dto::stadium::DisciplineCatalogResponse,
            storage::dto::venue::CreateVenueRequest,
            storage::dto::venue::VenueResponse,
            storage::dto::age_group::CreateAgeGroupRequest,
            storage::dto::record::CreateRecordRequest,
            storage::dto::record::UpdateRecordRequest,
            storage::dto::record::RecordResponse,
            storage::dto::goal::CreateGoalRequest,
            storage::dto::goal::UpdateGoalRequest,
            storage::dto::goal::GoalResponse,
            storage::models::Stadium,
            storage::models::AgeGroup,
        )
    ),
    tags(
        (name = "athletes", description = "Athletes holding records or chasing goals"),
        (name = "stadiums", description = "Stadiums and the disciplines they hold"),
        (name = "disciplines", description = "Disciplines and their road/field classification"),
        (name = "venues", description = "Venues where records were set"),
        (name = "age-groups", description = "Age group labels"),
        (name = "records", description = "Club records"),
        (name = "goals", description = "Athlete goals"),
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
                        .bearer_format("API Key")
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

    tracing::info!("Starting athletics records API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config.redacted_database_url()
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

    let catalog = DisciplineCatalog::from_comma_separated(config.road_disciplines.as_deref());
    tracing::info!(
        "Classifying {} disciplines as road events",
        catalog.road_names().len()
    );

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API keys configured, every mutation will be rejected");
    } else {
        tracing::info!("Loaded {} API keys", api_keys.len());
    }

    let state = AppState::new(db, catalog);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state);

    let bind_address = config.bind_address();
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
