use anyhow::Context;
use scoring::{CompetitionStore, JsonFileSource, SnapshotSource};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use features::{leaderboard, results, teams};
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        leaderboard::handlers::get_leaderboard,
        leaderboard::handlers::get_category_leaderboard,
        leaderboard::handlers::compute_leaderboard,
        teams::handlers::list_teams,
        teams::handlers::get_team,
        teams::handlers::create_team,
        teams::handlers::update_team,
        teams::handlers::replace_team,
        teams::handlers::delete_team,
        results::handlers::list_results,
        results::handlers::get_result,
        results::handlers::save_result,
        results::handlers::save_partial_result,
    ),
    components(
        schemas(
            scoring::dto::leaderboard::LeaderboardResponse,
            scoring::dto::leaderboard::CategoryStandings,
            scoring::dto::leaderboard::LeaderboardRow,
            scoring::dto::team::TeamPayload,
            scoring::dto::team::UpdateTeamRequest,
            scoring::dto::result::ResultPayload,
            scoring::dto::result::PartialResultRequest,
            scoring::models::Category,
            scoring::models::Team,
            scoring::models::TeamResult,
            scoring::models::LeaderboardEntry,
            scoring::models::Snapshot,
        )
    ),
    tags(
        (name = "leaderboard", description = "Computed standings"),
        (name = "teams", description = "Team roster"),
        (name = "results", description = "Recorded team results"),
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

    tracing::info!("Starting leaderboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = match &config.seed_file {
        Some(path) => {
            let source = JsonFileSource::new(path);
            tracing::info!("Seeding store from {} ({})", path.display(), source.name());
            let snapshot = source
                .snapshot()
                .await
                .context("Failed to load seed snapshot")?;
            tracing::info!(
                "Loaded {} teams and {} results",
                snapshot.teams.len(),
                snapshot.results.len()
            );
            CompetitionStore::with_snapshot(snapshot)
        }
        None => CompetitionStore::new(),
    };

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API_KEYS configured, write endpoints will reject every request");
    }

    let state = AppState::new(store);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = routes::app(state, api_keys).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
