//! HTTP API wiring for the Timekeeper's Archive

pub mod handlers;

use axum::http::{header, HeaderValue, Method};
use axum::{routing::post, Router};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};

use timekeeper_artifacts::{ArchiveRepositories, ArchiveState};
use timekeeper_auth::AuthConfig;
use timekeeper_common::config::Config;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let repos = ArchiveRepositories::new(pool);

    let auth = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        environment: config.environment,
    };

    let state = ArchiveState { repos, auth };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Timekeeper's Archive Server Running" }),
        )
        .route("/jwt", post(handlers::session::issue_session))
        .route("/logout", post(handlers::session::logout))
        .merge(timekeeper_artifacts::routes())
        .layer(cors_layer(config))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Cookie-credentialed CORS. Production pins the configured origins;
/// development mirrors the request origin so local frontends on any port
/// can talk to the API.
fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.environment.is_production() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    } else {
        AllowOrigin::mirror_request()
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
