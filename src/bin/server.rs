//! Server entrypoint: loads configuration from the environment, prepares the
//! store per the schema policy, and mounts common and tutorial routes.

use axum::{extract::DefaultBodyLimit, Router};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tutorials_api::{
    common_routes, ensure_database_exists, prepare_store, tutorial_routes, AppState, SchemaPolicy,
    ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tutorials_api=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    if config.schema_policy == SchemaPolicy::AutoCreate {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    prepare_store(&pool, &config.schema, config.schema_policy).await?;

    let state = AppState::new(pool, &config.schema);
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", tutorial_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
