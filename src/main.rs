//! Service entry point: environment config, store bootstrap, routes.

use std::sync::Arc;

use filmoteka::{catalog_routes, common_routes, ensure_database_exists, AppState, PgCatalog};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("filmoteka=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/filmoteka".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    let catalog = PgCatalog::new(pool);
    catalog.ensure_tables().await?;
    let state = AppState {
        store: Arc::new(catalog),
    };

    let app = axum::Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("filmoteka listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
