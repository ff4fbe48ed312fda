//! ICD-10 catalog HTTP server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use icd10_catalog::Catalog;
use icd10_service::{router, AppState, Config};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading ICD-10 catalog from: {}", config.data_dir.display());

    // Verify the four dataset files before accepting traffic.
    let catalog = Catalog::from_dir(&config.data_dir)?;

    let chapters = catalog.all_chapters()?;
    tracing::info!("Catalog ready: {} chapters", chapters.len());

    let app = router(AppState {
        catalog: Arc::new(catalog),
    })
    .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting ICD-10 catalog server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
