mod handlers;
mod types;

pub use types::{ErrorResponse, GenerateRequest, GenerateResponse};

use crate::{Result, config::Config, generator::Generator};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(generator: Arc<Generator>) -> Router {
    let app_state = handlers::AppState { generator };

    Router::new()
        .route("/generate", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let generator = Arc::new(Generator::from_config(&config)?);
    let app = router(generator);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
