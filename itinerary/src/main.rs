use std::sync::Arc;

use itinerary::{AppState, config::AppConfig, create_router};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itinerary=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    let state = AppState {
        config: Arc::new(config.visualization),
    };

    // The map client is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = create_router(state).layer(cors);

    tracing::info!("starting itinerary on http://{addr}");
    tracing::info!("  POST /api/visualize - markers, polylines and bounds for a route");
    tracing::info!("  POST /api/visualize/gpx - same, as a base64 GPX document");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
