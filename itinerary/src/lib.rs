pub mod assembler;
pub mod bounds;
pub mod config;
pub mod error;
pub mod events;
pub mod gpx_export;
pub mod markers;
pub mod models;
pub mod payload;
pub mod polylines;
pub mod segmenter;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::assembler::visualize;
use crate::config::VisualizationConfig;
use crate::error::ItineraryError;
use crate::events::TracingObserver;
use crate::gpx_export::encode_visualization_as_gpx;
use crate::models::{ApiError, GpxResponse, Visualization, VisualizeRequest};
use crate::payload::route_from_value;

#[derive(Clone, Default)]
pub struct AppState {
    pub config: Arc<VisualizationConfig>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/visualize", post(visualize_handler))
        .route("/api/visualize/gpx", post(gpx_handler))
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn visualize_handler(
    State(state): State<AppState>,
    Json(req): Json<VisualizeRequest>,
) -> Result<Json<Visualization>, (StatusCode, Json<ApiError>)> {
    render(&state, req).map(Json).map_err(api_error)
}

async fn gpx_handler(
    State(state): State<AppState>,
    Json(req): Json<VisualizeRequest>,
) -> Result<Json<GpxResponse>, (StatusCode, Json<ApiError>)> {
    let viz = render(&state, req).map_err(api_error)?;
    let gpx_base64 = encode_visualization_as_gpx(&viz).map_err(api_error)?;

    Ok(Json(GpxResponse {
        gpx_base64,
        marker_count: viz.markers.len(),
        polyline_count: viz.polylines.len(),
    }))
}

fn render(state: &AppState, req: VisualizeRequest) -> Result<Visualization, ItineraryError> {
    let route = route_from_value(req.route)?;
    tracing::debug!(
        "visualizing {} points over {} day(s) as {:?}",
        route.coordinates.len(),
        route.daily_routes.len(),
        req.context.trip_type
    );
    Ok(visualize(&route, &req.context, &state.config, &TracingObserver))
}

fn api_error(err: ItineraryError) -> (StatusCode, Json<ApiError>) {
    let status = match &err {
        ItineraryError::Payload(_) => StatusCode::BAD_REQUEST,
        ItineraryError::Gpx(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("{err}");
    }

    (
        status,
        Json(ApiError {
            message: err.to_string(),
        }),
    )
}
