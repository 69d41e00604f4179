use serde::{Deserialize, Serialize};

pub use shared::{
    ApiError, Coordinate, DaySegment, Marker, MarkerColor, MarkerIcon, MarkerKind, Polyline,
    PolylineMetadata, Route, RouteBounds, TripContext, TripType, ViewportHint, Visualization,
};

/// Body of the visualization endpoints. `route` is left untyped until it goes
/// through [`crate::payload::route_from_value`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizeRequest {
    pub route: serde_json::Value,
    #[serde(flatten)]
    pub context: TripContext,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpxResponse {
    pub gpx_base64: String,
    pub marker_count: usize,
    pub polyline_count: usize,
}
