use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};

use crate::error::ItineraryError;
use crate::models::{Coordinate, Marker, Visualization};

const CREATOR: &str = "itinerary";

/// Markers become GPX waypoints, each polyline one segment of a single track.
pub fn visualization_to_gpx(viz: &Visualization) -> Result<Vec<u8>, ItineraryError> {
    let mut gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(CREATOR.into()),
        ..Default::default()
    };

    gpx.waypoints = viz.markers.iter().map(marker_waypoint).collect();

    if !viz.polylines.is_empty() {
        let mut track = Track {
            name: Some(CREATOR.into()),
            ..Default::default()
        };
        for polyline in &viz.polylines {
            let mut segment = TrackSegment::new();
            segment
                .points
                .extend(polyline.coordinates.iter().map(to_waypoint));
            track.segments.push(segment);
        }
        gpx.tracks.push(track);
    }

    let mut buffer = Vec::new();
    gpx::write(&gpx, &mut buffer)?;
    Ok(buffer)
}

pub fn encode_visualization_as_gpx(viz: &Visualization) -> Result<String, ItineraryError> {
    visualization_to_gpx(viz).map(|bytes| BASE64.encode(bytes))
}

fn marker_waypoint(marker: &Marker) -> Waypoint {
    let mut waypoint = to_waypoint(&marker.position);
    waypoint.name = Some(marker.title.clone());
    waypoint.description = Some(marker.description.clone());
    waypoint
}

fn to_waypoint(coord: &Coordinate) -> Waypoint {
    Waypoint::new(Point::new(coord.lon, coord.lat))
}
