use geo_types::{Rect, coord};

use crate::config::ViewportConfig;
use crate::models::{Coordinate, RouteBounds, ViewportHint};

/// Smallest lat/lon box enclosing every coordinate, `None` for an empty slice.
pub fn compute_bounds(coords: &[Coordinate]) -> Option<RouteBounds> {
    let first = coords.first()?;
    let seed = RouteBounds {
        min_lat: first.lat,
        max_lat: first.lat,
        min_lon: first.lon,
        max_lon: first.lon,
    };

    Some(coords.iter().skip(1).fold(seed, |acc, coord| RouteBounds {
        min_lat: acc.min_lat.min(coord.lat),
        max_lat: acc.max_lat.max(coord.lat),
        min_lon: acc.min_lon.min(coord.lon),
        max_lon: acc.max_lon.max(coord.lon),
    }))
}

pub fn to_rect(bounds: &RouteBounds) -> Rect<f64> {
    Rect::new(
        coord! { x: bounds.min_lon, y: bounds.min_lat },
        coord! { x: bounds.max_lon, y: bounds.max_lat },
    )
}

/// Padding and zoom ceiling are only carried along; clamping is up to the map.
pub fn viewport_hint(bounds: RouteBounds, config: &ViewportConfig) -> ViewportHint {
    let center = to_rect(&bounds).center();
    ViewportHint {
        bounds,
        center: Coordinate {
            lat: center.y,
            lon: center.x,
        },
        padding: config.padding,
        max_zoom: config.max_zoom,
    }
}
