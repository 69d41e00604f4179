use crate::{
    bounds::{compute_bounds, viewport_hint},
    config::VisualizationConfig,
    events::{VisualizationEvent, VisualizationObserver},
    markers::generate_markers,
    models::{Route, RouteBounds, TripContext, Visualization},
    polylines::build_polylines,
    segmenter::segment,
};

/// Turn a route into everything the map needs to draw it.
///
/// Pure apart from the observer notifications: the same route and context
/// always give the same output, so callers may re-run it on every render.
pub fn visualize(
    route: &Route,
    ctx: &TripContext,
    config: &VisualizationConfig,
    observer: &dyn VisualizationObserver,
) -> Visualization {
    if route.coordinates.is_empty() {
        observer.on_event(&VisualizationEvent::BoundsSkipped);
        return Visualization::default();
    }

    let markers = generate_markers(route, ctx.trip_type, &config.style.markers, observer);
    observer.on_event(&VisualizationEvent::MarkersGenerated {
        count: markers.len(),
    });

    let polylines = build_polylines(route, ctx.trip_type, &config.style.polylines);
    observer.on_event(&VisualizationEvent::PolylinesBuilt {
        count: polylines.len(),
    });

    let bounds = compute_bounds(&route.coordinates);
    let viewport = bounds.map(|b| viewport_hint(b, &config.viewport));
    let focus_bounds = ctx.day.and_then(|day| day_bounds(route, day));

    Visualization {
        markers,
        polylines,
        bounds,
        viewport,
        focus_bounds,
    }
}

/// Bounds of the first day labelled `day`, over its segmenter range.
fn day_bounds(route: &Route, day: u32) -> Option<RouteBounds> {
    let position = route.daily_routes.iter().position(|d| d.day == day)?;
    let segmentation = segment(route.coordinates.len(), route.daily_routes.len());
    let range = segmentation.ranges.get(position).copied().flatten()?;
    compute_bounds(route.coordinates.get(range.indices())?)
}
