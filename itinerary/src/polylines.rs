use crate::{
    config::{PolylineStyles, StrokeStyle},
    models::{Coordinate, DaySegment, Polyline, PolylineMetadata, Route, TripType},
};

/// Styled path segments for the map.
///
/// - trekking with daily routes: the loop split at `floor(T / 2)` into a solid outbound and a
///   dashed return leg, both holding the midpoint
/// - cycling with daily routes: one polyline per day, adjacent days sharing
///   their boundary coordinate
/// - anything else: a single polyline over the whole route
///
/// Fewer than two coordinates never produce a polyline.
pub fn build_polylines(route: &Route, trip_type: TripType, styles: &PolylineStyles) -> Vec<Polyline> {
    if route.coordinates.len() < 2 {
        return Vec::new();
    }

    match trip_type {
        TripType::Trekking if !route.daily_routes.is_empty() => trekking_legs(route, styles),
        TripType::Cycling if !route.daily_routes.is_empty() => cycling_days(route, styles),
        _ => vec![fallback_line(route, trip_type, styles)],
    }
}

fn trekking_legs(route: &Route, styles: &PolylineStyles) -> Vec<Polyline> {
    let coords = &route.coordinates;
    let mid = coords.len() / 2;
    let (first_day, last_day) = (route.daily_routes.first(), route.daily_routes.last());

    let legs = [
        (
            "outbound",
            &coords[..=mid],
            &styles.trekking_outbound,
            PolylineMetadata {
                direction: Some("outbound".into()),
                description: Some("Outbound leg".into()),
                start_point: first_day.map(|d| d.start_point.clone()),
                ..PolylineMetadata::default()
            },
        ),
        (
            "return",
            &coords[mid..],
            &styles.trekking_return,
            PolylineMetadata {
                direction: Some("return".into()),
                description: Some("Return leg".into()),
                end_point: last_day.map(|d| d.end_point.clone()),
                ..PolylineMetadata::default()
            },
        ),
    ];

    legs.into_iter()
        .filter(|(_, slice, _, _)| slice.len() >= 2)
        .map(|(id, slice, style, metadata)| stroke(id.to_string(), slice, style, metadata))
        .collect()
}

fn cycling_days(route: &Route, styles: &PolylineStyles) -> Vec<Polyline> {
    let coords = &route.coordinates;
    let total = coords.len();
    let day_count = route.daily_routes.len();
    let points_per_day = total / day_count;

    route
        .daily_routes
        .iter()
        .enumerate()
        .filter_map(|(i, day)| {
            let start = i * points_per_day;
            // Inclusive upper bound, so the next day starts where this one ends.
            let end = if i + 1 == day_count {
                total
            } else {
                (i + 1) * points_per_day
            };
            let slice = coords.get(start..(end + 1).min(total))?;
            if slice.len() < 2 {
                return None;
            }
            let style = if i == 0 {
                &styles.cycling_first_day
            } else {
                &styles.cycling_later_days
            };
            Some(stroke(format!("day-{}", i + 1), slice, style, day_metadata(day)))
        })
        .collect()
}

fn fallback_line(route: &Route, trip_type: TripType, styles: &PolylineStyles) -> Polyline {
    let description = match trip_type {
        TripType::Cycling => "Cycling route",
        TripType::Trekking => "Trekking route",
        TripType::Other => "Route",
    };
    stroke(
        "route".to_string(),
        &route.coordinates,
        styles.fallback_for(trip_type),
        PolylineMetadata {
            description: Some(description.into()),
            distance: route.total_distance,
            ..PolylineMetadata::default()
        },
    )
}

fn day_metadata(day: &DaySegment) -> PolylineMetadata {
    PolylineMetadata {
        direction: None,
        description: Some(format!("Day {}", day.day)),
        distance: day.distance,
        start_point: Some(day.start_point.clone()),
        end_point: Some(day.end_point.clone()),
    }
}

fn stroke(
    id: String,
    coords: &[Coordinate],
    style: &StrokeStyle,
    metadata: PolylineMetadata,
) -> Polyline {
    Polyline {
        id,
        coordinates: coords.to_vec(),
        color: style.color.clone(),
        weight: style.weight,
        opacity: style.opacity,
        dash_array: style.dash_array.clone(),
        metadata,
    }
}
